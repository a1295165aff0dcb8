/// A hand sign.
///
/// Encoded as `0..3` in declaration order, so `Sign::from(u8)` and
/// `u8::from(Sign)` are inverse on that range.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Sign {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }

    /// Does `self` defeat `other`?
    ///
    /// Rock crushes Scissors, Paper covers Rock, Scissors cut Paper.
    /// Every other pair, ties included, is false.
    pub fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Rock => "✊",
            Self::Paper => "✋",
            Self::Scissors => "✌",
        }
    }
}

impl From<u8> for Sign {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => panic!("Invalid sign"),
        }
    }
}
impl From<Sign> for u8 {
    fn from(s: Sign) -> u8 {
        s as u8
    }
}

/// str isomorphism, accepts full names or initials in any case
impl TryFrom<&str> for Sign {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(format!("not a sign: {}", s.trim())),
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "Rock",
                Self::Paper => "Paper",
                Self::Scissors => "Scissors",
            }
        )
    }
}
