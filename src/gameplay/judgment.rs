use crate::CORRECT;
use crate::INCORRECT;
use crate::Score;
use colored::Colorize;

/// The result of one Yes/No call.
///
/// Scoring is asymmetric: calling a player win correctly earns a point,
/// calling a player loss correctly earns nothing, and any wrong call
/// loses a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgment {
    correct: bool,
    delta: Score,
}

impl Judgment {
    /// `outcome` is whether the player actually won,
    /// `said_yes` is what the user called.
    pub fn judge(outcome: bool, said_yes: bool) -> Self {
        match (outcome, said_yes) {
            (true, true) => Self {
                correct: true,
                delta: 1,
            },
            (false, false) => Self {
                correct: true,
                delta: 0,
            },
            (true, false) | (false, true) => Self {
                correct: false,
                delta: -1,
            },
        }
    }
    pub fn correct(&self) -> bool {
        self.correct
    }
    pub fn delta(&self) -> Score {
        self.delta
    }
    pub fn label(&self) -> &'static str {
        match self.correct {
            true => CORRECT,
            false => INCORRECT,
        }
    }
}

impl std::fmt::Display for Judgment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.correct {
            true => write!(f, "{}", self.label().green()),
            false => write!(f, "{}", self.label().red()),
        }
    }
}
