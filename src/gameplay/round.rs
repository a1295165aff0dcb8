use super::sign::Sign;
use super::thrower::Thrower;

/// One computer-vs-player matchup.
///
/// A `Round` only exists fully dealt: both signs are drawn together in
/// [`Round::deal`], and the player's sign is redrawn until it differs from
/// the computer's. There is no tie to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    computer: Sign,
    player: Sign,
}

impl Round {
    pub fn deal<T>(thrower: &mut T) -> Self
    where
        T: Thrower,
    {
        let computer = thrower.throw();
        let player = redraw(thrower, computer);
        log::debug!("dealt {} vs {}", computer, player);
        Self { computer, player }
    }
    pub fn computer(&self) -> Sign {
        self.computer
    }
    pub fn player(&self) -> Sign {
        self.player
    }
    /// Does the player win this round?
    pub fn outcome(&self) -> bool {
        self.player.beats(self.computer)
    }
}

/// Draw signs until one differs from `excluding`.
///
/// Terminates with probability 1 for a uniform thrower, after at most two
/// extra draws on average.
pub fn redraw<T>(thrower: &mut T, excluding: Sign) -> Sign
where
    T: Thrower,
{
    loop {
        let sign = thrower.throw();
        if sign != excluding {
            return sign;
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}", self.computer, self.player)
    }
}
