use super::judgment::Judgment;
use super::round::Round;
use super::sign::Sign;
use super::tracker::Tracker;
use crate::Score;
use crate::TOTAL_ROUNDS;

/// Everything the presentation layer needs to render a game.
///
/// Owned and mutated only by [`Session`](super::Session) and
/// [`Complete`](super::Complete); everyone else gets a shared reference.
///
/// # Fields
///
/// - `total` — rounds per game, fixed at [`TOTAL_ROUNDS`]
/// - `left` — countdown in `0..=total`, reset once it hits zero and the
///   next round is requested
/// - `tracker` — running score for this game
/// - `round` — the signs on the table
/// - `verdict` — the last call, present only between judging and advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub(super) total: usize,
    pub(super) left: usize,
    pub(super) tracker: Tracker,
    pub(super) round: Round,
    pub(super) verdict: Option<Judgment>,
}

impl From<Round> for State {
    fn from(round: Round) -> Self {
        Self {
            total: TOTAL_ROUNDS,
            left: TOTAL_ROUNDS,
            tracker: Tracker::default(),
            round,
            verdict: None,
        }
    }
}

impl State {
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn left(&self) -> usize {
        self.left
    }
    /// Round number as displayed. Starts at zero.
    pub fn played(&self) -> usize {
        self.total - self.left
    }
    pub fn score(&self) -> Score {
        self.tracker.score()
    }
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn computer(&self) -> Sign {
        self.round.computer()
    }
    pub fn player(&self) -> Sign {
        self.round.player()
    }
    pub fn verdict(&self) -> Option<Judgment> {
        self.verdict
    }
    /// Last round of the game; advancing from here restarts.
    pub fn is_over(&self) -> bool {
        self.left == 0
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Round {} of {} | Score {}",
            self.played(),
            self.total,
            self.score()
        )
    }
}
