use crate::Score;
use crate::gameplay::*;

/// Events broadcast by the [`Table`](super::Table) to its judge.
/// Renderers react to these; decisions never depend on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A new round is on the table.
    Deal(Round),
    /// The last call has been scored.
    Verdict(Judgment),
    /// The final round of a game was judged, with the final score.
    GameOver(Score),
    /// Countdown and score were reset for a new game.
    Reset,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Deal(round) => write!(f, "deal {}", round),
            Event::Verdict(judgment) => write!(f, "{} ({:+})", judgment.label(), judgment.delta()),
            Event::GameOver(score) => write!(f, "game over, scored {}", score),
            Event::Reset => write!(f, "new game"),
        }
    }
}
