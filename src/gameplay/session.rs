use super::judgment::Judgment;
use super::round::Round;
use super::state::State;
use super::thrower::Thrower;

/// A game waiting for the user's call.
///
/// The round-complete state is a separate type, [`Complete`]. `submit`
/// consumes the session and `advance` consumes the completed round, so a
/// round can be judged exactly once and only after it has been dealt.
///
/// ```
/// use rochambeau::*;
/// let session = Session::start(Random::seeded(3));
/// let said_yes = session.state().round().outcome();
/// let complete = session.submit(said_yes);
/// assert!(complete.judgment().correct());
/// let session = complete.advance();
/// assert_eq!(session.state().left(), TOTAL_ROUNDS - 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    state: State,
    thrower: T,
}

/// A judged round, waiting to be dismissed.
#[derive(Debug, Clone)]
pub struct Complete<T> {
    state: State,
    thrower: T,
    judgment: Judgment,
}

impl<T> Session<T>
where
    T: Thrower,
{
    /// Fresh game: full countdown, zero score, first round dealt.
    pub fn start(mut thrower: T) -> Self {
        let round = Round::deal(&mut thrower);
        log::info!("starting game of {} rounds", crate::TOTAL_ROUNDS);
        Self {
            state: State::from(round),
            thrower,
        }
    }
    pub fn state(&self) -> &State {
        &self.state
    }
    /// Score the user's Yes/No call against the dealt round.
    pub fn submit(mut self, said_yes: bool) -> Complete<T> {
        let outcome = self.state.round.outcome();
        let judgment = self.state.tracker.judge(outcome, said_yes);
        self.state.verdict = Some(judgment);
        log::debug!(
            "{} | called {} | {} ({:+})",
            self.state.round,
            if said_yes { "yes" } else { "no" },
            judgment.label(),
            judgment.delta()
        );
        if self.state.is_over() {
            log::info!("game over, scored {}", self.state.score());
        }
        Complete {
            state: self.state,
            thrower: self.thrower,
            judgment,
        }
    }
}

impl<T> Complete<T>
where
    T: Thrower,
{
    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn judgment(&self) -> Judgment {
        self.judgment
    }
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
    /// Dismiss the verdict and deal the next round.
    ///
    /// Counts down while rounds remain; once the countdown is exhausted the
    /// score and countdown reset instead.
    pub fn advance(mut self) -> Session<T> {
        match self.state.left {
            0 => {
                log::info!("restarting after final score {}", self.state.score());
                self.state.left = self.state.total;
                self.state.tracker.reset();
            }
            _ => self.state.left -= 1,
        }
        self.state.round = Round::deal(&mut self.thrower);
        self.state.verdict = None;
        Session {
            state: self.state,
            thrower: self.thrower,
        }
    }
}
