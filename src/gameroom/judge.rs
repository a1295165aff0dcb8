use super::event::Event;
use crate::gameplay::State;

/// Anything that can call whether the player won.
/// Implementations can be terminal users, random bots, perfect bots, etc.
///
/// The table is synchronous: every method runs to completion before the
/// session moves on, and all state mutation happens between calls.
pub trait Judge {
    /// Call the current round. `Some(true)` is "Yes, the player wins",
    /// `Some(false)` is "No", and `None` leaves the table.
    fn decide(&mut self, state: &State) -> anyhow::Result<Option<bool>>;
    /// Dismiss the verdict of a judged round. Returning false leaves the table.
    /// Default implementation always carries on.
    fn proceed(&mut self, state: &State) -> anyhow::Result<bool> {
        let _ = state;
        Ok(true)
    }
    /// Receive notification of table events.
    /// Useful for rendering or logging; not required for deciding.
    fn notify(&mut self, event: &Event) {
        let _ = event;
    }
}

impl<J> Judge for &mut J
where
    J: Judge + ?Sized,
{
    fn decide(&mut self, state: &State) -> anyhow::Result<Option<bool>> {
        (**self).decide(state)
    }
    fn proceed(&mut self, state: &State) -> anyhow::Result<bool> {
        (**self).proceed(state)
    }
    fn notify(&mut self, event: &Event) {
        (**self).notify(event)
    }
}
