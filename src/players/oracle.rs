use crate::gameplay::State;
use crate::gameroom::Judge;

/// CPU judge that always makes the right call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Oracle;

impl Judge for Oracle {
    fn decide(&mut self, state: &State) -> anyhow::Result<Option<bool>> {
        Ok(Some(state.round().outcome()))
    }
}
