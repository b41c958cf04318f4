use crate::ui::mvi::Reducer;

use super::intent::FlagIntent;
use super::state::FlagsState;

pub struct FlagsReducer;

impl Reducer for FlagsReducer {
    type State = FlagsState;
    type Intent = FlagIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlagIntent::Flip(id) => state.flag_mut(id).toggle(),
            FlagIntent::Set(id, value) => state.flag_mut(id).set(value),
        }
        state
    }
}
