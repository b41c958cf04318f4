use crate::ui::mvi::Reducer;

use super::intent::LazyIntent;
use super::state::{LazyState, SPINNER_FRAMES};

pub struct LazyReducer;

impl Reducer for LazyReducer {
    type State = LazyState;
    type Intent = LazyIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LazyIntent::AnimationTick => match state {
                LazyState::Pending { animation_tick } => LazyState::Pending {
                    animation_tick: (animation_tick + 1) % SPINNER_FRAMES.len() as u8,
                },
                other => other,
            },
            LazyIntent::Resolved { view } => LazyState::Resolved { view },
            LazyIntent::Failed { error } => LazyState::Failed { error },
            LazyIntent::Retry => match state {
                LazyState::Failed { .. } => LazyState::Pending { animation_tick: 0 },
                other => other,
            },
        }
    }
}
