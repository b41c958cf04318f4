//! Reducer trait and the in-place dispatch helper.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function for one state slice.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Must be total: intents that make no sense for the current state
    /// return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` against the state stored in `slot`, replacing it in place.
///
/// Returns `true` when the state changed.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) -> bool {
    let previous = std::mem::take(slot);
    let next = R::reduce(previous.clone(), intent);
    let changed = next != previous;
    *slot = next;
    changed
}
