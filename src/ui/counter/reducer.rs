use crate::ui::mvi::Reducer;

use super::intent::{CounterAction, CounterIntent};
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::IncrementPlain => CounterState {
                counter: state.counter.saturating_add(1),
                ..state
            },
            CounterIntent::DecrementPlain => CounterState {
                counter: state.counter.saturating_sub(1),
                ..state
            },
            CounterIntent::Dispatch(action) => match action {
                CounterAction::Increment => CounterState {
                    reducer_counter: state.reducer_counter.saturating_add(1),
                    ..state
                },
                CounterAction::Decrement => CounterState {
                    reducer_counter: state.reducer_counter.saturating_sub(1),
                    ..state
                },
                CounterAction::Unknown(_) => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(intents: impl IntoIterator<Item = CounterIntent>) -> CounterState {
        intents
            .into_iter()
            .fold(CounterState::default(), CounterReducer::reduce)
    }

    #[test]
    fn plain_increment_three_times() {
        let state = reduce_all(std::iter::repeat(CounterIntent::IncrementPlain).take(3));
        assert_eq!(state.counter, 3);
        assert_eq!(state.doubled(), 6);
        assert_eq!(state.reducer_counter, 0);
    }

    #[test]
    fn plain_decrement_goes_negative() {
        let state = reduce_all([CounterIntent::DecrementPlain, CounterIntent::DecrementPlain]);
        assert_eq!(state.counter, -2);
        assert_eq!(state.doubled(), -4);
    }

    #[test]
    fn dispatch_decrement_twice() {
        let state = reduce_all([
            CounterIntent::Dispatch(CounterAction::Decrement),
            CounterIntent::Dispatch(CounterAction::Decrement),
        ]);
        assert_eq!(state.reducer_counter, -2);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn unknown_action_is_noop() {
        let before = CounterState {
            counter: 4,
            reducer_counter: -7,
        };
        let after = CounterReducer::reduce(
            before,
            CounterIntent::Dispatch(CounterAction::Unknown("reset".into())),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn saturates_at_bounds() {
        let top = CounterState {
            counter: i64::MAX,
            reducer_counter: i64::MIN,
        };
        let state = CounterReducer::reduce(top, CounterIntent::IncrementPlain);
        assert_eq!(state.counter, i64::MAX);
        let state = CounterReducer::reduce(
            state,
            CounterIntent::Dispatch(CounterAction::Decrement),
        );
        assert_eq!(state.reducer_counter, i64::MIN);
    }
}
