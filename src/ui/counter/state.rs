use crate::ui::mvi::UiState;

/// Both counters start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    /// Plain counter, changed by direct increment/decrement.
    pub counter: i64,
    /// Changed only by dispatched `Increment`/`Decrement` actions.
    pub reducer_counter: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn doubled(&self) -> i64 {
        self.counter.saturating_mul(2)
    }
}
