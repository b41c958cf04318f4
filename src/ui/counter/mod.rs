//! The two counters: a plain one with a memoized double, and a
//! reducer-driven one fed by typed actions.

mod intent;
mod reducer;
mod state;

pub use intent::{CounterAction, CounterIntent};
pub use reducer::CounterReducer;
pub use state::CounterState;
