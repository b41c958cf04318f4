//! Boolean flags: login status, dark mode, modal, box, and the generic
//! toggle.

mod flag;
mod intent;
mod reducer;
mod state;

pub use flag::Flag;
pub use intent::{FlagId, FlagIntent};
pub use reducer::FlagsReducer;
pub use state::FlagsState;
