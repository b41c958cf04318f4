//! Asynchronously loaded panel.
//!
//! The panel starts `Pending` and shows a fallback until the load task
//! reports back. A task that never finishes leaves the panel pending; there
//! is no timeout and no cancellation. A failed load shows the error and can
//! be retried.
//!
//! - `state.rs` - Pending / Resolved / Failed
//! - `intent.rs` - load outcomes, spinner ticks, retry
//! - `reducer.rs` - transitions
//! - `loader.rs` - tokio task that runs a load and posts the outcome

mod intent;
mod loader;
mod reducer;
mod state;

pub use intent::LazyIntent;
pub use loader::{load_lazy_panel, LazyLoader, LoadError};
pub use reducer::LazyReducer;
pub use state::{LazyState, LazyView, SPINNER_FRAMES};
