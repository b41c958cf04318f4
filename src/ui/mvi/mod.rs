//! Model-View-Intent (MVI) primitives shared by every state slice.
//!
//! ```text
//! Key/Tick ──→ Intent ──→ Reducer ──→ State ──→ render
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next value
//! - **Intent**: a user action or system event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
