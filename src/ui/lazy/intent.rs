use crate::ui::mvi::Intent;

use super::state::LazyView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyIntent {
    /// Advance the fallback spinner.
    AnimationTick,
    Resolved { view: LazyView },
    Failed { error: String },
    /// User asked to load again after a failure.
    Retry,
}

impl Intent for LazyIntent {}
