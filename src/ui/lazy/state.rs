use crate::ui::mvi::UiState;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What a finished load hands back: the content of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyView {
    pub text: String,
}

impl LazyView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyState {
    /// Load in flight; render the fallback.
    Pending { animation_tick: u8 },
    Resolved { view: LazyView },
    Failed { error: String },
}

impl Default for LazyState {
    fn default() -> Self {
        Self::Pending { animation_tick: 0 }
    }
}

impl UiState for LazyState {}

impl LazyState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn spinner(&self) -> &'static str {
        match self {
            Self::Pending { animation_tick } => {
                SPINNER_FRAMES[*animation_tick as usize % SPINNER_FRAMES.len()]
            }
            _ => " ",
        }
    }
}
