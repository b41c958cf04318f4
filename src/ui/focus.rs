//! Keyboard focus ring and the focus handles views hand out.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::router::Route;

/// Every focusable control, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    DarkModeButton,
    NavLink(Route),
    ToggleLogin,
    NameInput,
    CounterIncrement,
    CounterDecrement,
    ReducerIncrement,
    ReducerDecrement,
    CustomToggle,
    FocusTargetInput,
    FocusTargetButton,
    ForwardedInput,
    ForwardedFocusButton,
    LazyRetry,
    ToggleBox,
    OpenModal,
}

pub const TAB_ORDER: &[Control] = &[
    Control::DarkModeButton,
    Control::NavLink(Route::Home),
    Control::NavLink(Route::About),
    Control::NavLink(Route::Contact),
    Control::ToggleLogin,
    Control::NameInput,
    Control::CounterIncrement,
    Control::CounterDecrement,
    Control::ReducerIncrement,
    Control::ReducerDecrement,
    Control::CustomToggle,
    Control::FocusTargetInput,
    Control::FocusTargetButton,
    Control::ForwardedInput,
    Control::ForwardedFocusButton,
    Control::LazyRetry,
    Control::ToggleBox,
    Control::OpenModal,
];

impl Control {
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Control::NameInput | Control::FocusTargetInput | Control::ForwardedInput
        )
    }
}

/// Tracks which control has focus. The slot is shared with every
/// [`FocusHandle`] the ring hands out.
#[derive(Debug, Clone)]
pub struct FocusRing {
    current: Arc<Mutex<Control>>,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self {
            current: Arc::new(Mutex::new(TAB_ORDER[0])),
        }
    }
}

impl FocusRing {
    pub fn current(&self) -> Control {
        *self.current.lock()
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.current() == control
    }

    pub fn next(&self) {
        self.step(1);
    }

    pub fn prev(&self) {
        self.step(TAB_ORDER.len() - 1);
    }

    /// A handle that moves focus to `target` when invoked.
    pub fn handle(&self, target: Control) -> FocusHandle {
        FocusHandle {
            target,
            slot: Arc::clone(&self.current),
        }
    }

    fn step(&self, offset: usize) {
        let mut current = self.current.lock();
        let index = TAB_ORDER
            .iter()
            .position(|control| *control == *current)
            .unwrap_or(0);
        *current = TAB_ORDER[(index + offset) % TAB_ORDER.len()];
    }
}

/// Capability to focus one particular control. Callers only get `focus()`;
/// how focus is tracked stays inside the view layer.
#[derive(Debug, Clone)]
pub struct FocusHandle {
    target: Control,
    slot: Arc<Mutex<Control>>,
}

impl FocusHandle {
    pub fn focus(&self) {
        *self.slot.lock() = self.target;
        tracing::debug!(target_control = ?self.target, "Focus moved by handle");
    }

    pub fn is_focused(&self) -> bool {
        *self.slot.lock() == self.target
    }
}
