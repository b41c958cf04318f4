use tokio::sync::mpsc::UnboundedSender;

use crate::ui::components::ForwardedInput;
use crate::ui::context::AppContext;
use crate::ui::counter::{CounterAction, CounterIntent, CounterReducer, CounterState};
use crate::ui::flags::{FlagId, FlagIntent, FlagsReducer, FlagsState};
use crate::ui::focus::{Control, FocusHandle, FocusRing};
use crate::ui::lazy::{LazyIntent, LazyReducer, LazyState, LazyView, LoadError};
use crate::ui::memo::Memo;
use crate::ui::mvi::dispatch;
use crate::ui::router::{RouteState, RouterIntent, RouterReducer};
use crate::ui::text_field::{TextFieldIntent, TextFieldReducer, TextFieldState};
use crate::ui::transition::BoxTransition;

/// Requests the UI hands to the async side of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    LoadLazyPanel,
}

pub type UiCommandSender = UnboundedSender<UiCommand>;

/// All mutable session state. Created once with fixed defaults, owned by
/// [`App`], never shared or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub flags: FlagsState,
    pub name: TextFieldState,
}

fn double(counter: &i64) -> i64 {
    counter.saturating_mul(2)
}

pub struct App {
    should_quit: bool,
    context: AppContext,
    state: AppState,
    /// `counter * 2`, recomputed only when `counter` changes.
    doubled: Memo<i64, i64>,
    route: RouteState,
    lazy: LazyState,
    focus: FocusRing,
    focus_target: FocusHandle,
    focus_target_text: TextFieldState,
    /// Parent's copy of the handle given to `forwarded_input`.
    forwarded_handle: FocusHandle,
    forwarded_input: ForwardedInput,
    forwarded_text: TextFieldState,
    box_transition: BoxTransition,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(context: AppContext, initial_path: impl Into<String>) -> Self {
        let state = AppState::default();
        let focus = FocusRing::default();
        let forwarded_handle = focus.handle(Control::ForwardedInput);
        tracing::info!(count = state.counter.counter, "Count updated");
        Self {
            should_quit: false,
            context,
            doubled: Memo::new(state.counter.counter, double),
            state,
            route: RouteState {
                path: initial_path.into(),
            },
            lazy: LazyState::default(),
            focus_target: focus.handle(Control::FocusTargetInput),
            focus_target_text: TextFieldState::default(),
            forwarded_input: ForwardedInput::new(forwarded_handle.clone()),
            forwarded_handle,
            forwarded_text: TextFieldState::default(),
            focus,
            box_transition: BoxTransition::default(),
            commands: None,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn doubled(&self) -> i64 {
        *self.doubled.get()
    }

    pub fn doubled_evaluations(&self) -> u64 {
        self.doubled.evaluations()
    }

    pub fn route(&self) -> &RouteState {
        &self.route
    }

    pub fn lazy(&self) -> &LazyState {
        &self.lazy
    }

    pub fn focused(&self) -> Control {
        self.focus.current()
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.focus.is_focused(control)
    }

    pub fn focus_target_text(&self) -> &TextFieldState {
        &self.focus_target_text
    }

    pub fn forwarded_input(&self) -> &ForwardedInput {
        &self.forwarded_input
    }

    pub fn forwarded_text(&self) -> &TextFieldState {
        &self.forwarded_text
    }

    pub fn box_transition(&self) -> BoxTransition {
        self.box_transition
    }

    pub fn modal_visible(&self) -> bool {
        self.state.flags.get(FlagId::ModalVisible)
    }

    pub fn dark_mode(&self) -> bool {
        self.state.flags.get(FlagId::DarkMode)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.dispatch_lazy(LazyIntent::AnimationTick);
        self.box_transition
            .step(self.state.flags.get(FlagId::BoxVisible));
    }

    // ========================================================================
    // Dispatch (MVI pattern)
    // ========================================================================

    /// Counter transitions. A change of the plain counter refreshes the
    /// memoized double and logs the new count.
    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        let before = self.state.counter.counter;
        dispatch::<CounterReducer>(&mut self.state.counter, intent);
        let count = self.state.counter.counter;
        let doubled = *self.doubled.update(&count);
        if count != before {
            tracing::info!(count, doubled, "Count updated");
        }
    }

    pub fn dispatch_flags(&mut self, intent: FlagIntent) {
        if dispatch::<FlagsReducer>(&mut self.state.flags, intent) {
            tracing::debug!(?intent, "Flag changed");
        }
    }

    pub fn dispatch_name(&mut self, intent: TextFieldIntent) {
        dispatch::<TextFieldReducer>(&mut self.state.name, intent);
    }

    pub fn dispatch_route(&mut self, intent: RouterIntent) {
        dispatch::<RouterReducer>(&mut self.route, intent);
    }

    pub fn dispatch_lazy(&mut self, intent: LazyIntent) {
        dispatch::<LazyReducer>(&mut self.lazy, intent);
    }

    // ========================================================================
    // Lazy panel
    // ========================================================================

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    /// Ask the runtime to start a load. Returns `false` when there is no
    /// runtime attached or it has gone away.
    pub fn request_lazy_load(&mut self) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };
        match sender.send(UiCommand::LoadLazyPanel) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Lazy load request dropped");
                false
            }
        }
    }

    pub fn on_lazy_loaded(&mut self, outcome: Result<LazyView, LoadError>) {
        let intent = match outcome {
            Ok(view) => LazyIntent::Resolved { view },
            Err(err) => LazyIntent::Failed {
                error: err.to_string(),
            },
        };
        self.dispatch_lazy(intent);
    }

    /// Back to pending and load again; only meaningful after a failure.
    pub fn retry_lazy(&mut self) {
        if !self.lazy.is_failed() {
            return;
        }
        self.dispatch_lazy(LazyIntent::Retry);
        if self.focus.current() == Control::LazyRetry {
            self.focus_next();
        }
        self.request_lazy_load();
    }

    // ========================================================================
    // Controls
    // ========================================================================

    pub fn focus_next(&mut self) {
        self.focus.next();
        while !self.is_focusable(self.focus.current()) {
            self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
        while !self.is_focusable(self.focus.current()) {
            self.focus.prev();
        }
    }

    /// The Retry button only exists while the lazy panel shows a failure.
    fn is_focusable(&self, control: Control) -> bool {
        control != Control::LazyRetry || self.lazy.is_failed()
    }

    pub fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "Navigate");
        self.dispatch_route(RouterIntent::Navigate {
            path: path.to_string(),
        });
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch_flags(FlagIntent::Flip(FlagId::DarkMode));
    }

    pub fn open_modal(&mut self) {
        self.dispatch_flags(FlagIntent::Set(FlagId::ModalVisible, true));
    }

    /// Close callback handed to the portal.
    pub fn close_modal(&mut self) {
        self.dispatch_flags(FlagIntent::Set(FlagId::ModalVisible, false));
    }

    /// Press the focused control.
    pub fn activate(&mut self) {
        match self.focus.current() {
            Control::DarkModeButton => self.toggle_dark_mode(),
            Control::NavLink(route) => self.navigate(route.path()),
            Control::ToggleLogin => self.dispatch_flags(FlagIntent::Flip(FlagId::LoggedIn)),
            Control::CounterIncrement => self.dispatch_counter(CounterIntent::IncrementPlain),
            Control::CounterDecrement => self.dispatch_counter(CounterIntent::DecrementPlain),
            Control::ReducerIncrement => self.dispatch_counter(CounterIntent::Dispatch(
                CounterAction::from_type("inc"),
            )),
            Control::ReducerDecrement => self.dispatch_counter(CounterIntent::Dispatch(
                CounterAction::from_type("dec"),
            )),
            Control::CustomToggle => self.dispatch_flags(FlagIntent::Flip(FlagId::Custom)),
            Control::FocusTargetButton => self.focus_target.focus(),
            Control::ForwardedFocusButton => self.forwarded_handle.focus(),
            Control::LazyRetry => self.retry_lazy(),
            Control::ToggleBox => self.dispatch_flags(FlagIntent::Flip(FlagId::BoxVisible)),
            Control::OpenModal => self.open_modal(),
            Control::NameInput | Control::FocusTargetInput | Control::ForwardedInput => {}
        }
    }

    /// Append `ch` to the focused input, if any.
    pub fn type_char(&mut self, ch: char) {
        let focused = self.focus.current();
        if focused == Control::NameInput {
            let value = self.state.name.with_char(ch);
            self.dispatch_name(TextFieldIntent::Set { value });
            return;
        }
        if let Some(slot) = self.scratch_input_mut(focused) {
            let value = slot.with_char(ch);
            dispatch::<TextFieldReducer>(slot, TextFieldIntent::Set { value });
        }
    }

    /// Delete the last character of the focused input, if any.
    pub fn backspace(&mut self) {
        let focused = self.focus.current();
        if focused == Control::NameInput {
            let value = self.state.name.without_last();
            self.dispatch_name(TextFieldIntent::Set { value });
            return;
        }
        if let Some(slot) = self.scratch_input_mut(focused) {
            let value = slot.without_last();
            dispatch::<TextFieldReducer>(slot, TextFieldIntent::Set { value });
        }
    }

    /// Text of the focused input, `None` when focus is on a button.
    pub fn focused_input(&self) -> Option<&TextFieldState> {
        match self.focus.current() {
            Control::NameInput => Some(&self.state.name),
            Control::FocusTargetInput => Some(&self.focus_target_text),
            Control::ForwardedInput => Some(&self.forwarded_text),
            _ => None,
        }
    }

    /// Empty the focused input, if any.
    pub fn clear_input(&mut self) {
        let focused = self.focus.current();
        if focused == Control::NameInput {
            self.dispatch_name(TextFieldIntent::Clear);
            return;
        }
        if let Some(slot) = self.scratch_input_mut(focused) {
            dispatch::<TextFieldReducer>(slot, TextFieldIntent::Clear);
        }
    }

    /// The two demo inputs whose text lives outside `AppState`.
    fn scratch_input_mut(&mut self, control: Control) -> Option<&mut TextFieldState> {
        match control {
            Control::FocusTargetInput => Some(&mut self.focus_target_text),
            Control::ForwardedInput => Some(&mut self.forwarded_text),
            _ => None,
        }
    }
}
