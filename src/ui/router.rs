//! Static path routing for the page shown under the navigation bar.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
}

/// Path → page mapping, in navigation order.
pub const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/about", Route::About),
    ("/contact", Route::Contact),
];

impl Route {
    pub fn resolve(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }

    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(path, _)| *path)
            .unwrap_or("/")
    }

    pub fn link_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    pub fn page_text(self) -> &'static str {
        match self {
            Route::Home => "🏠 Home Page",
            Route::About => "ℹ️ About Page",
            Route::Contact => "📞 Contact Page",
        }
    }
}

/// Comma-separated list of known paths, for error messages.
pub fn available_paths() -> String {
    ROUTES
        .iter()
        .map(|(path, _)| *path)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current location. Holds the raw path so unknown paths can be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    pub path: String,
}

impl Default for RouteState {
    fn default() -> Self {
        Self {
            path: Route::Home.path().to_string(),
        }
    }
}

impl UiState for RouteState {}

impl RouteState {
    pub fn route(&self) -> Option<Route> {
        Route::resolve(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterIntent {
    Navigate { path: String },
}

impl Intent for RouterIntent {}

pub struct RouterReducer;

impl Reducer for RouterReducer {
    type State = RouteState;
    type Intent = RouterIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RouterIntent::Navigate { path } => RouteState { path },
        }
    }
}
