//! Terminal tour of UI state patterns: counters, a reducer, memoized values,
//! flags, focus handles, an injected context, an overlay portal, a lazily
//! loaded panel, path routing and a generic border wrapper.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
