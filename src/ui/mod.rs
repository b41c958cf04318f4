pub mod app;
pub mod components;
pub mod context;
pub mod counter;
pub mod events;
pub mod flags;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod lazy;
pub mod memo;
pub mod mvi;
pub mod portal;
pub mod render;
pub mod router;
pub mod runtime;
pub mod terminal_guard;
pub mod text_field;
pub mod theme;
pub mod transition;
