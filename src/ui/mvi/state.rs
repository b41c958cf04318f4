//! Marker trait for state slices.

/// A slice of UI state owned by the application root.
///
/// `Default` is the value at session start. `PartialEq` lets callers
/// detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
