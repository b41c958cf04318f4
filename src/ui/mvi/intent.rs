//! Marker trait for intents.

/// Something that happened: a key press on a control, a timer tick,
/// or a load task reporting back.
///
/// Intents carry no behavior; reducers decide what they mean.
pub trait Intent: Send + 'static {}
