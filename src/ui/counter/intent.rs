use crate::ui::mvi::Intent;

/// Action understood by the reducer-driven counter.
///
/// Built from a type tag so that tags the reducer does not know about
/// still make it to the reducer, which ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Unknown(String),
}

impl CounterAction {
    pub fn from_type(tag: &str) -> Self {
        match tag {
            "inc" | "increment" => Self::Increment,
            "dec" | "decrement" => Self::Decrement,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    IncrementPlain,
    DecrementPlain,
    Dispatch(CounterAction),
}

impl Intent for CounterIntent {}
