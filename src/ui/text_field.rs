//! Free-form text held verbatim.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    pub value: String,
}

impl UiState for TextFieldState {}

impl TextFieldState {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Value after appending `ch`, for keystroke handlers that build the
    /// next `Set` intent.
    pub fn with_char(&self, ch: char) -> String {
        let mut next = self.value.clone();
        next.push(ch);
        next
    }

    /// Value with the last character removed.
    pub fn without_last(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldIntent {
    /// Replace the whole value. No trimming, escaping or length limit.
    Set { value: String },
    Clear,
}

impl Intent for TextFieldIntent {}

pub struct TextFieldReducer;

impl Reducer for TextFieldReducer {
    type State = TextFieldState;
    type Intent = TextFieldIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TextFieldIntent::Set { value } => TextFieldState { value },
            TextFieldIntent::Clear => TextFieldState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reads_back_exactly() {
        for value in ["", "  padded  ", "<b>tag</b>", "héllo\twörld", "line\nbreak"] {
            let state = TextFieldReducer::reduce(
                TextFieldState::default(),
                TextFieldIntent::Set {
                    value: value.to_string(),
                },
            );
            assert_eq!(state.value, value);
        }
    }

    #[test]
    fn keystroke_helpers() {
        let state = TextFieldState {
            value: "ab".into(),
        };
        assert_eq!(state.with_char('ç'), "abç");
        assert_eq!(state.without_last(), "a");
        assert_eq!(TextFieldState::default().without_last(), "");
    }

    #[test]
    fn clear_empties() {
        let state = TextFieldReducer::reduce(
            TextFieldState {
                value: "x".into(),
            },
            TextFieldIntent::Clear,
        );
        assert!(state.is_empty());
    }
}
