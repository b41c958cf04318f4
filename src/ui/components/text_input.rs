use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::focus::FocusHandle;
use crate::ui::theme::Palette;

const CARET: &str = "▏";

/// One-line input: the value, or the placeholder when empty.
pub fn text_input(
    value: &str,
    placeholder: &str,
    focused: bool,
    palette: &Palette,
) -> Line<'static> {
    let frame_style = if focused {
        Style::default().fg(palette.text).bg(palette.focus)
    } else {
        Style::default().fg(palette.muted)
    };
    let mut spans = vec![Span::styled("› ", frame_style)];
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(palette.text)));
    }
    if focused {
        spans.push(Span::styled(CARET, frame_style));
    }
    Line::from(spans)
}

/// Input that receives its focus handle from the parent, so the parent can
/// focus it without reaching into the input itself.
#[derive(Debug, Clone)]
pub struct ForwardedInput {
    handle: FocusHandle,
}

impl ForwardedInput {
    pub const PLACEHOLDER: &'static str = "Forwarded Input";

    pub fn new(handle: FocusHandle) -> Self {
        Self { handle }
    }

    pub fn line(&self, value: &str, palette: &Palette) -> Line<'static> {
        text_input(value, Self::PLACEHOLDER, self.handle.is_focused(), palette)
    }
}
