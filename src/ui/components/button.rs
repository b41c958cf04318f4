use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::ui::theme::Palette;

/// `[ label ]`, highlighted while focused.
pub fn button(label: &str, color: Color, focused: bool, palette: &Palette) -> Span<'static> {
    let mut style = Style::default().fg(color);
    if focused {
        style = style.bg(palette.focus).add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(format!("[ {label} ]"), style)
}
