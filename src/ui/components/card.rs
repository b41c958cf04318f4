use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{BorderType, Widget};

use crate::ui::theme::Palette;

use super::border::{with_border, WithBorder};

/// A titled, rounded section of the tour.
pub fn card<W: Widget>(title: &'static str, body: W, palette: &Palette) -> WithBorder<W> {
    with_border(body)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
}
