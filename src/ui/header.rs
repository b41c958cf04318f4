use crate::ui::components::button;
use crate::ui::theme::{Palette, ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "🚀 All-in-One Showcase";

pub struct Header {
    dark_mode: bool,
    button_focused: bool,
}

impl Header {
    pub fn new(dark_mode: bool, button_focused: bool) -> Self {
        Self {
            dark_mode,
            button_focused,
        }
    }

    /// The dark mode button offers the mode you would switch to.
    pub fn mode_label(&self) -> &'static str {
        if self.dark_mode {
            "☀️ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }

    pub fn widget(&self, palette: &Palette) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(palette.muted)),
            button(self.mode_label(), palette.text, self.button_focused, palette),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
