use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " Tab/Shift+Tab: Move │ Enter/Space: Press │ Ctrl+D: Theme │ r: Retry load │ Esc: Clear input/Quit │ q: Quit";

pub struct Footer<'a> {
    author: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(author: &'a str) -> Self {
        Self { author }
    }

    pub fn widget(&self, area: Rect, palette: &Palette) -> Paragraph<'static> {
        let credit = format!("© All-in-One Showcase by {} · v{} ", self.author, VERSION);

        // Pad by char count, not bytes.
        let hints_width = HINTS.chars().count();
        let credit_width = credit.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(credit_width);

        let text_style = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(credit, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
