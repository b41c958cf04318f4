//! Overlay rendered outside the card tree.
//!
//! The portal draws last, over the whole frame rather than inside the card
//! that opened it. While it is showing it owns input; dismissing it runs the
//! close callback its owner supplies.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{POPUP_BG, POPUP_BORDER, STATUS_ERROR};

const MODAL_WIDTH: u16 = 36;

#[derive(Debug, Clone)]
pub struct Portal {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Portal {
    pub fn new(title: &'static str, lines: Vec<Line<'static>>) -> Self {
        Self { title, lines }
    }

    /// The demo modal.
    pub fn modal() -> Self {
        Self::new(
            "Modal",
            vec![
                Line::from(""),
                Line::from("Portal Modal").alignment(Alignment::Center),
                Line::from(""),
                Line::from(Span::styled(
                    "[ Close ]",
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ))
                .alignment(Alignment::Center),
                Line::from(""),
            ],
        )
    }
}

/// Draw `portal` on top of whatever is already in the frame, if `visible`.
pub fn render_portal(frame: &mut Frame<'_>, visible: bool, portal: &Portal) {
    if !visible {
        return;
    }
    let height = portal.lines.len() as u16 + 2;
    let area = centered_rect_by_size(frame.area(), MODAL_WIDTH, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", portal.title),
            Style::default().fg(POPUP_BORDER),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(POPUP_BORDER))
        .style(Style::default().bg(POPUP_BG).fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(portal.lines.clone()).block(block), area);
}

/// Input while the portal is open. The close keys run `on_close`; every
/// other key is swallowed so nothing behind the overlay reacts.
pub fn handle_portal_key(key: KeyEvent, on_close: impl FnOnce()) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
        on_close();
    }
}
