use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Any widget, drawn inside a bordered container.
#[derive(Debug, Clone)]
pub struct WithBorder<W> {
    inner: W,
    title: Option<Line<'static>>,
    border_type: BorderType,
    border_style: Style,
}

/// Wrap `inner` in a border. The result is itself a widget, so wrappers
/// nest.
pub fn with_border<W: Widget>(inner: W) -> WithBorder<W> {
    WithBorder {
        inner,
        title: None,
        border_type: BorderType::Double,
        border_style: Style::default(),
    }
}

impl<W> WithBorder<W> {
    pub fn title(mut self, title: impl Into<Line<'static>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl<W: Widget> Widget for WithBorder<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(self.border_style);
        if let Some(title) = self.title {
            block = block.title(title);
        }
        let inner = block.inner(area);
        block.render(area, buf);
        self.inner.render(inner, buf);
    }
}
