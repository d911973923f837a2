//! Dialog widget for error and empty-data states
//!
//! Self-contained centered dialog with a bordered title block, wrapped
//! content, and an optional footer line for the recovery key hints.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::styles::theme;

/// Dialog variant for different border styles
#[derive(Debug, Clone, Copy, Default)]
pub enum DialogVariant {
    #[default]
    Default,
    Error,
}

/// Centered dialog with title, content, and optional footer hints
pub struct Dialog<'a> {
    title: &'a str,
    content: &'a str,
    footer: Option<&'a str>,
    variant: DialogVariant,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            footer: None,
            variant: DialogVariant::Default,
        }
    }

    /// Set the visual variant (affects border color)
    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set footer text shown below the content (key hints)
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        let width = 60.min(area.width.saturating_sub(4)).max(20);
        // Borders, one padding row each side, wrapped content, footer
        let content_rows = (self.content.len() as u16 / width.saturating_sub(4).max(1)) + 1;
        let height = (content_rows + 4 + u16::from(self.footer.is_some()))
            .min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_style(),
            DialogVariant::Error => t.error_style(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::styled(format!(" {} ", self.title), t.title_style()))
            .title_alignment(Alignment::Center)
            .style(t.background_style());

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let mut lines = vec![Line::raw(""), Line::styled(self.content, t.text_style())];
        if let Some(footer) = self.footer {
            lines.push(Line::raw(""));
            lines.push(Line::styled(footer, t.emphasis_style()));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
