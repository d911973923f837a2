//! Loading indicator widget.
//!
//! Braille spinner rendered in the vertical center of its area. The frame
//! index is advanced by the caller on every event-loop tick.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::styles::theme;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated loading indicator with a label.
pub struct Spinner<'a> {
    label: &'a str,
    frame: usize,
}

impl<'a> Spinner<'a> {
    pub fn new(label: &'a str, frame: usize) -> Self {
        Self { label, frame }
    }

    /// Number of animation frames; callers wrap their tick counter by this.
    pub fn frame_count() -> usize {
        FRAMES.len()
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let glyph = FRAMES[self.frame % FRAMES.len()];

        let line = Line::from(vec![
            Span::styled(glyph, t.title_style()),
            Span::raw(" "),
            Span::styled(self.label, t.text_style()),
        ]);

        // Center vertically within the area
        let y = area.y + area.height / 2;
        let centered = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
