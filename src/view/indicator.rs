//! Page indicator line below the current page.

use crate::view_state::PageIndex;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Dots up to this many pages; a numeric counter beyond.
pub const MAX_DOTS: usize = 12;

/// "○ ● ○ ◇" style indicator; the diamond is the stats page.
#[derive(Debug, Clone, Copy)]
pub struct PageIndicator {
    page: PageIndex,
    page_count: usize,
    style: Style,
}

impl PageIndicator {
    /// Indicator for `page` out of `page_count` pages (stats page included).
    pub fn new(page: PageIndex, page_count: usize, style: Style) -> Self {
        Self {
            page,
            page_count,
            style,
        }
    }

    /// Indicator text.
    pub fn text(&self) -> String {
        if self.page_count > MAX_DOTS {
            return format!("‹ {} / {} ›", self.page.display(), self.page_count);
        }
        (0..self.page_count)
            .map(|i| match (i == self.page.get(), i + 1 == self.page_count) {
                (true, true) => "◆",
                (false, true) => "◇",
                (true, false) => "●",
                (false, false) => "○",
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Widget for PageIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.text()).style(self.style))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
