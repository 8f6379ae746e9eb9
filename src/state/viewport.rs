//! Continuous horizontal scroll position of the paged list.

use crate::traits::ScrollSurface;
use crate::view_state::PageIndex;

/// Horizontal offset and page width, in terminal columns.
///
/// A page occupies exactly one `page_width` of offset, so page `n` starts at
/// `n * page_width`. The offset is kept inside `[0, document_count * page_width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset_x: f64,
    page_width: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Viewport {
    /// Viewport at offset 0.
    pub fn new(page_width: f64) -> Self {
        Self {
            offset_x: 0.0,
            page_width,
        }
    }

    /// Current offset.
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Width of one page.
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Offset at which `page` starts.
    pub fn offset_of(&self, page: PageIndex) -> f64 {
        page.get() as f64 * self.page_width
    }

    /// Largest offset: the start of the stats page.
    pub fn max_offset(&self, document_count: usize) -> f64 {
        document_count as f64 * self.page_width
    }

    /// Move by `delta` columns, staying within the list.
    pub fn scroll_by(&mut self, delta: f64, document_count: usize) {
        self.offset_x = (self.offset_x + delta).clamp(0.0, self.max_offset(document_count));
    }

    /// Jump to the start of `page`, staying within the list.
    pub fn snap_to(&mut self, page: PageIndex, document_count: usize) {
        self.offset_x = self
            .offset_of(page)
            .clamp(0.0, self.max_offset(document_count));
    }

    /// Change the page width (terminal resize) keeping `page` in view.
    pub fn resize(&mut self, page_width: f64, page: PageIndex) {
        self.page_width = page_width;
        self.offset_x = self.offset_of(page);
    }
}

impl ScrollSurface for Viewport {
    fn scroll_to(&mut self, offset_x: f64) {
        self.offset_x = offset_x;
    }
}
