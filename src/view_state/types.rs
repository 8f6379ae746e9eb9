//! Core view-state newtypes

/// Index of a page in the render model. 0-indexed internally, 1-based for display.
///
/// Pages `[0, document_count)` are documents; page `document_count` is the stats page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page (newest document, or the stats page of an empty collection).
    pub const FIRST: Self = Self(0);

    /// Create a new PageIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }

    /// Get the next page index.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Get the previous page index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Clamp into `[0, max]`.
    pub fn clamp_to(&self, max: usize) -> Self {
        Self(self.0.min(max))
    }
}

impl From<usize> for PageIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
