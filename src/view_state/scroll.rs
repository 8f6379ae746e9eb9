//! Horizontal page tracking under continuous scroll input.

use super::render_model::{RenderModel, ViewportDirective};
use super::types::PageIndex;
use crate::traits::ScrollSurface;
use tracing::debug;

/// Page resolved from a raw horizontal scroll offset.
///
/// Computes `round(max(0, offset_x) / page_width)` and clamps the result to
/// `[0, document_count]` (the stats page sits at `document_count`).
///
/// # Clamping Behavior
/// Scroll views report transient out-of-range offsets while bouncing or
/// overscrolling. Negative, NaN or infinite offsets and non-positive page widths
/// never produce an invalid page: they resolve to the nearest valid one.
pub fn page_for_offset(offset_x: f64, page_width: f64, document_count: usize) -> PageIndex {
    if !(page_width.is_finite() && page_width > 0.0) {
        return PageIndex::FIRST;
    }
    let offset = if offset_x.is_nan() { 0.0 } else { offset_x.max(0.0) };
    // Float-to-int casts saturate, so +inf lands on usize::MAX before the clamp.
    let raw = (offset / page_width).round() as usize;
    PageIndex::new(raw).clamp_to(document_count)
}

/// Scroll state of the paged list.
///
/// # Invariants
/// `page_index <= document_count` after every scroll event. A collection shrink may
/// leave `page_index` past the count until the next scroll event re-clamps it;
/// readers must tolerate that (see [`current_action`](super::action_bar::current_action)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    page_index: PageIndex,
    document_count: usize,
}

impl ScrollState {
    /// State showing the first page of a collection with `document_count` documents.
    pub fn new(document_count: usize) -> Self {
        Self {
            page_index: PageIndex::FIRST,
            document_count,
        }
    }

    /// Currently visible page.
    pub fn page_index(&self) -> PageIndex {
        self.page_index
    }

    /// Document count cached from the last reconciled render model.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Pure reducer applied after every rebuild.
    ///
    /// Caches the new document count. On [`ViewportDirective::ResetToFirstPage`] the
    /// page snaps to 0; otherwise the page index is left untouched even if it now
    /// points past the shrunken collection. The next scroll event re-clamps it.
    pub fn reconcile(self, model: &RenderModel, directive: ViewportDirective) -> Self {
        let page_index = match directive {
            ViewportDirective::ResetToFirstPage => PageIndex::FIRST,
            ViewportDirective::Keep => self.page_index,
        };
        Self {
            page_index,
            document_count: model.document_count(),
        }
    }
}

/// Maintains the current page from scroll events.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    /// Tracker starting on the first page.
    pub fn new(document_count: usize) -> Self {
        Self {
            state: ScrollState::new(document_count),
        }
    }

    /// Current scroll state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Currently visible page.
    pub fn page_index(&self) -> PageIndex {
        self.state.page_index
    }

    /// Handle one scroll event.
    ///
    /// `document_count` is taken fresh from the caller on every call so a collection
    /// mutation is reflected on the very next event, never read from a stale cache.
    pub fn on_scroll(&mut self, offset_x: f64, page_width: f64, document_count: usize) -> PageIndex {
        let page = page_for_offset(offset_x, page_width, document_count);
        if page != self.state.page_index {
            debug!(
                from = self.state.page_index.get(),
                to = page.get(),
                offset_x,
                "Page changed"
            );
        }
        self.state.page_index = page;
        page
    }

    /// Apply a rebuild to the tracked state. See [`ScrollState::reconcile`].
    pub fn reconcile(&mut self, model: &RenderModel, directive: ViewportDirective) {
        self.state = self.state.reconcile(model, directive);
    }

    /// Snap back to the first page and move the physical scroll position to 0.
    pub fn reset(&mut self, surface: &mut dyn ScrollSurface) {
        self.state.page_index = PageIndex::FIRST;
        surface.scroll_to(0.0);
    }
}
