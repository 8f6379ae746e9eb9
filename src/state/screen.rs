//! Review screen state: render model, scroll tracker and viewport, kept in step
//! with the projection source.

use super::viewport::Viewport;
use crate::model::DocumentRecord;
use crate::traits::{ProjectionSource, ScrollSurface};
use crate::view_state::{
    current_action, rebuild, Page, PageIndex, Rebuild, RenderModel, ScrollTracker,
    ViewportDirective,
};
use std::sync::Arc;
use tracing::debug;

/// Everything the review screen shows, derived from the projection.
#[derive(Debug, Clone)]
pub struct ScreenState {
    model: RenderModel,
    tracker: ScrollTracker,
    viewport: Viewport,
    revision: u64,
}

impl ScreenState {
    /// Initial state: first page, no previous model.
    pub fn new(projection: &dyn ProjectionSource, viewport: Viewport) -> Self {
        let revision = projection.revision();
        let documents = projection.documents();
        let Rebuild { model, .. } = rebuild(None, &documents, projection.stats());
        Self {
            tracker: ScrollTracker::new(model.document_count()),
            model,
            viewport,
            revision,
        }
    }

    /// Pure reducer: rebuild against the current projection.
    ///
    /// Returns the new state and the directive the shell must apply to the physical
    /// scroll position (see [`ScreenState::apply_directive`]). The page index is only
    /// reconciled, never clamped, so a shrink can leave it past the end until the next
    /// scroll event.
    ///
    /// The revision is sampled before the documents, so a mutation landing mid-read
    /// leaves the state stale rather than silently current.
    pub fn apply_projection(self, projection: &dyn ProjectionSource) -> (Self, ViewportDirective) {
        let revision = projection.revision();
        let documents = projection.documents();
        let Rebuild { model, directive } =
            rebuild(Some(&self.model), &documents, projection.stats());
        let mut tracker = self.tracker;
        tracker.reconcile(&model, directive);
        (
            Self {
                model,
                tracker,
                viewport: self.viewport,
                revision,
            },
            directive,
        )
    }

    /// Whether the projection moved on since the last rebuild.
    pub fn is_stale(&self, projection: &dyn ProjectionSource) -> bool {
        projection.revision() != self.revision
    }

    /// Move the viewport as `directive` asks.
    pub fn apply_directive(&mut self, directive: ViewportDirective) {
        if directive == ViewportDirective::ResetToFirstPage {
            debug!("Collection grew; returning to first page");
            self.reset_viewport();
        }
    }

    /// Force page 0 and scroll the viewport back to the start.
    pub fn reset_viewport(&mut self) {
        let surface: &mut dyn ScrollSurface = &mut self.viewport;
        self.tracker.reset(surface);
    }

    /// Feed the viewport's current offset to the scroll tracker.
    pub fn sync_scroll(&mut self) -> PageIndex {
        self.tracker.on_scroll(
            self.viewport.offset_x(),
            self.viewport.page_width(),
            self.model.document_count(),
        )
    }

    /// Current render model.
    pub fn model(&self) -> &RenderModel {
        &self.model
    }

    /// Current page index; may exceed the document count after a shrink.
    pub fn page_index(&self) -> PageIndex {
        self.tracker.page_index()
    }

    /// Number of documents in the current model.
    pub fn document_count(&self) -> usize {
        self.model.document_count()
    }

    /// Projection revision the model was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport, for scroll handlers.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Document the action bar acts on, if any.
    pub fn current_document(&self) -> Option<&Arc<DocumentRecord>> {
        current_action(self.page_index(), self.document_count(), &self.model)
    }

    /// Page to draw. A stale index past the end shows the stats page.
    pub fn visible_page(&self) -> Option<&Page> {
        self.model.page(self.visible_index())
    }

    /// Index of the page [`ScreenState::visible_page`] returns.
    pub fn visible_index(&self) -> PageIndex {
        self.page_index().clamp_to(self.model.stats_index().get())
    }

    /// Whether the last rebuild touched anything on screen: the visible page, the
    /// stats behind the status line, or the page count behind the indicator.
    pub fn shows_changes(&self, previous_pages: usize) -> bool {
        self.model.len() != previous_pages
            || self.model.row_has_changed(self.visible_index())
            || self.model.row_has_changed(self.model.stats_index())
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
