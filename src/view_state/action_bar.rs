//! Action bar binding: which document the per-document actions apply to.

use super::render_model::RenderModel;
use super::types::PageIndex;
use crate::model::DocumentRecord;
use std::sync::Arc;

/// Document the action bar should act on, if any.
///
/// Returns the record at `page_index` iff `document_count > 0` and
/// `page_index < document_count`. The stats page and an empty collection have no
/// per-document action. A page index left stale by a deletion yields `None` rather
/// than a fault.
pub fn current_action(
    page_index: PageIndex,
    document_count: usize,
    model: &RenderModel,
) -> Option<&Arc<DocumentRecord>> {
    if document_count == 0 || page_index.get() >= document_count {
        return None;
    }
    model.document(page_index)
}
