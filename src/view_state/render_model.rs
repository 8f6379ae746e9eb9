//! Paged render model: documents followed by one trailing stats page.
//!
//! Rebuilt from scratch on every projection change, but never re-creates records:
//! rows only wrap the `Arc`s handed in by the projection source, so a record that did
//! not change keeps its pointer identity and the renderer can skip its page.

use crate::model::{DocumentRecord, StatsRecord};
use crate::view_state::types::PageIndex;
use std::sync::Arc;
use tracing::debug;

/// One horizontally swipeable page.
#[derive(Debug, Clone)]
pub enum Page {
    /// A scanned document.
    Document(Arc<DocumentRecord>),
    /// The synthetic statistics page; always last.
    Stats(Arc<StatsRecord>),
}

impl Page {
    /// Reference equality: same variant wrapping the same allocation.
    pub fn same_as(&self, other: &Page) -> bool {
        match (self, other) {
            (Page::Document(a), Page::Document(b)) => Arc::ptr_eq(a, b),
            (Page::Stats(a), Page::Stats(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The wrapped document, if this is a document page.
    pub fn as_document(&self) -> Option<&Arc<DocumentRecord>> {
        match self {
            Page::Document(doc) => Some(doc),
            Page::Stats(_) => None,
        }
    }

    /// Whether this is the stats page.
    pub fn is_stats(&self) -> bool {
        matches!(self, Page::Stats(_))
    }
}

/// What the viewport should do after a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportDirective {
    /// Leave the scroll position alone.
    #[default]
    Keep,
    /// A document was added: snap back to the first (newest) page.
    ResetToFirstPage,
}

/// Result of [`rebuild`]: the new model plus a directive for the scroll tracker.
#[derive(Debug, Clone)]
pub struct Rebuild {
    /// Freshly derived render model.
    pub model: RenderModel,
    /// Directive for the scroll tracker and render surface.
    pub directive: ViewportDirective,
}

/// Immutable, change-detectable render sequence `documents ++ [stats]`.
///
/// # Invariants
/// - `len() == document_count() + 1`
/// - the last page is always [`Page::Stats`]
#[derive(Debug, Clone)]
pub struct RenderModel {
    pages: Vec<Page>,
    stats: Arc<StatsRecord>,
    changed: Vec<bool>,
}

impl RenderModel {
    /// Model for the given projection with every row marked changed.
    pub fn new(documents: &[Arc<DocumentRecord>], stats: Arc<StatsRecord>) -> Self {
        rebuild(None, documents, stats).model
    }

    /// Total pages, stats page included.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Never true: the stats page is always present.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of document pages.
    pub fn document_count(&self) -> usize {
        self.pages.len() - 1
    }

    /// All pages in display order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page at `index`, if in range.
    pub fn page(&self, index: PageIndex) -> Option<&Page> {
        self.pages.get(index.get())
    }

    /// Document at `index`; `None` for the stats page or out of range.
    pub fn document(&self, index: PageIndex) -> Option<&Arc<DocumentRecord>> {
        self.page(index).and_then(Page::as_document)
    }

    /// The trailing stats aggregate.
    pub fn stats(&self) -> &Arc<StatsRecord> {
        &self.stats
    }

    /// Index of the stats page.
    pub fn stats_index(&self) -> PageIndex {
        PageIndex::new(self.document_count())
    }

    /// Whether the row at `index` differs from the previous model's row at that index.
    ///
    /// Out-of-range indices report `false`.
    pub fn row_has_changed(&self, index: PageIndex) -> bool {
        self.changed.get(index.get()).copied().unwrap_or(false)
    }

    /// Indices of rows that need re-rendering.
    pub fn changed_rows(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.changed
            .iter()
            .enumerate()
            .filter(|(_, changed)| **changed)
            .map(|(i, _)| PageIndex::new(i))
    }
}

/// Derive a new render model from the projection.
///
/// Rows are compared by index against `previous`, the way a paged list adapter does:
/// a row is unchanged iff it wraps the same allocation as the previous row at that
/// position. With no previous model every row counts as changed.
///
/// When the document count grew, the directive asks the viewport to return to the
/// first page so the newly ingested scan is visible.
pub fn rebuild(
    previous: Option<&RenderModel>,
    documents: &[Arc<DocumentRecord>],
    stats: Arc<StatsRecord>,
) -> Rebuild {
    let mut pages = Vec::with_capacity(documents.len() + 1);
    pages.extend(documents.iter().cloned().map(Page::Document));
    pages.push(Page::Stats(Arc::clone(&stats)));

    let changed: Vec<bool> = match previous {
        Some(prev) => pages
            .iter()
            .enumerate()
            .map(|(i, page)| {
                prev.pages
                    .get(i)
                    .map(|old| !old.same_as(page))
                    .unwrap_or(true)
            })
            .collect(),
        None => vec![true; pages.len()],
    };

    let directive = match previous {
        Some(prev) if documents.len() > prev.document_count() => {
            ViewportDirective::ResetToFirstPage
        }
        _ => ViewportDirective::Keep,
    };

    let model = RenderModel {
        pages,
        stats,
        changed,
    };
    debug!(
        pages = model.len(),
        changed = model.changed_rows().count(),
        ?directive,
        "Rebuilt render model"
    );

    Rebuild { model, directive }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentId;

    fn doc(id: &str) -> Arc<DocumentRecord> {
        Arc::new(DocumentRecord::captured(
            DocumentId::new(id).unwrap(),
            format!("/scans/{id}.jpg"),
            0,
        ))
    }

    fn stats(count: usize) -> Arc<StatsRecord> {
        Arc::new(StatsRecord {
            document_count: count,
            pending: count,
            ..Default::default()
        })
    }

    #[test]
    fn empty_collection_has_only_the_stats_page() {
        let model = RenderModel::new(&[], stats(0));
        assert_eq!(model.len(), 1);
        assert_eq!(model.document_count(), 0);
        assert!(model.pages()[0].is_stats());
        assert!(!model.is_empty());
    }

    #[test]
    fn documents_precede_trailing_stats() {
        let docs = vec![doc("a"), doc("b"), doc("c")];
        let s = stats(3);
        let model = RenderModel::new(&docs, s.clone());

        assert_eq!(model.len(), 4);
        for (i, expected) in docs.iter().enumerate() {
            let page_doc = model.document(PageIndex::new(i)).unwrap();
            assert!(Arc::ptr_eq(page_doc, expected), "row {i} must wrap the input Arc");
        }
        assert!(Arc::ptr_eq(model.stats(), &s));
        assert_eq!(model.stats_index(), PageIndex::new(3));
        assert!(model.document(PageIndex::new(3)).is_none());
    }

    #[test]
    fn first_build_marks_every_row_changed() {
        let model = RenderModel::new(&[doc("a")], stats(1));
        assert_eq!(model.changed_rows().count(), 2);
    }

    #[test]
    fn identical_projection_reports_no_changes() {
        let docs = vec![doc("a"), doc("b")];
        let s = stats(2);
        let first = RenderModel::new(&docs, s.clone());
        let second = rebuild(Some(&first), &docs, s);

        assert_eq!(second.model.changed_rows().count(), 0);
        assert_eq!(second.directive, ViewportDirective::Keep);
    }

    #[test]
    fn replaced_record_is_the_only_changed_row() {
        let a = doc("a");
        let b = doc("b");
        let s = stats(2);
        let first = RenderModel::new(&[a.clone(), b.clone()], s.clone());

        let mut rotated = (*b).clone();
        rotated.rotation = 90;
        let second = rebuild(Some(&first), &[a, Arc::new(rotated)], s);

        let changed: Vec<_> = second.model.changed_rows().collect();
        assert_eq!(changed, vec![PageIndex::new(1)]);
    }

    #[test]
    fn prepending_a_document_requests_reset() {
        let a = doc("a");
        let s = stats(1);
        let first = RenderModel::new(&[a.clone()], s);
        let second = rebuild(Some(&first), &[doc("new"), a], stats(2));

        assert_eq!(second.directive, ViewportDirective::ResetToFirstPage);
        assert_eq!(second.model.len(), 3);
    }

    #[test]
    fn removing_a_document_keeps_viewport() {
        let a = doc("a");
        let b = doc("b");
        let first = RenderModel::new(&[a.clone(), b], stats(2));
        let second = rebuild(Some(&first), &[a], stats(1));

        assert_eq!(second.directive, ViewportDirective::Keep);
        assert_eq!(second.model.document_count(), 1);
    }

    #[test]
    fn row_has_changed_is_false_out_of_range() {
        let model = RenderModel::new(&[], stats(0));
        assert!(!model.row_has_changed(PageIndex::new(5)));
    }

    #[test]
    fn stats_and_document_pages_are_never_the_same() {
        let s = stats(0);
        let d = doc("a");
        assert!(!Page::Stats(s.clone()).same_as(&Page::Document(d.clone())));
        assert!(Page::Stats(s.clone()).same_as(&Page::Stats(s)));
        assert!(!Page::Document(d).same_as(&Page::Document(doc("a"))));
    }
}
