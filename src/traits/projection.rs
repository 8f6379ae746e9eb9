//! Read side of the document store.

use crate::model::{DocumentRecord, StatsRecord};
use std::sync::Arc;

/// Externally owned, reactive source of visible documents and their statistics.
///
/// Implementations must hand out the *same* `Arc` for a record that has not changed
/// since the previous call; the paged render model relies on pointer identity to
/// skip re-rendering unaffected pages.
pub trait ProjectionSource: Send + Sync {
    /// Visible (non-deleted) documents in display order.
    fn documents(&self) -> Vec<Arc<DocumentRecord>>;

    /// Current statistics aggregate.
    fn stats(&self) -> Arc<StatsRecord>;

    /// Monotonic change counter; bumps whenever documents or stats change.
    ///
    /// Callers read it before `documents`/`stats`, so it may lag the data but never
    /// run ahead of it.
    fn revision(&self) -> u64;
}
