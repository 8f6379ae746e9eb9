//! Acceptance tests for the review screen scenarios.
//!
//! Each test wires the real store and view-state to recording collaborators and
//! verifies runtime behavior end to end.

use docreview::adapters::mock::{MockNotifier, MockScanner, MockStatusBar, StatusBarCall};
use docreview::capture::{CaptureCollaborators, CaptureCoordinator, CaptureReport, CaptureState};
use docreview::config::ScanConfig;
use docreview::model::{DocumentId, DocumentRecord, ScanError};
use docreview::state::{ScreenState, Viewport};
use docreview::store::DocumentStore;
use docreview::traits::{
    DocumentActions, DocumentEditActions, ProjectionSource, ScanOutcome, ScrollSurface,
};
use docreview::view_state::{current_action, rebuild, PageIndex, ScrollTracker, ViewportDirective};
use std::sync::Arc;
use std::time::Duration;

// ===== Test Fixtures =====

fn doc(id: &str, timestamp: i64) -> DocumentRecord {
    DocumentRecord::captured(DocumentId::new(id).unwrap(), format!("/scans/{id}.jpg"), timestamp)
}

/// Store showing `a, b, c` in that order.
fn abc_store() -> DocumentStore {
    DocumentStore::with_documents(
        vec![doc("a", 3), doc("b", 2), doc("c", 1)],
        Duration::from_millis(1),
    )
    .unwrap()
}

struct Rig {
    store: DocumentStore,
    coordinator: CaptureCoordinator,
    status_bar: MockStatusBar,
    notifier: MockNotifier,
}

fn rig(store: DocumentStore) -> Rig {
    let status_bar = MockStatusBar::new();
    let notifier = MockNotifier::new();
    let coordinator = CaptureCoordinator::new(
        ScanConfig::default(),
        CaptureCollaborators {
            actions: Arc::new(store.clone()),
            status_bar: Arc::new(status_bar.clone()),
            notifier: Arc::new(notifier.clone()),
        },
    );
    Rig {
        store,
        coordinator,
        status_bar,
        notifier,
    }
}

// ===== Scenario 6: Initial Render =====

#[test]
fn scenario6_initial_render_binds_first_document() {
    // GIVEN: documents a, b, c and a stats record
    let store = abc_store();

    // WHEN: the render model is built and the first scroll event arrives
    let model = rebuild(None, &store.documents(), store.stats()).model;
    let mut tracker = ScrollTracker::new(model.document_count());
    let page = tracker.on_scroll(0.0, 100.0, 3);

    // THEN: four rows, page 0, action bar bound to "a"
    assert_eq!(model.len(), 4);
    assert!(model.pages()[3].is_stats());
    assert_eq!(page, PageIndex::FIRST);
    let action = current_action(page, model.document_count(), &model);
    assert_eq!(action.map(|d| d.id.as_str()), Some("a"));
}

// ===== Scenario 7: Scan Error =====

#[tokio::test]
async fn scenario7_scan_error_is_reported_and_collection_unchanged() {
    // GIVEN: an idle coordinator and a scanner that will fail
    let mut rig = rig(abc_store());
    let scanner = MockScanner::with_outcomes([ScanOutcome::Failed(ScanError::Device(
        "camera busy".into(),
    ))]);
    let before = rig.store.documents().len();

    // WHEN: the user starts a scan
    let report = rig.coordinator.start_scan(&scanner).await;

    // THEN: notified once, collection unchanged, idle, status bar visible
    assert_eq!(
        report,
        CaptureReport::Failed(ScanError::Device("camera busy".into()))
    );
    assert_eq!(rig.notifier.messages(), vec!["camera busy".to_string()]);
    assert_eq!(rig.store.documents().len(), before);
    assert_eq!(rig.coordinator.state(), CaptureState::Idle);
    assert_eq!(
        rig.status_bar.calls(),
        vec![
            StatusBarCall {
                hidden: true,
                animated: true
            },
            StatusBarCall {
                hidden: false,
                animated: true
            },
        ]
    );
}

// ===== Scenario 8: Successful Ingestion =====

#[tokio::test]
async fn scenario8_ingested_scan_resets_to_first_page() {
    // GIVEN: the user is looking at page 2 of a, b, c
    let mut rig = rig(abc_store());
    let mut screen = ScreenState::new(&rig.store, Viewport::new(100.0));
    screen.viewport_mut().scroll_to(200.0);
    screen.sync_scroll();
    assert_eq!(screen.page_index().get(), 2);

    // WHEN: a scan returns document d
    let scanner = MockScanner::with_outcomes([ScanOutcome::Scanned(doc("d", 10))]);
    let report = rig.coordinator.start_scan(&scanner).await;

    // THEN: added exactly once, one more row, and the rebuild resets the page
    assert_eq!(report, CaptureReport::Ingested(DocumentId::new("d").unwrap()));
    assert_eq!(rig.store.documents().len(), 4);
    assert_eq!(scanner.scan_calls(), 1);

    let (mut screen, directive) = screen.apply_projection(&rig.store);
    assert_eq!(directive, ViewportDirective::ResetToFirstPage);
    screen.apply_directive(directive);
    assert_eq!(screen.model().len(), 5);
    assert_eq!(screen.page_index(), PageIndex::FIRST);
    assert_eq!(screen.viewport().offset_x(), 0.0);
    assert_eq!(
        screen.current_document().map(|d| d.id.as_str()),
        Some("d")
    );
}

#[tokio::test]
async fn scenario8_upload_is_triggered_before_scan() {
    // GIVEN: pending documents
    let mut rig = rig(abc_store());
    let scanner = MockScanner::with_outcomes([ScanOutcome::Cancelled]);

    // WHEN: a scan starts and is cancelled
    let report = rig.coordinator.start_scan(&scanner).await;

    // THEN: the upload pass ran anyway and nothing was added
    assert_eq!(report, CaptureReport::Cancelled);
    assert_eq!(rig.store.stats().pending, 0);
    assert_eq!(rig.store.documents().len(), 3);
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(rig.store.stats().uploaded, 3);
}

#[tokio::test]
async fn scenario8_reused_id_is_rejected_and_reported() {
    // GIVEN: a store that already holds "a"
    let mut rig = rig(abc_store());
    let scanner = MockScanner::with_outcomes([ScanOutcome::Scanned(doc("a", 99))]);

    // WHEN: the scanner hands back a document with the same id
    let report = rig.coordinator.start_scan(&scanner).await;

    // THEN: nothing is added and the user is told
    assert_eq!(report, CaptureReport::Rejected(DocumentId::new("a").unwrap()));
    assert_eq!(rig.store.documents().len(), 3);
    assert_eq!(rig.notifier.messages(), vec!["Document a already exists".to_string()]);
    assert_eq!(rig.status_bar.last(), Some(false));
}

// ===== Scenario 9: Shrink Mid-Scroll =====

#[test]
fn scenario9_shrink_leaves_no_action_until_next_scroll() {
    // GIVEN: the user is on page 2 of a, b, c
    let store = abc_store();
    let mut screen = ScreenState::new(&store, Viewport::new(100.0));
    screen.viewport_mut().scroll_to(200.0);
    screen.sync_scroll();

    // WHEN: two documents are deleted elsewhere
    store.delete_document(&DocumentId::new("b").unwrap()).unwrap();
    store.delete_document(&DocumentId::new("c").unwrap()).unwrap();
    let (mut screen, directive) = screen.apply_projection(&store);

    // THEN: no reset, no action bar, stale index tolerated
    assert_eq!(directive, ViewportDirective::Keep);
    assert_eq!(screen.document_count(), 1);
    assert_eq!(screen.page_index().get(), 2);
    assert!(screen.current_document().is_none());

    // AND: the next scroll event re-clamps into [0, 1]
    screen.viewport_mut().scroll_to(50.0);
    let page = screen.sync_scroll();
    assert!(page.get() <= 1);
    assert_eq!(page.get(), 1);
    assert!(screen.current_document().is_none(), "page 1 is the stats page");

    screen.viewport_mut().scroll_to(0.0);
    screen.sync_scroll();
    assert_eq!(screen.current_document().map(|d| d.id.as_str()), Some("a"));
}

// ===== Re-entrancy =====

#[tokio::test]
async fn completion_while_idle_is_ignored() {
    // GIVEN: no scan in flight
    let mut rig = rig(abc_store());

    // WHEN: a stray completion arrives
    let report = rig.coordinator.complete_scan(ScanOutcome::Scanned(doc("x", 5)));

    // THEN: dropped without touching anything
    assert_eq!(report, CaptureReport::Ignored);
    assert_eq!(rig.store.documents().len(), 3);
    assert!(rig.status_bar.calls().is_empty());
}

#[test]
fn store_actions_are_usable_through_trait_objects() {
    let store = abc_store();
    let actions: Arc<dyn DocumentActions> = Arc::new(store.clone());
    actions.add_document(doc("z", 100)).unwrap();
    assert_eq!(store.documents()[0].id.as_str(), "z");
}
