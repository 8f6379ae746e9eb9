//! Rendering tests for the review screen
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use super::helpers::{app_with, buffer_to_string, ch, key, store_of, GatedScanner};
use crate::adapters::mock::MockScanner;
use crate::model::ScanError;
use crate::traits::{ScanOutcome, ScanService};
use crate::view::{PageIndicator, TuiApp};
use crate::view_state::PageIndex;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::style::Style;
use std::sync::Arc;

const HEIGHT: u16 = 24;

fn render(app: &mut TuiApp<TestBackend>) -> String {
    app.render_test().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

fn row(app: &TuiApp<TestBackend>, y: u16) -> String {
    let buffer = app.terminal().backend().buffer();
    (buffer.area.left()..buffer.area.right())
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn idle() -> Arc<dyn ScanService> {
    Arc::new(MockScanner::with_outcomes([]))
}

#[test]
fn page_indicator_dots() {
    let indicator = PageIndicator::new(PageIndex::new(1), 4, Style::default());
    insta::assert_snapshot!(indicator.text(), @"○ ● ○ ◇");
}

#[test]
fn first_frame_shows_header_and_first_document() {
    let store = store_of(&["a", "b"]);
    let (_rt, mut app) = app_with(&store, idle(), HEIGHT);

    let frame = render(&mut app);

    assert!(frame.contains("Documents"));
    assert!(frame.contains("[s] Scan"));
    assert!(frame.contains("Document 1 of 2"));
    assert!(frame.contains("/inbox/a.jpg"));
    assert!(frame.contains("● ○ ◇"));
    assert!(frame.contains("[r] Rotate   [d] Delete   pending"));
}

#[test]
fn status_line_sits_on_top() {
    let store = store_of(&["a", "b"]);
    let (_rt, mut app) = app_with(&store, idle(), HEIGHT);
    render(&mut app);

    assert_eq!(row(&app, 0), " docreview  2 documents  2 pending  0 uploaded");
}

#[test]
fn footer_shows_key_hints_on_last_row() {
    let store = store_of(&["a"]);
    let (_rt, mut app) = app_with(&store, idle(), HEIGHT);
    render(&mut app);

    assert!(row(&app, HEIGHT - 1).contains("h/l scroll"));
}

#[test]
fn stats_page_replaces_action_bar_with_spacer() {
    let store = store_of(&["a", "b"]);
    let (_rt, mut app) = app_with(&store, idle(), HEIGHT);
    app.handle_key_test(key(KeyCode::End));

    let frame = render(&mut app);

    assert!(frame.contains("Statistics"));
    assert!(frame.contains("Total:      2"));
    assert!(frame.contains("○ ○ ◆"));
    assert!(!frame.contains("[r] Rotate"));
    // Spacer keeps the footer in place.
    assert!(row(&app, HEIGHT - 1).contains("h/l scroll"));
    for y in HEIGHT - 4..HEIGHT - 1 {
        assert_eq!(row(&app, y), "", "action bar row {y} should be blank");
    }
}

#[test]
fn empty_collection_renders_stats_page_only() {
    let store = store_of(&[]);
    let (_rt, mut app) = app_with(&store, idle(), HEIGHT);

    let frame = render(&mut app);

    assert!(frame.contains("No documents yet"));
    assert!(frame.contains("◆"));
    assert!(!frame.contains("[r] Rotate"));
}

#[test]
fn capture_hides_status_line_and_disables_scan_button() {
    let store = store_of(&["a"]);
    let (scanner, release) = GatedScanner::new();
    let (_rt, mut app) = app_with(&store, scanner, HEIGHT);

    app.handle_key_test(ch('s'));
    let frame = render(&mut app);

    assert!(!frame.contains("docreview"));
    assert!(frame.contains("Scanning..."));
    assert!(!frame.contains("[s] Scan"));

    release.send(ScanOutcome::Cancelled).unwrap();
    app.wait_for_scan_test();
    let frame = render(&mut app);
    assert!(frame.contains("docreview"));
    assert!(frame.contains("[s] Scan"));
}

#[test]
fn scan_error_appears_in_footer() {
    let store = store_of(&["a"]);
    let scanner = Arc::new(MockScanner::with_outcomes([ScanOutcome::Failed(
        ScanError::Device("camera busy".into()),
    )]));
    let (_rt, mut app) = app_with(&store, scanner, HEIGHT);

    app.handle_key_test(ch('s'));
    app.wait_for_scan_test();
    render(&mut app);

    assert_eq!(row(&app, HEIGHT - 1), " camera busy");
}
