//! Review screen layout.
//!
//! Pure layout logic: splits the frame into status line, header, current page,
//! page indicator, action bar and footer, then renders each part.

use super::action_bar::ActionBar;
use super::constants::{
    ACTION_BAR_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, PAGE_INDICATOR_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::indicator::PageIndicator;
use super::pages::{DocumentPage, StatsPage};
use super::styles::ReviewStyles;
use crate::state::ScreenState;
use crate::view_state::Page;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fixed screen title.
pub const TITLE: &str = "Documents";

/// Everything the layout needs for one frame.
pub struct ScreenView<'a> {
    /// Render model, scroll position and current document.
    pub screen: &'a ScreenState,
    /// Whether the status line is hidden (during a capture).
    pub status_bar_hidden: bool,
    /// Whether a scan is in flight.
    pub capturing: bool,
    /// Latest error message, if any.
    pub notification: Option<&'a str>,
    /// Styles.
    pub styles: ReviewStyles,
}

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewAreas {
    /// Status line; `None` while hidden.
    pub status: Option<Rect>,
    /// Title and scan button.
    pub header: Rect,
    /// Current page.
    pub page: Rect,
    /// Page indicator.
    pub indicator: Rect,
    /// Action bar or spacer.
    pub action_bar: Rect,
    /// Notification or key hints.
    pub footer: Rect,
}

/// Split `area` for the review screen.
pub fn calculate_areas(area: Rect, status_bar_hidden: bool) -> ReviewAreas {
    let status_height = if status_bar_hidden { 0 } else { STATUS_BAR_HEIGHT };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(status_height),
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGE_INDICATOR_HEIGHT),
            Constraint::Length(ACTION_BAR_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    ReviewAreas {
        status: (!status_bar_hidden).then_some(chunks[0]),
        header: chunks[1],
        page: chunks[2],
        indicator: chunks[3],
        action_bar: chunks[4],
        footer: chunks[5],
    }
}

/// Render one frame of the review screen.
pub fn render_layout(frame: &mut Frame, view: &ScreenView<'_>) {
    let areas = calculate_areas(frame.area(), view.status_bar_hidden);
    let screen = view.screen;
    let styles = view.styles;

    if let Some(status_area) = areas.status {
        render_status_line(frame, status_area, view);
    }
    render_header(frame, areas.header, view);

    match screen.visible_page() {
        Some(Page::Document(doc)) => frame.render_widget(
            DocumentPage::new(
                doc,
                screen.visible_index().display(),
                screen.document_count(),
                styles,
            ),
            areas.page,
        ),
        Some(Page::Stats(stats)) => frame.render_widget(StatsPage::new(stats, styles), areas.page),
        None => {}
    }

    frame.render_widget(
        PageIndicator::new(screen.visible_index(), screen.model().len(), styles.muted()),
        areas.indicator,
    );
    frame.render_widget(
        ActionBar::new(screen.current_document().map(|doc| &**doc), styles),
        areas.action_bar,
    );
    render_footer(frame, areas.footer, view);
}

fn render_status_line(frame: &mut Frame, area: Rect, view: &ScreenView<'_>) {
    let stats = view.screen.model().stats();
    let text = format!(
        " docreview  {} documents  {} pending  {} uploaded",
        stats.document_count,
        stats.pending + stats.failed,
        stats.uploaded
    );
    frame.render_widget(Paragraph::new(text).style(view.styles.muted()), area);
}

fn render_header(frame: &mut Frame, area: Rect, view: &ScreenView<'_>) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE).style(view.styles.heading())),
        halves[0],
    );

    let button = if view.capturing {
        Line::from(Span::styled("Scanning...", view.styles.muted()))
    } else {
        Line::from(vec![
            Span::styled("[s]", view.styles.key_hint()),
            Span::raw(" Scan"),
        ])
    };
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Right),
        halves[1],
    );
}

fn render_footer(frame: &mut Frame, area: Rect, view: &ScreenView<'_>) {
    let line = match view.notification {
        Some(message) => Line::from(Span::styled(format!(" {message}"), view.styles.error())),
        None => Line::from(Span::styled(
            " h/l scroll  ←/→ page  g/G first/last  s scan  q quit",
            view.styles.muted(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
