//! Page widgets: one per document, plus the trailing statistics page.

use super::styles::ReviewStyles;
use crate::model::{DocumentRecord, StatsRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

// ===== DocumentPage Widget =====

/// Full-width page showing one scanned document.
pub struct DocumentPage<'a> {
    document: &'a DocumentRecord,
    position: usize,
    document_count: usize,
    styles: ReviewStyles,
}

impl<'a> DocumentPage<'a> {
    /// Page for `document`, the `position`-th (1-based) of `document_count`.
    pub fn new(
        document: &'a DocumentRecord,
        position: usize,
        document_count: usize,
        styles: ReviewStyles,
    ) -> Self {
        Self {
            document,
            position,
            document_count,
            styles,
        }
    }
}

impl Widget for DocumentPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Document {} of {} ",
                self.position, self.document_count
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let doc = self.document;
        let label = |text: &'static str| Span::styled(text, self.styles.label());
        let lines = vec![
            Line::from(vec![label("Id:        "), Span::raw(doc.id.as_str())]),
            Line::from(vec![label("Image:     "), Span::raw(doc.image.as_str())]),
            Line::from(vec![label("Original:  "), Span::raw(doc.original_image.as_str())]),
            Line::from(vec![
                label("Status:    "),
                Span::styled(doc.status.as_str(), self.styles.status(doc.status)),
            ]),
            Line::from(vec![label("Rotation:  "), Span::raw(format_rotation(doc.rotation))]),
            Line::from(vec![label("Captured:  "), Span::raw(format_timestamp(doc.timestamp))]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

// ===== StatsPage Widget =====

/// Trailing page summarizing the collection.
pub struct StatsPage<'a> {
    stats: &'a StatsRecord,
    styles: ReviewStyles,
}

impl<'a> StatsPage<'a> {
    /// Page for `stats`.
    pub fn new(stats: &'a StatsRecord, styles: ReviewStyles) -> Self {
        Self { stats, styles }
    }
}

impl Widget for StatsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let stats = self.stats;
        let mut lines = vec![
            Line::from("Documents").style(self.styles.heading()),
            Line::from(format!("  Total:      {}", stats.document_count)),
            Line::from(""),
            Line::from("Uploads").style(self.styles.heading()),
            Line::from(format!("  Pending:    {}", stats.pending)),
            Line::from(format!("  Uploading:  {}", stats.uploading)),
            Line::from(format!("  Uploaded:   {}", stats.uploaded)),
            Line::from(format!("  Failed:     {}", stats.failed)),
            Line::from(""),
            Line::from(format!("  Progress:   {}", format_ratio(stats.uploaded_ratio()))),
        ];
        if stats.document_count == 0 {
            lines.push(Line::from(""));
            lines.push(Line::from("No documents yet. Press [s] to scan.").style(self.styles.muted()));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

// ===== Formatting Helpers =====

/// Format a millisecond Unix timestamp as UTC.
///
/// Examples:
/// - `format_timestamp(0)` → "1970-01-01 00:00:00 UTC"
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format a rotation in degrees, e.g. "90°".
pub fn format_rotation(degrees: i32) -> String {
    format!("{degrees}°")
}

/// Format a ratio in `[0, 1]` as a whole percentage.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
