//! Per-document action bar.

use super::styles::ReviewStyles;
use crate::model::DocumentRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Actions for the visible document, or a blank spacer when there is none.
pub struct ActionBar<'a> {
    document: Option<&'a DocumentRecord>,
    styles: ReviewStyles,
}

impl<'a> ActionBar<'a> {
    /// Bar bound to `document`; `None` renders the spacer.
    pub fn new(document: Option<&'a DocumentRecord>, styles: ReviewStyles) -> Self {
        Self { document, styles }
    }
}

impl Widget for ActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(doc) = self.document else {
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", doc.id))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled("[r]", self.styles.key_hint()),
            Span::raw(" Rotate   "),
            Span::styled("[d]", self.styles.key_hint()),
            Span::raw(" Delete   "),
            Span::styled(doc.status.as_str(), self.styles.status(doc.status)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
