//! Review screen styling.

use crate::model::UploadStatus;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ReviewStyles =====

/// Styles for the review screen.
#[derive(Debug, Clone, Copy)]
pub struct ReviewStyles {
    colors: ColorConfig,
}

impl Default for ReviewStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env())
    }
}

impl ReviewStyles {
    /// Styles honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Upload status label.
    pub fn status(self, status: UploadStatus) -> Style {
        match status {
            UploadStatus::Pending => self.fg(Color::Yellow),
            UploadStatus::Uploading => self.fg(Color::Cyan),
            UploadStatus::Uploaded => self.fg(Color::Green),
            UploadStatus::Error => self.fg(Color::Red),
            UploadStatus::Unknown => self.fg(Color::DarkGray),
        }
    }

    /// Section headings and titles.
    pub fn heading(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Field labels.
    pub fn label(self) -> Style {
        self.fg(Color::Gray)
    }

    /// Key hints such as `[s]`.
    pub fn key_hint(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Error notifications.
    pub fn error(self) -> Style {
        self.fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// De-emphasized text.
    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_colors_produce_plain_status_styles() {
        let styles = ReviewStyles::new(ColorConfig::new(false));
        assert_eq!(styles.status(UploadStatus::Error), Style::default());
        assert_eq!(styles.muted(), Style::default());
    }

    #[test]
    fn statuses_get_distinct_colors() {
        let styles = ReviewStyles::new(ColorConfig::new(true));
        assert_eq!(styles.status(UploadStatus::Uploaded).fg, Some(Color::Green));
        assert_eq!(styles.status(UploadStatus::Error).fg, Some(Color::Red));
        assert_ne!(
            styles.status(UploadStatus::Pending),
            styles.status(UploadStatus::Uploading)
        );
    }

    #[test]
    fn headings_stay_bold_without_color() {
        let styles = ReviewStyles::new(ColorConfig::new(false));
        assert!(styles.heading().add_modifier.contains(Modifier::BOLD));
    }
}
