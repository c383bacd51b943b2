//! Core types for layout configuration.
//!
//! [`LayoutConfig`] replaces module-level defaults with an explicit record that
//! is handed to [`TableLayout::new`](super::TableLayout::new). Every field has a
//! default, so partial JSON objects deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Default total width in character columns.
pub const DEFAULT_TOTAL_WIDTH: usize = 80;
/// Default glyph placed between columns.
pub const DEFAULT_PARTITION: char = '|';
/// Default glyph used for border lines.
pub const DEFAULT_HORIZONTAL_LINE: char = '-';

/// How channel text is broken into fragments that fit a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Break at the last whitespace that fits, falling back to a hard cut.
    #[default]
    Smart,
    /// Always cut at exactly the column width.
    Hard,
}

impl WrapMode {
    /// Map the legacy `smart_wrap` flag onto a mode.
    pub fn from_smart(smart: bool) -> Self {
        if smart {
            WrapMode::Smart
        } else {
            WrapMode::Hard
        }
    }
}

/// Layout configuration for a [`TableLayout`](super::TableLayout).
///
/// # Example
///
/// ```rust
/// use menuboard_render::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .total_width(60)
///     .border(true)
///     .headers(["Trigger", "Name"])
///     .channel_widths([Some(10), None]);
///
/// assert_eq!(config.total_width, 60);
/// assert_eq!(config.partition, '|');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Target output width in character columns.
    pub total_width: usize,
    /// Glyph drawn between adjacent columns.
    pub partition: char,
    /// Glyph repeated along border lines.
    pub horizontal_line: char,
    /// Draw top, bottom and header-separator lines.
    pub border: bool,
    /// One header per channel. Ignored when the length does not match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    /// Requested width per channel; `None` entries share the remaining space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_widths: Option<Vec<Option<usize>>>,
    /// Report width and truncation diagnostics.
    pub verbose: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            total_width: DEFAULT_TOTAL_WIDTH,
            partition: DEFAULT_PARTITION,
            horizontal_line: DEFAULT_HORIZONTAL_LINE,
            border: false,
            headers: None,
            channel_widths: None,
            verbose: false,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total width.
    pub fn total_width(mut self, width: usize) -> Self {
        self.total_width = width;
        self
    }

    /// Set the partition glyph.
    pub fn partition(mut self, glyph: char) -> Self {
        self.partition = glyph;
        self
    }

    /// Set the border line glyph.
    pub fn horizontal_line(mut self, glyph: char) -> Self {
        self.horizontal_line = glyph;
        self
    }

    /// Enable or disable border lines.
    pub fn border(mut self, enable: bool) -> Self {
        self.border = enable;
        self
    }

    /// Set the column headers.
    pub fn headers<S: Into<String>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the requested channel widths.
    pub fn channel_widths(mut self, widths: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.channel_widths = Some(widths.into_iter().collect());
        self
    }

    /// Enable or disable diagnostics.
    pub fn verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    /// Headers that apply to a layout with `channel_count` channels.
    pub fn headers_for(&self, channel_count: usize) -> Option<&[String]> {
        self.headers
            .as_deref()
            .filter(|headers| headers.len() == channel_count)
    }

    /// The string placed between adjacent cells.
    pub fn joiner(&self) -> String {
        format!(" {} ", self.partition)
    }
}
