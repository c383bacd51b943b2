//! The multi-channel table layout.

use std::fmt::Display;

use super::decorator::Decorator;
use super::diagnostic::Diagnostic;
use super::resolve::{resolve_widths, ResolvedWidths};
use super::types::{LayoutConfig, WrapMode};
use super::util::{char_width, truncate_to_width};
use super::wrap::wrap_entry;
use crate::error::{LayoutError, Result};

/// Independent text channels laid out side by side.
///
/// Widths are resolved once, at construction. Text is appended per channel
/// with [`add_item`](Self::add_item) and every call to
/// [`render`](Self::render) wraps and assembles the table from scratch.
///
/// # Example
///
/// ```rust
/// use menuboard_render::{LayoutConfig, TableLayout, WrapMode};
///
/// let mut layout = TableLayout::new(2, LayoutConfig::new().total_width(20))?;
/// layout.add_item(0, "hello world foo")?;
/// layout.add_item(1, 42)?;
///
/// let lines = layout.render(WrapMode::Smart);
/// assert_eq!(lines, vec![
///     "hello     | 42       ",
///     "world foo |          ",
/// ]);
/// # Ok::<(), menuboard_render::LayoutError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TableLayout {
    channel_count: usize,
    config: LayoutConfig,
    resolved: ResolvedWidths,
    channel_data: Vec<Vec<String>>,
}

/// Output of [`TableLayout::render_report`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Finished lines, without trailing newlines.
    pub lines: Vec<String>,
    /// Diagnostics raised while building the layout and rendering it.
    /// Always empty unless the layout is verbose.
    pub diagnostics: Vec<Diagnostic>,
}

impl TableLayout {
    /// Create a layout with `channel_count` empty channels.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Configuration`] when `channel_count` or
    /// `total_width` is zero, or when `channel_widths` does not have one entry
    /// per channel.
    pub fn new(channel_count: usize, config: LayoutConfig) -> Result<Self> {
        if channel_count == 0 {
            return Err(LayoutError::Configuration(
                "channel count must be positive".to_string(),
            ));
        }
        if config.total_width == 0 {
            return Err(LayoutError::Configuration(
                "total width must be positive".to_string(),
            ));
        }

        let requested = match &config.channel_widths {
            Some(widths) if widths.len() != channel_count => {
                return Err(LayoutError::Configuration(format!(
                    "expected {} channel widths, got {}",
                    channel_count,
                    widths.len()
                )));
            }
            Some(widths) => widths.clone(),
            None => vec![None; channel_count],
        };

        let resolved = resolve_widths(&requested, config.total_width);
        if config.verbose {
            if let Some(overflow) = &resolved.overflow {
                log::warn!("{}", overflow);
            }
        }
        log::debug!("resolved channel widths: {:?}", resolved.widths);

        Ok(TableLayout {
            channel_count,
            config,
            resolved,
            channel_data: vec![Vec::new(); channel_count],
        })
    }

    /// Create a layout and seed channel `i` with the `i`th entry.
    ///
    /// Entries beyond `channel_count` are ignored with a warning.
    pub fn with_entries<T, I>(
        channel_count: usize,
        config: LayoutConfig,
        entries: I,
    ) -> Result<Self>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        let mut layout = Self::new(channel_count, config)?;
        for (index, entry) in entries.into_iter().enumerate() {
            if index < channel_count {
                layout.add_item(index, entry)?;
            } else {
                log::warn!("ignoring excess data for channel {}", index);
            }
        }
        Ok(layout)
    }

    /// Append `text` to a channel.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidChannelIndex`] when `channel_index` is not
    /// below the channel count. No channel is modified in that case.
    pub fn add_item(&mut self, channel_index: usize, text: impl Display) -> Result<()> {
        let channel_count = self.channel_count;
        let channel = self.channel_data.get_mut(channel_index).ok_or(
            LayoutError::InvalidChannelIndex {
                index: channel_index,
                channel_count,
            },
        )?;
        channel.push(text.to_string());
        Ok(())
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Configured total width.
    pub fn total_width(&self) -> usize {
        self.config.total_width
    }

    /// Resolved width of every channel.
    pub fn widths(&self) -> &[usize] {
        &self.resolved.widths
    }

    /// Entries appended to a channel so far.
    pub fn channel(&self, index: usize) -> Option<&[String]> {
        self.channel_data.get(index).map(Vec::as_slice)
    }

    /// The configuration this layout was built from.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Construction-time diagnostics. Empty unless verbose.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.config.verbose {
            self.resolved.overflow.iter().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Render the table to lines.
    pub fn render(&self, mode: WrapMode) -> Vec<String> {
        self.render_report(mode).lines
    }

    /// Render the table, also returning any diagnostics.
    pub fn render_report(&self, mode: WrapMode) -> Rendered {
        let widths = self.widths();
        let fragments: Vec<Vec<String>> = self
            .channel_data
            .iter()
            .zip(widths)
            .map(|(entries, &width)| {
                entries
                    .iter()
                    .flat_map(|entry| wrap_entry(entry, width, mode))
                    .collect()
            })
            .collect();
        let max_rows = fragments.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut diagnostics = self.diagnostics();
        let decorator = Decorator::new(widths, &self.config);
        let mut lines = Vec::with_capacity(max_rows + 4);

        lines.extend(decorator.border_line());

        if let Some(headers) = self.config.headers_for(self.channel_count) {
            let cells: Vec<&str> = headers
                .iter()
                .enumerate()
                .map(|(channel, header)| self.fit_cell(channel, None, header, &mut diagnostics))
                .collect();
            lines.push(decorator.header_row(&cells));
            lines.extend(decorator.border_line());
        }

        for row in 0..max_rows {
            let cells: Vec<&str> = fragments
                .iter()
                .enumerate()
                .map(|(channel, column)| match column.get(row) {
                    Some(fragment) => {
                        self.fit_cell(channel, Some(row), fragment, &mut diagnostics)
                    }
                    None => "",
                })
                .collect();
            lines.push(decorator.data_row(&cells));
        }

        lines.extend(decorator.border_line());

        Rendered { lines, diagnostics }
    }

    /// Cut a cell to its column width, noting the truncation when verbose.
    fn fit_cell<'a>(
        &self,
        channel: usize,
        row: Option<usize>,
        cell: &'a str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> &'a str {
        let width = self.resolved.widths[channel];
        let length = char_width(cell);
        if length <= width {
            return cell;
        }

        if self.config.verbose {
            let diagnostic = Diagnostic::CellTruncation {
                channel,
                row,
                width,
                length,
            };
            log::warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
        }
        truncate_to_width(cell, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(channels: usize, config: LayoutConfig) -> TableLayout {
        TableLayout::new(channels, config).unwrap()
    }

    #[test]
    fn new_rejects_zero_channels() {
        let err = TableLayout::new(0, LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(_)));
    }

    #[test]
    fn new_rejects_zero_width() {
        let err = TableLayout::new(2, LayoutConfig::new().total_width(0)).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration(_)));
    }

    #[test]
    fn new_rejects_width_count_mismatch() {
        let config = LayoutConfig::new().channel_widths([Some(5)]);
        let err = TableLayout::new(2, config).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Configuration("expected 2 channel widths, got 1".to_string())
        );
    }

    #[test]
    fn new_resolves_widths() {
        let l = layout(3, LayoutConfig::default());
        // 80 - 2 = 78, 78 / 3 = 26
        assert_eq!(l.widths(), &[26, 26, 26]);
        assert_eq!(l.channel_count(), 3);
        assert_eq!(l.total_width(), 80);
    }

    #[test]
    fn add_item_preserves_order_and_duplicates() {
        let mut l = layout(2, LayoutConfig::default());
        l.add_item(1, "b").unwrap();
        l.add_item(1, "a").unwrap();
        l.add_item(1, "b").unwrap();
        assert_eq!(l.channel(1).unwrap(), &["b", "a", "b"]);
        assert!(l.channel(0).unwrap().is_empty());
    }

    #[test]
    fn add_item_rejects_out_of_range() {
        let mut l = layout(2, LayoutConfig::default());
        l.add_item(0, "kept").unwrap();
        let err = l.add_item(2, "lost").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidChannelIndex {
                index: 2,
                channel_count: 2,
            }
        );
        assert_eq!(l.channel(0).unwrap(), &["kept"]);
        assert!(l.channel(1).unwrap().is_empty());
    }

    #[test]
    fn add_item_uses_display_form() {
        let mut l = layout(1, LayoutConfig::default());
        l.add_item(0, 3.5).unwrap();
        assert_eq!(l.channel(0).unwrap(), &["3.5"]);
    }

    #[test]
    fn with_entries_ignores_excess() {
        let l = TableLayout::with_entries(2, LayoutConfig::default(), ["a", "b", "c"]).unwrap();
        assert_eq!(l.channel(0).unwrap(), &["a"]);
        assert_eq!(l.channel(1).unwrap(), &["b"]);
    }

    #[test]
    fn render_empty_layout_is_one_blank_row() {
        let l = layout(2, LayoutConfig::new().total_width(20));
        let lines = l.render(WrapMode::Smart);
        assert_eq!(lines, vec![format!("{} | {}", " ".repeat(9), " ".repeat(9))]);
    }

    #[test]
    fn render_uneven_channels_pad_with_blanks() {
        let mut l = layout(2, LayoutConfig::new().total_width(20));
        l.add_item(0, "a\nb\nc").unwrap();
        l.add_item(1, "x").unwrap();
        let lines = l.render(WrapMode::Smart);
        assert_eq!(
            lines,
            vec![
                "a         | x        ",
                "b         |          ",
                "c         |          ",
            ]
        );
    }

    #[test]
    fn render_centers_narrow_rows() {
        let config = LayoutConfig::new()
            .total_width(20)
            .channel_widths([Some(3), Some(3)]);
        let mut l = layout(2, config);
        l.add_item(0, "ab").unwrap();
        // "ab  | " + "   " = 9 wide, 11 spare: 5 left, 6 right
        assert_eq!(l.render(WrapMode::Hard), vec!["     ab  |          "]);
    }

    #[test]
    fn render_with_border_and_headers() {
        let config = LayoutConfig::new()
            .total_width(20)
            .border(true)
            .headers(["Key", "Value"]);
        let mut l = layout(2, config);
        l.add_item(0, "k").unwrap();
        l.add_item(1, "v").unwrap();
        assert_eq!(
            l.render(WrapMode::Smart),
            vec![
                "+------------------+",
                "   Key    |   Value  ",
                "+------------------+",
                "k         | v        ",
                "+------------------+",
            ]
        );
    }

    #[test]
    fn render_mismatched_headers_are_ignored() {
        let base = LayoutConfig::new().total_width(30).border(true);
        let mut plain = layout(2, base.clone());
        let mut headed = layout(2, base.headers(["only one"]));
        for l in [&mut plain, &mut headed] {
            l.add_item(0, "left side").unwrap();
            l.add_item(1, "right side").unwrap();
        }
        assert_eq!(plain.render(WrapMode::Smart), headed.render(WrapMode::Smart));
    }

    #[test]
    fn render_is_idempotent() {
        let mut l = layout(3, LayoutConfig::new().total_width(40));
        l.add_item(0, "some longer text that will wrap").unwrap();
        l.add_item(2, "tail").unwrap();
        assert_eq!(l.render(WrapMode::Smart), l.render(WrapMode::Smart));
    }

    #[test]
    fn overflow_is_reported_only_when_verbose() {
        let config = LayoutConfig::new()
            .total_width(10)
            .channel_widths([Some(8), Some(8)]);

        let quiet = layout(2, config.clone());
        assert!(quiet.diagnostics().is_empty());
        assert!(quiet.render_report(WrapMode::Smart).diagnostics.is_empty());

        let loud = layout(2, config.verbose(true));
        assert_eq!(
            loud.diagnostics(),
            vec![Diagnostic::WidthOverflow {
                requested: 17,
                available: 10,
            }]
        );
    }

    #[test]
    fn zero_width_column_truncates_cells() {
        let config = LayoutConfig::new()
            .total_width(10)
            .channel_widths([Some(9), None])
            .verbose(true);
        let mut l = layout(2, config);
        assert_eq!(l.widths(), &[9, 0]);
        l.add_item(1, "hidden").unwrap();

        let report = l.render_report(WrapMode::Smart);
        assert_eq!(report.lines, vec!["          | "]);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::CellTruncation {
                channel: 1,
                row: Some(0),
                width: 0,
                length: 6,
            }]
        );
    }

    #[test]
    fn long_header_is_truncated() {
        let config = LayoutConfig::new()
            .total_width(9)
            .headers(["abcdefgh", "x"])
            .verbose(true);
        let l = layout(2, config);
        let report = l.render_report(WrapMode::Smart);
        assert_eq!(report.lines[0], "abcd |  x  ");
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::CellTruncation {
                channel: 0,
                row: None,
                width: 4,
                length: 8,
            }]
        );
    }
}
