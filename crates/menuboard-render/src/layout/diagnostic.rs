//! Non-fatal layout diagnostics.

use std::fmt;

/// A layout-quality problem that was tolerated rather than raised.
///
/// Diagnostics are only collected when the layout is verbose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Requested widths plus separators do not fit in the total width.
    WidthOverflow {
        /// Sum of explicit widths plus separator overhead.
        requested: usize,
        /// The configured total width.
        available: usize,
    },
    /// A cell was longer than its column and was cut.
    CellTruncation {
        /// Channel the cell belongs to.
        channel: usize,
        /// Data row index, or `None` for the header row.
        row: Option<usize>,
        /// The column width the cell was cut to.
        width: usize,
        /// The cell length before truncation.
        length: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::WidthOverflow {
                requested,
                available,
            } => write!(
                f,
                "channel widths need {} columns but only {} are available",
                requested, available
            ),
            Diagnostic::CellTruncation {
                channel,
                row: Some(row),
                width,
                length,
            } => write!(
                f,
                "channel {} row {}: truncated {} characters to {}",
                channel, row, length, width
            ),
            Diagnostic::CellTruncation {
                channel,
                row: None,
                width,
                length,
            } => write!(
                f,
                "channel {} header: truncated {} characters to {}",
                channel, length, width
            ),
        }
    }
}
