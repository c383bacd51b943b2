//! Error types for table layout.
//!
//! [`LayoutError`] covers structural misuse of a [`TableLayout`](crate::TableLayout):
//! bad construction parameters and out-of-range channel indices. Layout-quality
//! problems (overflowing widths, truncated cells) are not errors; they are
//! reported as [`Diagnostic`](crate::Diagnostic)s instead.

use thiserror::Error;

/// Errors raised by [`TableLayout`](crate::TableLayout) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Invalid construction parameters (zero channels, zero width, ...).
    #[error("invalid layout configuration: {0}")]
    Configuration(String),

    /// A channel index outside `0..channel_count`.
    #[error("invalid channel index {index}: layout has {channel_count} channels")]
    InvalidChannelIndex { index: usize, channel_count: usize },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
