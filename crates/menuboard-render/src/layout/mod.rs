//! Multi-channel column layout.
//!
//! A [`TableLayout`] holds N independent text channels and renders them side
//! by side in a fixed total width. Each channel's entries are wrapped into its
//! column, shorter channels are padded with blank cells, and the rows are
//! optionally framed with border lines and a header row.
//!
//! ## Width Resolution
//!
//! Widths are resolved once, when the layout is built:
//!
//! - explicit widths (`Some(n)`) are kept as given
//! - one column per adjacent channel pair is reserved as separator overhead
//! - the rest is split evenly over unspecified widths (`None`); the division
//!   remainder is dropped
//!
//! If explicit widths do not fit, a [`Diagnostic::WidthOverflow`] is produced
//! and unspecified channels get zero width.
//!
//! ## Wrap Modes
//!
//! - [`WrapMode::Smart`] - Break at the last whitespace that fits.
//!   At width 5: "hello world" → "hello", "world"
//! - [`WrapMode::Hard`] - Cut at exactly the column width.
//!   At width 4: "hello world" → "hell", "o wo", "rld"
//!
//! Embedded newlines always start a new fragment.
//!
//! ## Example
//!
//! ```rust
//! use menuboard_render::{LayoutConfig, TableLayout, WrapMode};
//!
//! let config = LayoutConfig::new()
//!     .total_width(24)
//!     .border(true)
//!     .headers(["Left", "Right"]);
//!
//! let mut layout = TableLayout::new(2, config)?;
//! layout.add_item(0, "one two three")?;
//! layout.add_item(1, "four")?;
//!
//! for line in layout.render(WrapMode::Smart) {
//!     println!("{}", line);
//! }
//! # Ok::<(), menuboard_render::LayoutError>(())
//! ```

mod decorator;
mod diagnostic;
mod resolve;
mod table;
mod types;
mod util;
mod wrap;

pub use diagnostic::Diagnostic;
pub use resolve::{resolve_widths, separator_overhead, ResolvedWidths};
pub use table::{Rendered, TableLayout};
pub use types::{
    LayoutConfig, WrapMode, DEFAULT_HORIZONTAL_LINE, DEFAULT_PARTITION, DEFAULT_TOTAL_WIDTH,
};
pub use util::{char_width, pad_center, pad_right, truncate_to_width};
pub use wrap::wrap_entry;
