//! # Menuboard Render - Multi-Channel Column Layout
//!
//! `menuboard-render` lays out independent streams of text ("channels") side
//! by side in a fixed width. It is the display core of the `menuboard`
//! command-menu tool, but has no dependency on it and can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`TableLayout`]: Owns the channels and renders them to lines
//! - [`LayoutConfig`]: Width, glyphs, border, headers and per-channel widths
//! - [`WrapMode`]: Word-aware or hard wrapping
//! - [`Diagnostic`]: Non-fatal width overflow and truncation reports
//! - [`LayoutError`]: Structural misuse (bad configuration, bad channel index)
//!
//! ## Quick Start
//!
//! ```rust
//! use menuboard_render::{LayoutConfig, TableLayout, WrapMode};
//!
//! let mut layout = TableLayout::new(2, LayoutConfig::new().total_width(20))?;
//! layout.add_item(0, "This is channel zero")?;
//! layout.add_item(1, "Channel one\nhas two lines")?;
//!
//! let lines = layout.render(WrapMode::Smart);
//! assert_eq!(lines.len(), 4);
//! # Ok::<(), menuboard_render::LayoutError>(())
//! ```
//!
//! Widths are counted in characters. There is no color, terminal resize
//! tracking or grapheme-aware wrapping.

mod error;
pub mod layout;

pub use error::{LayoutError, Result};
pub use layout::{Diagnostic, LayoutConfig, Rendered, TableLayout, WrapMode};
