//! Display settings: the registry's `layout` section with command-line overrides.

use anyhow::{Context, Result};
use menuboard_render::{LayoutConfig, WrapMode};
use serde_json::Value;

use crate::cli::DisplayArgs;

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Resolved display settings for one invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub layout: LayoutConfig,
    pub wrap: WrapMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            layout: LayoutConfig::default(),
            wrap: WrapMode::Smart,
        }
    }
}

impl Settings {
    /// Merge the stored `layout` section with command-line options.
    ///
    /// Precedence, lowest first: built-in defaults, the stored section,
    /// `--fit-terminal`, explicit flags.
    pub fn resolve(args: &DisplayArgs, verbose: bool, stored: Option<&Value>) -> Result<Self> {
        let mut layout = match stored {
            Some(value) => serde_json::from_value::<LayoutConfig>(value.clone())
                .context("invalid \"layout\" section in registry file")?,
            None => LayoutConfig::default(),
        };

        if args.fit_terminal {
            match terminal_width() {
                Some(width) => layout.total_width = width,
                None => log::debug!(
                    "terminal size unavailable, keeping width {}",
                    layout.total_width
                ),
            }
        }
        if let Some(width) = args.width {
            layout.total_width = width;
        }
        if let Some(partition) = args.partition {
            layout.partition = partition;
        }
        if let Some(line) = args.line {
            layout.horizontal_line = line;
        }
        if let Some(border) = args.border {
            layout.border = border;
        }
        layout.verbose |= verbose;

        log::debug!(
            "display width {}, border {}, smart wrap {}",
            layout.total_width,
            layout.border,
            args.smart_wrap
        );
        Ok(Settings {
            layout,
            wrap: WrapMode::from_smart(args.smart_wrap),
        })
    }
}
