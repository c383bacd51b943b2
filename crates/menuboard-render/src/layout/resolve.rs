//! Width resolution for layout channels.
//!
//! Explicit widths are taken as given. Whatever is left of the total width,
//! after explicit widths and one column of separator overhead per adjacent
//! pair, is split evenly across the unspecified channels. The division
//! remainder is dropped.

use super::diagnostic::Diagnostic;

/// Resolved widths for all channels of a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each channel in characters.
    pub widths: Vec<usize>,
    /// Set when the explicit widths did not fit.
    pub overflow: Option<Diagnostic>,
}

impl ResolvedWidths {
    /// Get the width of a specific channel.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all channels (without separators).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no channels.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Separator overhead for `channel_count` channels.
pub fn separator_overhead(channel_count: usize) -> usize {
    channel_count.saturating_sub(1)
}

/// Resolve the requested widths against `total_width`.
///
/// # Arguments
///
/// * `requested` - One entry per channel; `None` means unspecified
/// * `total_width` - Total available width including separators
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::resolve_widths;
///
/// // 80 - 10 explicit - 2 overhead = 68, split across two channels
/// let resolved = resolve_widths(&[Some(10), None, None], 80);
/// assert_eq!(resolved.widths, vec![10, 34, 34]);
/// assert!(resolved.overflow.is_none());
/// ```
pub fn resolve_widths(requested: &[Option<usize>], total_width: usize) -> ResolvedWidths {
    let explicit: usize = requested.iter().flatten().sum();
    let unspecified = requested.iter().filter(|w| w.is_none()).count();
    let needed = explicit + separator_overhead(requested.len());

    let (share, overflow) = match total_width.checked_sub(needed) {
        Some(remaining) if unspecified > 0 => (remaining / unspecified, None),
        Some(_) => (0, None),
        None => (
            0,
            Some(Diagnostic::WidthOverflow {
                requested: needed,
                available: total_width,
            }),
        ),
    };

    let widths = requested.iter().map(|w| w.unwrap_or(share)).collect();
    ResolvedWidths { widths, overflow }
}
