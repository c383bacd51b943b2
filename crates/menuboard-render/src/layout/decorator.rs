//! Row assembly and border lines.
//!
//! A [`Decorator`] knows the resolved widths and styling of a layout. It turns
//! per-channel cell text into finished lines: cells are padded to their column,
//! joined with `" <partition> "` and the whole row is centered in the total
//! width.

use super::types::LayoutConfig;
use super::util::{char_width, pad_center, pad_right};

const CORNER: char = '+';

/// Builds finished lines for a layout.
#[derive(Clone, Debug)]
pub(crate) struct Decorator<'a> {
    widths: &'a [usize],
    total_width: usize,
    joiner: String,
    horizontal: char,
    border: bool,
}

impl<'a> Decorator<'a> {
    pub(crate) fn new(widths: &'a [usize], config: &LayoutConfig) -> Self {
        Decorator {
            widths,
            total_width: config.total_width,
            joiner: config.joiner(),
            horizontal: config.horizontal_line,
            border: config.border,
        }
    }

    /// Left-justify every cell, join and center.
    pub(crate) fn data_row<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let padded: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &w)| pad_right(cells.get(i).map_or("", |c| c.as_ref()), w))
            .collect();
        self.center_row(padded.join(&self.joiner))
    }

    /// Center every cell in its column, join and center.
    pub(crate) fn header_row<S: AsRef<str>>(&self, headers: &[S]) -> String {
        let padded: Vec<String> = self
            .widths
            .iter()
            .zip(headers)
            .map(|(&w, h)| pad_center(h.as_ref(), w))
            .collect();
        self.center_row(padded.join(&self.joiner))
    }

    /// A border line, or `None` when borders are disabled.
    ///
    /// Top, header-separator and bottom lines are identical.
    pub(crate) fn border_line(&self) -> Option<String> {
        if !self.border {
            return None;
        }

        let mut line = String::with_capacity(self.total_width);
        line.push(CORNER);
        line.extend(std::iter::repeat_n(
            self.horizontal,
            self.total_width.saturating_sub(2),
        ));
        line.push(CORNER);
        Some(line)
    }

    fn center_row(&self, joined: String) -> String {
        if char_width(&joined) >= self.total_width {
            joined
        } else {
            pad_center(&joined, self.total_width)
        }
    }
}
