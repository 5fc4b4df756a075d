//! Picture geometry: derived dimensions and row classification.
//!
//! The whole picture is determined by a single non-negative `size`. A picture
//! of size `n` has `2n + 1` rows and `2n + 2` columns, with the diamond's
//! widest row at index `n`.

/// Classification of a single picture row.
///
/// Frame rows take precedence over the center row, so a size-0 picture
/// collapses to a single frame row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Top or bottom border line, e.g. `+----+`.
    Frame,
    /// The diamond's widest row, carrying the `<` and `>` tip markers.
    Center,
    /// A slanted edge row in the upper or lower half of the diamond.
    Body {
        /// Diamond width at this row; always even.
        width: usize,
        /// Upper half (`/..\`) vs lower half (`\../`).
        upper: bool,
    },
}

/// Derived dimensions of the picture for a diamond of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub size: usize,
    pub total_rows: usize,
    pub total_columns: usize,
    pub center_row: usize,
}

impl Dimensions {
    /// Compute the picture dimensions for a diamond of `size`.
    pub fn of(size: usize) -> Self {
        Self {
            size,
            total_rows: 2 * size + 1,
            total_columns: 2 * size + 2,
            center_row: size,
        }
    }

    /// Classify the row at index `i`, first match wins: frame, then center,
    /// then body.
    pub fn classify(&self, i: usize) -> RowKind {
        if i == 0 || i == self.total_rows - 1 {
            RowKind::Frame
        } else if i == self.center_row {
            RowKind::Center
        } else if i < self.center_row {
            RowKind::Body {
                width: 2 * i,
                upper: true,
            }
        } else {
            RowKind::Body {
                width: 2 * (self.total_rows - 1 - i),
                upper: false,
            }
        }
    }

    /// Padding columns on each side of a body row before the diamond begins.
    ///
    /// `total_columns` and `width` are both even, so the division is exact.
    pub fn indent(&self, width: usize) -> usize {
        (self.total_columns - width) / 2
    }
}

/// Non-frame rows at an odd index use the double-dash fill glyph.
pub fn is_double_dashed(i: usize) -> bool {
    i % 2 == 1
}
