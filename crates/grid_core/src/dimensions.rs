//! Grid shape validation and control-input parsing.

use serde::{Deserialize, Serialize};

/// Validated grid shape. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

impl GridDimensions {
    /// Returns `None` unless both `rows` and `cols` are positive.
    pub const fn new(rows: u32, cols: u32) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            Some(Self { rows, cols })
        }
    }

    /// Row count.
    pub const fn rows(self) -> u32 {
        self.rows
    }

    /// Column count.
    pub const fn cols(self) -> u32 {
        self.cols
    }

    /// `rows * cols`.
    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Parses the raw text of the two numeric controls.
    ///
    /// On rejection returns the parsed `(rows, cols)` pair, with non-numeric sides reported as 0.
    pub fn from_inputs(rows_input: &str, cols_input: &str) -> Result<Self, (i64, i64)> {
        let rows = parse_dimension_input(rows_input);
        let cols = parse_dimension_input(cols_input);
        let rejected = (rows.unwrap_or(0), cols.unwrap_or(0));
        let (Some(rows), Some(cols)) = (rows, cols) else {
            return Err(rejected);
        };
        let rows = u32::try_from(rows).map_err(|_| rejected)?;
        let cols = u32::try_from(cols).map_err(|_| rejected)?;
        Self::new(rows, cols).ok_or(rejected)
    }
}

/// Lenient integer parse for number-input text.
///
/// Skips leading whitespace, accepts an optional sign, then reads leading ASCII digits and ignores
/// the rest (`"3.7"` is 3, `"4px"` is 4). Returns `None` when no digit follows.
pub fn parse_dimension_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
