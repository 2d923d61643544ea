//! Grid coordinates and the `A1` text notation used at the prompt.

use core::fmt;

use crate::config::MAX_COLUMNS;

/// Zero-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Column label for a zero-based column index (`0` → `A`).
///
/// Boards never exceed `MAX_COLUMNS`; past `Z` this yields `?`.
pub fn column_label(col: usize) -> char {
    if col < MAX_COLUMNS {
        (b'A' + col as u8) as char
    } else {
        '?'
    }
}

/// Parse `A1`-style text into a zero-based coordinate on a `rows × columns`
/// grid.
///
/// The text is a column letter followed by a 1-based row number, two or
/// three characters in total. Letters are matched case-insensitively.
pub fn parse_coord(input: &str, rows: usize, columns: usize) -> Option<Coord> {
    let len = input.chars().count();
    if !(2..=3).contains(&len) {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= columns {
        return None;
    }
    let row_str = chars.as_str();
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > rows {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.col), self.row + 1)
    }
}
