//! Abstract spreadsheet capability surface.
//!
//! The builder never owns a workbook implementation directly; it drives
//! whatever backs this trait. Production uses the xlsx adapter, tests use an
//! in-memory sheet.

use crate::error::DocumentError;

/// A single cell coordinate: 1-based column and row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddr {
    pub col: u32,
    pub row: u32,
}

impl CellAddr {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Same column, different row.
    pub const fn at_row(self, row: u32) -> Self {
        Self { col: self.col, row }
    }

    /// A1-notation form, e.g. `CellAddr::new(28, 18)` → `"AB18"`.
    pub fn to_a1(self) -> String {
        format!("{}{}", column_letters(self.col), self.row)
    }
}

impl core::fmt::Display for CellAddr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// 1-based column number to spreadsheet letters (1 → A, 28 → AB).
pub fn column_letters(mut col: u32) -> String {
    debug_assert!(col >= 1);
    let mut letters = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Spreadsheet letters to a 1-based column number (case-insensitive).
pub fn column_number(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut col = 0u32;
    for ch in letters.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return None;
        }
        col = col * 26 + (ch as u32 - 'A' as u32 + 1);
    }
    Some(col)
}

/// Parse an A1-notation reference like `"AB18"`.
pub fn parse_a1(reference: &str) -> Option<CellAddr> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    let col = column_number(letters)?;
    let row = digits.parse().ok()?;
    Some(CellAddr::new(col, row))
}

/// Minimal mutation surface over one worksheet of a loaded template.
///
/// One handle is created per build call, mutated in place, serialized, and
/// discarded; implementations hold no cross-call state.
pub trait SheetDocument {
    /// Current string form of a cell's value, if the cell exists.
    fn cell_value(&self, addr: CellAddr) -> Option<String>;

    fn set_text(&mut self, addr: CellAddr, value: &str);

    fn set_number(&mut self, addr: CellAddr, value: u64);

    /// Set the cell's value to empty without removing the cell or its style.
    fn clear(&mut self, addr: CellAddr);

    /// Copy a full row onto another: values, styles, row height, and merge
    /// ranges contained within the source row.
    fn duplicate_row(&mut self, src_row: u32, dst_row: u32);

    /// Consume the handle and produce the binary artifact.
    fn serialize(self) -> Result<Vec<u8>, DocumentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_cover_single_and_double_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(28), "AB");
        assert_eq!(column_letters(30), "AD");
    }

    #[test]
    fn column_number_inverts_column_letters() {
        for col in 1..200 {
            assert_eq!(column_number(&column_letters(col)), Some(col));
        }
    }

    #[test]
    fn a1_round_trip() {
        let addr = parse_a1("AB18").unwrap();
        assert_eq!(addr, CellAddr::new(28, 18));
        assert_eq!(addr.to_a1(), "AB18");
        assert!(parse_a1("18").is_none());
        assert!(parse_a1("AB").is_none());
    }
}
