//! Xlsx backing for [`SheetDocument`], built on `umya-spreadsheet`.
//!
//! The adapter owns a parsed workbook for the duration of one build call and
//! drives the first worksheet only; the order template is a single-sheet
//! file. `duplicate_row` copies values, styles, row height, and merge ranges
//! so grown item rows are indistinguishable from the styled template row.

use std::io::Cursor;
use std::path::Path;

use umya_spreadsheet::{Spreadsheet, Style, Worksheet};

use crate::error::DocumentError;
use crate::sheet::{column_letters, parse_a1, CellAddr, SheetDocument};

/// Rightmost column considered when copying rows. The template's used range
/// ends around AH; A..=AN leaves margin without scanning the whole sheet.
const ROW_COPY_SPAN: u32 = 40;

/// One loaded template workbook.
#[derive(Debug)]
pub struct XlsxDocument {
    book: Spreadsheet,
}

impl XlsxDocument {
    /// Parse a template from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path.as_ref()).map_err(|err| {
            DocumentError::TemplateLoad(format!(
                "cannot read {}: {err}",
                path.as_ref().display()
            ))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a template from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes.to_vec()), true)
            .map_err(|err| DocumentError::TemplateLoad(err.to_string()))?;
        if book.get_sheet(&0).is_none() {
            return Err(DocumentError::TemplateLoad(
                "workbook has no sheets".to_string(),
            ));
        }
        tracing::debug!(bytes = bytes.len(), "template parsed");
        Ok(Self { book })
    }

    fn sheet(&self) -> &Worksheet {
        // Presence of sheet 0 is checked at load.
        self.book.get_sheet(&0).expect("first worksheet")
    }

    fn sheet_mut(&mut self) -> &mut Worksheet {
        self.book.get_sheet_mut(&0).expect("first worksheet")
    }
}

impl SheetDocument for XlsxDocument {
    fn cell_value(&self, addr: CellAddr) -> Option<String> {
        self.sheet()
            .get_cell((addr.col, addr.row))
            .map(|cell| cell.get_value().to_string())
    }

    fn set_text(&mut self, addr: CellAddr, value: &str) {
        self.sheet_mut()
            .get_cell_mut((addr.col, addr.row))
            .set_value(value);
    }

    fn set_number(&mut self, addr: CellAddr, value: u64) {
        self.sheet_mut()
            .get_cell_mut((addr.col, addr.row))
            .set_value_number(value as f64);
    }

    fn clear(&mut self, addr: CellAddr) {
        self.sheet_mut()
            .get_cell_mut((addr.col, addr.row))
            .set_value("");
    }

    fn duplicate_row(&mut self, src_row: u32, dst_row: u32) {
        let sheet = self.sheet_mut();

        // Cells: value and style, column by column across the used span.
        for col in 1..=ROW_COPY_SPAN {
            let source: Option<(String, Style)> = sheet
                .get_cell((col, src_row))
                .map(|cell| (cell.get_value().to_string(), cell.get_style().clone()));
            match source {
                Some((value, style)) => {
                    let cell = sheet.get_cell_mut((col, dst_row));
                    cell.set_value(value);
                    cell.set_style(style);
                }
                None => {
                    if sheet.get_cell((col, dst_row)).is_some() {
                        let cell = sheet.get_cell_mut((col, dst_row));
                        cell.set_value("");
                        cell.set_style(Style::default());
                    }
                }
            }
        }

        // Row height.
        let height = sheet.get_row_dimension(&src_row).map(|row| *row.get_height());
        if let Some(height) = height {
            sheet.get_row_dimension_mut(&dst_row).set_height(height);
        }

        // Merge ranges lying entirely within the source row, re-anchored.
        let moved: Vec<String> = sheet
            .get_merge_cells()
            .iter()
            .filter_map(|range| shift_row_range(&range.get_range(), src_row, dst_row))
            .collect();
        for range in moved {
            sheet.add_merge_cells(range);
        }
    }

    fn serialize(self) -> Result<Vec<u8>, DocumentError> {
        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&self.book, &mut cursor)
            .map_err(|err| DocumentError::Serialize(err.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// For a range like `C22:G22` confined to `src_row`, produce the same range
/// on `dst_row`. Ranges spanning other rows are left alone.
fn shift_row_range(range: &str, src_row: u32, dst_row: u32) -> Option<String> {
    let (start, end) = range.split_once(':')?;
    let start = parse_a1(start)?;
    let end = parse_a1(end)?;
    if start.row != src_row || end.row != src_row {
        return None;
    }
    Some(format!(
        "{}{dst_row}:{}{dst_row}",
        column_letters(start.col),
        column_letters(end.col)
    ))
}
