//! Multi-sheet XLSX export.

use std::path::PathBuf;

use xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::{Book, CellValue, SheetError, Table};

/// File extension appended to the base name.
pub const XLSX_EXTENSION: &str = "xlsx";

/// Writes a book to `{file_base_name}.xlsx`, one worksheet per sheet.
///
/// Any existing file at that path is overwritten; there is no merge or
/// append-to-existing-workbook behavior. Worksheets are written in the
/// book's insertion order. Each worksheet holds the column names as its
/// first row and the 0-based row index as its leading column, the default
/// tabular export shape.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`SheetError::Xlsx`] if the workbook cannot be created (for
/// example an unwritable path) or a sheet name is rejected by the XLSX
/// format; the underlying writer's error is propagated unmodified. The
/// workbook handle is released on every exit path.
pub fn write_sheets(file_base_name: &str, book: &Book) -> Result<PathBuf, SheetError> {
    let file_name = format!("{file_base_name}.{XLSX_EXTENSION}");
    let workbook = Workbook::new(&file_name)?;

    for (name, table) in book.iter() {
        let mut sheet = workbook.add_worksheet(Some(name))?;
        write_table(&mut sheet, table)?;
    }

    workbook.close()?;
    Ok(PathBuf::from(file_name))
}

/// Writes one table into a worksheet: header row, then indexed data rows.
fn write_table(sheet: &mut Worksheet<'_>, table: &Table) -> Result<(), XlsxError> {
    // Row 0: blank cell over the index column, then the column names.
    for (col, name) in table.columns().iter().enumerate() {
        sheet.write_string(0, (col + 1) as u16, name, None)?;
    }

    for (row, cells) in table.rows().iter().enumerate() {
        let sheet_row = (row + 1) as u32;
        sheet.write_number(sheet_row, 0, row as f64, None)?;
        for (col, cell) in cells.iter().enumerate() {
            write_cell(sheet, sheet_row, (col + 1) as u16, cell)?;
        }
    }

    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet<'_>,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), XlsxError> {
    match cell {
        CellValue::Empty => sheet.write_blank(row, col, None),
        CellValue::Bool(value) => sheet.write_boolean(row, col, *value, None),
        CellValue::Int(value) => sheet.write_number(row, col, *value as f64, None),
        CellValue::Float(value) => sheet.write_number(row, col, *value, None),
        CellValue::Text(value) => sheet.write_string(row, col, value, None),
    }
}
