//! Rectangular tabular dataset.

use serde::{Deserialize, Serialize};

use crate::{CellValue, SheetError};

/// A rectangular dataset: named columns and rows of [`CellValue`]s.
///
/// Rows carry an implicit 0-based position index, which the XLSX export
/// writes as the leading worksheet column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column names.
    columns: Vec<String>,
    /// Rows, each exactly as wide as `columns`.
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    #[must_use]
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Creates a table from column names and pre-built rows.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowWidth`] if any row does not match the
    /// column count.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self, SheetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::with_columns(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row to the table.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::RowWidth`] if the row does not match the
    /// column count.
    pub fn push_row<I>(&mut self, row: I) -> Result<(), SheetError>
    where
        I: IntoIterator<Item = CellValue>,
    {
        let row: Vec<CellValue> = row.into_iter().collect();
        if row.len() != self.columns.len() {
            return Err(SheetError::RowWidth {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the ordered column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
