//! JSON record I/O for tables.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{CellValue, SheetError, Table};

impl Table {
    /// Builds a table from a JSON array of records.
    ///
    /// Columns are taken in first-seen order across all records; keys
    /// absent from a record become empty cells. Only scalar values are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Json`] if the input is not an array of
    /// objects or a value is not a scalar.
    pub fn from_json_records(json: &str) -> Result<Self, SheetError> {
        let records: Vec<Map<String, Value>> = serde_json::from_str(json)?;

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Self::with_columns(columns);
        for record in &records {
            let row = table
                .columns()
                .iter()
                .map(|column| {
                    record.get(column).map_or(Ok(CellValue::Empty), |value| {
                        serde_json::from_value(value.clone())
                    })
                })
                .collect::<Result<Vec<CellValue>, _>>()?;
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Builds a table from a file holding a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Io`] if the file cannot be read, or the same
    /// errors as [`Table::from_json_records`] for invalid content.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_records(&json)
    }

    /// Serializes the table as a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Json`] if serialization fails.
    pub fn to_json_records(&self) -> Result<String, SheetError> {
        let mut records = Vec::with_capacity(self.row_count());
        for row in self.rows() {
            let mut record = Map::new();
            for (column, cell) in self.columns().iter().zip(row) {
                record.insert(column.clone(), serde_json::to_value(cell)?);
            }
            records.push(Value::Object(record));
        }
        Ok(serde_json::to_string(&records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_records() {
        let table = Table::from_json_records(
            r#"[{"name": "Alice", "age": 30}, {"name": "Bob", "age": 25}]"#,
        )
        .unwrap();

        assert_eq!(table.columns(), ["name", "age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][0], CellValue::Text("Alice".to_string()));
        assert_eq!(table.rows()[1][1], CellValue::Int(25));
    }

    #[test]
    fn test_from_json_records_missing_keys_become_empty() {
        let table =
            Table::from_json_records(r#"[{"a": 1}, {"a": 2, "b": true}]"#).unwrap();

        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.rows()[0][1], CellValue::Empty);
        assert_eq!(table.rows()[1][1], CellValue::Bool(true));
    }

    #[test]
    fn test_from_json_records_rejects_nested_values() {
        assert!(Table::from_json_records(r#"[{"a": [1, 2]}]"#).is_err());
        assert!(Table::from_json_records(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"[{"x":1,"y":"a"},{"x":2,"y":null}]"#;
        let table = Table::from_json_records(json).unwrap();

        assert_eq!(table.to_json_records().unwrap(), json);
    }

    #[test]
    fn test_from_json_file_missing_path() {
        let result = Table::from_json_file("/nonexistent/records.json");

        assert!(matches!(result, Err(SheetError::Io(_))));
    }
}
