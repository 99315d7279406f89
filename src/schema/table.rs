use crate::error::{SqlError, SqlResult};
use crate::types::{DataType, Row};
use serde::{Deserialize, Serialize};

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Column {
            name: name.into(),
            data_type,
        }
    }
}

/// A table: its ordered columns plus the rows appended so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check the column list for duplicate names.
    pub fn validate(&self) -> SqlResult<()> {
        let mut column_names = std::collections::HashSet::new();
        for column in &self.columns {
            if !column_names.insert(column.name.as_str()) {
                return Err(SqlError::duplicate_column(&column.name));
            }
        }
        Ok(())
    }

    /// Validate raw INSERT values against the schema and append them as a row.
    ///
    /// Every position is checked before the row is appended, so a failure
    /// leaves the table unchanged.
    pub fn insert_row<S: AsRef<str>>(&mut self, raw_values: &[S]) -> SqlResult<&Row> {
        if raw_values.len() != self.columns.len() {
            return Err(SqlError::arity_mismatch(self.columns.len(), raw_values.len()));
        }

        let values = self
            .columns
            .iter()
            .zip(raw_values)
            .map(|(column, raw)| {
                let raw = raw.as_ref();
                column
                    .data_type
                    .parse_raw(raw)
                    .ok_or_else(|| SqlError::type_error(&column.name, column.data_type, raw))
            })
            .collect::<SqlResult<Vec<_>>>()?;

        self.rows.push(Row::new(values));
        Ok(&self.rows[self.rows.len() - 1])
    }
}
