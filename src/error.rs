use std::fmt;
use thiserror::Error;

use crate::types::DataType;

pub type SqlResult<T> = Result<T, SqlError>;

/// Kind of catalog object named in an `AlreadyExists` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Database,
    Table,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Database => write!(f, "Database"),
            ObjectKind::Table => write!(f, "Table"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: ObjectKind, name: String },

    #[error("Database not found: {name}")]
    DatabaseNotFound { name: String },

    #[error("Table not found: {table}")]
    TableNotFound { table: String },

    #[error("No database selected (run USE <name> first)")]
    NoDatabaseSelected,

    #[error("Syntax error: {message}")]
    SyntaxError { message: String },

    #[error("Unsupported type: {type_name} (expected INT or TEXT)")]
    UnsupportedType { type_name: String },

    #[error("Duplicate column name: {column}")]
    DuplicateColumn { column: String },

    #[error("Column count mismatch: table has {expected} column(s), got {found} value(s)")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Type error in column '{column}': expected {}, got {value}", expected_label(.expected))]
    TypeError {
        column: String,
        expected: DataType,
        value: String,
    },

    #[error("Unknown command: {statement}")]
    UnknownCommand { statement: String },
}

fn expected_label(expected: &DataType) -> &'static str {
    match expected {
        DataType::Int => "INT",
        DataType::Text => "quoted TEXT",
    }
}

/// Error class without payload, for comparing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    NoDatabaseSelected,
    SyntaxError,
    UnsupportedType,
    DuplicateColumn,
    ArityMismatch,
    TypeError,
    UnknownCommand,
}

impl SqlError {
    pub fn already_exists(kind: ObjectKind, name: impl Into<String>) -> Self {
        SqlError::AlreadyExists { kind, name: name.into() }
    }

    pub fn database_not_found(name: impl Into<String>) -> Self {
        SqlError::DatabaseNotFound { name: name.into() }
    }

    pub fn table_not_found(table: impl Into<String>) -> Self {
        SqlError::TableNotFound { table: table.into() }
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        SqlError::SyntaxError { message: message.into() }
    }

    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        SqlError::UnsupportedType { type_name: type_name.into() }
    }

    pub fn duplicate_column(column: impl Into<String>) -> Self {
        SqlError::DuplicateColumn { column: column.into() }
    }

    pub fn arity_mismatch(expected: usize, found: usize) -> Self {
        SqlError::ArityMismatch { expected, found }
    }

    pub fn type_error(column: impl Into<String>, expected: DataType, value: impl Into<String>) -> Self {
        SqlError::TypeError {
            column: column.into(),
            expected,
            value: value.into(),
        }
    }

    pub fn unknown_command(statement: impl Into<String>) -> Self {
        SqlError::UnknownCommand { statement: statement.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SqlError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            SqlError::DatabaseNotFound { .. } | SqlError::TableNotFound { .. } => ErrorKind::NotFound,
            SqlError::NoDatabaseSelected => ErrorKind::NoDatabaseSelected,
            SqlError::SyntaxError { .. } => ErrorKind::SyntaxError,
            SqlError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            SqlError::DuplicateColumn { .. } => ErrorKind::DuplicateColumn,
            SqlError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            SqlError::TypeError { .. } => ErrorKind::TypeError,
            SqlError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SqlError::already_exists(ObjectKind::Database, "shop");
        assert_eq!(err.to_string(), "Database 'shop' already exists");

        let err = SqlError::type_error("age", DataType::Int, "abc");
        assert_eq!(err.to_string(), "Type error in column 'age': expected INT, got abc");

        let err = SqlError::type_error("name", DataType::Text, "x");
        assert_eq!(err.to_string(), "Type error in column 'name': expected quoted TEXT, got x");
    }

    #[test]
    fn test_not_found_kinds_share_class() {
        assert_eq!(SqlError::database_not_found("a").kind(), ErrorKind::NotFound);
        assert_eq!(SqlError::table_not_found("t").kind(), ErrorKind::NotFound);
        assert_eq!(SqlError::arity_mismatch(2, 1).kind(), ErrorKind::ArityMismatch);
    }
}
