use serde::{Deserialize, Serialize};
use std::fmt;

/// What a successfully executed statement did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// CREATE DATABASE result
    DatabaseCreated(String),
    /// USE result
    DatabaseSelected(String),
    /// CREATE TABLE result
    TableCreated(String),
    /// INSERT result
    RowInserted {
        table: String,
        row_count: usize,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::DatabaseCreated(name) => write!(f, "Database '{}' created", name),
            Outcome::DatabaseSelected(name) => write!(f, "Database changed to '{}'", name),
            Outcome::TableCreated(name) => write!(f, "Table '{}' created", name),
            Outcome::RowInserted { table, .. } => write!(f, "1 row inserted into '{}'", table),
        }
    }
}
