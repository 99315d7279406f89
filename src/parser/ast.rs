use crate::types::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement AST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    CreateDatabase(CreateDatabaseStatement),
    UseDatabase(UseDatabaseStatement),
    CreateTable(CreateTableStatement),
    Insert(InsertStatement),
}

/// Statement class, decided from the leading keywords alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    CreateDatabase,
    UseDatabase,
    CreateTable,
    Insert,
}

impl StatementKind {
    /// Whether the statement targets the current database
    pub fn needs_database(&self) -> bool {
        matches!(self, StatementKind::CreateTable | StatementKind::Insert)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::CreateDatabase => write!(f, "CREATE DATABASE"),
            StatementKind::UseDatabase => write!(f, "USE"),
            StatementKind::CreateTable => write!(f, "CREATE TABLE"),
            StatementKind::Insert => write!(f, "INSERT INTO"),
        }
    }
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::CreateDatabase(_) => StatementKind::CreateDatabase,
            Statement::UseDatabase(_) => StatementKind::UseDatabase,
            Statement::CreateTable(_) => StatementKind::CreateTable,
            Statement::Insert(_) => StatementKind::Insert,
        }
    }
}

/// CREATE DATABASE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseStatement {
    pub name: String,
}

/// USE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseDatabaseStatement {
    pub name: String,
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
}

/// INSERT statement.
///
/// Values are kept as their raw source text; typing happens against the
/// target table's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table: String,
    pub values: Vec<String>,
}
