//! TinyDB - a minimal in-memory relational store
//!
//! A catalog of named databases, each holding typed tables, mutated by a
//! small set of SQL-like statements: `CREATE DATABASE`, `USE`,
//! `CREATE TABLE` and `INSERT INTO`.
//!
//! ```
//! use tinydb::{Engine, Value};
//!
//! let mut engine = Engine::new();
//! engine.execute("CREATE DATABASE shop").unwrap();
//! engine.execute("USE shop").unwrap();
//! engine.execute("CREATE TABLE users (id INT, name TEXT)").unwrap();
//! engine.execute("INSERT INTO users VALUES (1, \"ada\")").unwrap();
//!
//! let users = engine.catalog().current_database().unwrap().table("users").unwrap();
//! assert_eq!(users.rows()[0].values[1], Value::Text("ada".to_string()));
//! ```

pub mod types;
pub mod error;
pub mod parser;
pub mod schema;
pub mod catalog;
pub mod engine;
pub mod config;
pub mod cli;
pub mod repl;
pub mod commands;

pub use catalog::Catalog;
pub use engine::{Engine, EngineConfig, Outcome};
pub use error::{ErrorKind, SqlError, SqlResult};
pub use schema::{Column, Database, Table};
pub use types::{DataType, Row, Value};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
