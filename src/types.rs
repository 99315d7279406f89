use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SqlError;

/// One cell of a row. Every cell holds exactly one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Declared column types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Text,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "INT"),
            DataType::Text => write!(f, "TEXT"),
        }
    }
}

impl FromStr for DataType {
    type Err = SqlError;

    /// Type keywords are case-insensitive; anything other than INT or TEXT is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INT" => Ok(DataType::Int),
            "TEXT" => Ok(DataType::Text),
            _ => Err(SqlError::unsupported_type(s)),
        }
    }
}

impl DataType {
    /// Convert the raw source text of one INSERT value into a typed value.
    ///
    /// INT requires the whole text to be an integer literal. TEXT requires a
    /// leading and trailing double quote; the quotes are stripped and nothing
    /// else is unescaped.
    pub fn parse_raw(&self, raw: &str) -> Option<Value> {
        match self {
            DataType::Int => raw.parse::<i64>().ok().map(Value::Integer),
            DataType::Text => {
                if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
                    Some(Value::Text(raw[1..raw.len() - 1].to_string()))
                } else {
                    None
                }
            }
        }
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row { values }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_from_str_is_case_insensitive() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::Int);
        assert_eq!("Text".parse::<DataType>().unwrap(), DataType::Text);
        assert!(matches!(
            "FLOAT".parse::<DataType>(),
            Err(SqlError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_parse_raw_int() {
        assert_eq!(DataType::Int.parse_raw("42"), Some(Value::Integer(42)));
        assert_eq!(DataType::Int.parse_raw("-7"), Some(Value::Integer(-7)));
        assert_eq!(DataType::Int.parse_raw("12abc"), None);
        assert_eq!(DataType::Int.parse_raw(""), None);
        assert_eq!(DataType::Int.parse_raw("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_raw_text() {
        assert_eq!(DataType::Text.parse_raw("\"x\""), Some(Value::Text("x".to_string())));
        assert_eq!(DataType::Text.parse_raw("\"\""), Some(Value::Text(String::new())));
        assert_eq!(DataType::Text.parse_raw("\""), None);
        assert_eq!(DataType::Text.parse_raw("x"), None);
        assert_eq!(DataType::Text.parse_raw("\"x"), None);
    }

    #[test]
    fn test_row_display() {
        let row = Row::new(vec![Value::Integer(1), Value::Text("x".into())]);
        assert_eq!(row.to_string(), "(1, \"x\")");
    }
}
