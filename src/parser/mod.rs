pub mod ast;
pub mod lexer;
pub mod sql_parser;

pub use ast::*;
pub use lexer::{tokenize_prefix, Keyword, Token, TokenKind};
pub use sql_parser::SqlParser;

use crate::error::SqlResult;

/// Parse one statement into its AST
pub fn parse_statement(input: &str) -> SqlResult<Statement> {
    SqlParser::new(input).parse()
}
