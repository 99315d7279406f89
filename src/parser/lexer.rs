//! Tokenizer for TinyDB statements.
//!
//! Words are runs of characters that are neither whitespace, punctuation
//! nor a double quote. A word is classified as a keyword, an integer or an
//! identifier; keywords stay usable as names because every token keeps its
//! source spelling and span.

use std::fmt;
use std::ops::Range;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, opt, recognize},
    sequence::{delimited, pair},
    IResult,
};

use crate::error::SqlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Create,
    Database,
    Table,
    Use,
    Insert,
    Into,
    Values,
}

impl Keyword {
    fn lookup(word: &str) -> Option<Keyword> {
        match word.to_ascii_uppercase().as_str() {
            "CREATE" => Some(Keyword::Create),
            "DATABASE" => Some(Keyword::Database),
            "TABLE" => Some(Keyword::Table),
            "USE" => Some(Keyword::Use),
            "INSERT" => Some(Keyword::Insert),
            "INTO" => Some(Keyword::Into),
            "VALUES" => Some(Keyword::Values),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Keyword::Create => "CREATE",
            Keyword::Database => "DATABASE",
            Keyword::Table => "TABLE",
            Keyword::Use => "USE",
            Keyword::Insert => "INSERT",
            Keyword::Into => "INTO",
            Keyword::Values => "VALUES",
        };
        write!(f, "{}", word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Integer,
    Text,
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source spelling, quotes included for text literals
    pub text: String,
    /// Byte range in the lexed input
    pub span: Range<usize>,
}

impl Token {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Keywords and identifiers can both name a database, table or column.
    pub fn is_name(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_) | TokenKind::Identifier)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | ';' | '"')
}

fn punctuation(input: &str) -> IResult<&str, TokenKind> {
    map(one_of("(),;"), |c| match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        ',' => TokenKind::Comma,
        _ => TokenKind::Semicolon,
    })(input)
}

fn text_literal(input: &str) -> IResult<&str, TokenKind> {
    map(
        recognize(delimited(char('"'), take_while(|c| c != '"'), char('"'))),
        |_| TokenKind::Text,
    )(input)
}

fn word(input: &str) -> IResult<&str, TokenKind> {
    map(take_while1(is_word_char), |w: &str| {
        if let Some(keyword) = Keyword::lookup(w) {
            TokenKind::Keyword(keyword)
        } else if is_integer(w) {
            TokenKind::Integer
        } else {
            TokenKind::Identifier
        }
    })(input)
}

fn is_integer(w: &str) -> bool {
    let signed_digits = recognize(pair(opt(one_of::<_, _, nom::error::Error<&str>>("+-")), digit1));
    all_consuming(signed_digits)(w).is_ok()
}

/// Split a statement into tokens as far as possible, returning the tokens
/// before the first lexing error together with that error.
pub fn tokenize_prefix(input: &str) -> (Vec<Token>, Option<SqlError>) {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        let after_ws = rest.trim_start_matches(char::is_whitespace);
        if after_ws.is_empty() {
            break;
        }

        let start = input.len() - after_ws.len();
        match alt((punctuation, text_literal, word))(after_ws) {
            Ok((remaining, kind)) => {
                let end = input.len() - remaining.len();
                tokens.push(Token {
                    kind,
                    text: input[start..end].to_string(),
                    span: start..end,
                });
                rest = remaining;
            }
            Err(_) => {
                let message = if after_ws.starts_with('"') {
                    format!("unterminated text literal at position {}", start)
                } else {
                    format!("unexpected character at position {}", start)
                };
                return (tokens, Some(SqlError::syntax_error(message)));
            }
        }
    }

    (tokens, None)
}
