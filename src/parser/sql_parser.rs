use crate::error::{SqlError, SqlResult};
use crate::parser::ast::*;
use crate::parser::lexer::{tokenize_prefix, Keyword, Token, TokenKind};
use crate::types::DataType;

/// Recursive-descent parser over the token stream of one statement.
///
/// A lexing error is held back until `parse`, so `classify` still sees the
/// tokens in front of it.
pub struct SqlParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    lex_error: Option<SqlError>,
    position: usize,
}

impl<'a> SqlParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let (tokens, lex_error) = tokenize_prefix(input);
        SqlParser {
            input,
            tokens,
            lex_error,
            position: 0,
        }
    }

    /// Classify the statement by its leading keywords.
    ///
    /// Checked in priority order: CREATE DATABASE, USE, CREATE TABLE,
    /// INSERT INTO. Anything else is an unknown command.
    pub fn classify(&self) -> SqlResult<StatementKind> {
        let first = self.tokens.first();
        let second = self.tokens.get(1);
        let leading = |a: Keyword, b: Option<Keyword>| {
            first.map_or(false, |t| t.is_keyword(a))
                && b.map_or(true, |b| second.map_or(false, |t| t.is_keyword(b)))
        };

        if leading(Keyword::Create, Some(Keyword::Database)) {
            Ok(StatementKind::CreateDatabase)
        } else if leading(Keyword::Use, None) {
            Ok(StatementKind::UseDatabase)
        } else if leading(Keyword::Create, Some(Keyword::Table)) {
            Ok(StatementKind::CreateTable)
        } else if leading(Keyword::Insert, Some(Keyword::Into)) {
            Ok(StatementKind::Insert)
        } else {
            Err(SqlError::unknown_command(self.input.trim()))
        }
    }

    pub fn parse(mut self) -> SqlResult<Statement> {
        let kind = self.classify()?;
        if let Some(e) = self.lex_error.take() {
            return Err(e);
        }

        let statement = match kind {
            StatementKind::CreateDatabase => Statement::CreateDatabase(self.create_database()?),
            StatementKind::UseDatabase => Statement::UseDatabase(self.use_database()?),
            StatementKind::CreateTable => Statement::CreateTable(self.create_table()?),
            StatementKind::Insert => Statement::Insert(self.insert()?),
        };
        self.finish()?;
        Ok(statement)
    }

    // CREATE DATABASE <name>
    fn create_database(&mut self) -> SqlResult<CreateDatabaseStatement> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Database)?;
        let name = self.expect_name("database name")?;
        Ok(CreateDatabaseStatement { name })
    }

    // USE <name>
    fn use_database(&mut self) -> SqlResult<UseDatabaseStatement> {
        self.expect_keyword(Keyword::Use)?;
        let name = self.expect_name("database name")?;
        Ok(UseDatabaseStatement { name })
    }

    // CREATE TABLE <name> ( <col> <type> [, <col> <type>]* )
    //
    // The whole statement must be well formed before any type name is resolved.
    fn create_table(&mut self) -> SqlResult<CreateTableStatement> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;
        let table_name = self.expect_name("table name")?;
        self.expect(TokenKind::LeftParen, "'('")?;

        let mut definitions = Vec::new();
        loop {
            definitions.push(self.column_definition()?);
            match self.advance() {
                Some(t) if t.kind == TokenKind::Comma => continue,
                Some(t) if t.kind == TokenKind::RightParen => break,
                Some(t) => {
                    return Err(SqlError::syntax_error(format!(
                        "unexpected {} after column definition, expected ',' or ')'",
                        t
                    )))
                }
                None => return Err(SqlError::syntax_error("missing ')' after column list")),
            }
        }
        self.finish()?;

        let columns = definitions
            .into_iter()
            .map(|(name, type_name)| {
                let data_type = type_name.parse::<DataType>()?;
                Ok(ColumnDefinition { name, data_type })
            })
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(CreateTableStatement { table_name, columns })
    }

    /// A column name and the unresolved spelling of its type.
    fn column_definition(&mut self) -> SqlResult<(String, String)> {
        let name = self.expect_name("column name")?;
        match self.peek() {
            Some(t) if matches!(t.kind, TokenKind::Keyword(_) | TokenKind::Identifier | TokenKind::Integer | TokenKind::Text) => {
                let type_name = t.text.clone();
                self.position += 1;
                Ok((name, type_name))
            }
            _ => Err(SqlError::syntax_error(format!(
                "column '{}' is missing a type",
                name
            ))),
        }
    }

    // INSERT INTO <table> VALUES ( <raw> [, <raw>]* )
    fn insert(&mut self) -> SqlResult<InsertStatement> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.expect_name("table name")?;
        self.expect_keyword(Keyword::Values)?;
        self.expect(TokenKind::LeftParen, "'('")?;

        let mut values = Vec::new();
        if self.peek().map(|t| t.kind) == Some(TokenKind::RightParen) {
            self.position += 1;
            return Ok(InsertStatement { table, values });
        }

        let mut span: Option<(usize, usize)> = None;
        loop {
            let token = self
                .advance()
                .ok_or_else(|| SqlError::syntax_error("missing ')' after value list"))?;
            match token.kind {
                TokenKind::Comma | TokenKind::RightParen => {
                    let raw = span.map_or("", |(start, end)| &self.input[start..end]);
                    values.push(raw.to_string());
                    span = None;
                    if token.kind == TokenKind::RightParen {
                        break;
                    }
                }
                TokenKind::LeftParen | TokenKind::Semicolon => {
                    return Err(SqlError::syntax_error(format!(
                        "unexpected {} in value list",
                        token
                    )));
                }
                _ => {
                    let (start, end) = (token.span.start, token.span.end);
                    span = Some(span.map_or((start, end), |(s, _)| (s, end)));
                }
            }
        }

        Ok(InsertStatement { table, values })
    }

    /// Accept one optional `;`, then require the end of input. Calling it
    /// again at the end of input is a no-op.
    fn finish(&mut self) -> SqlResult<()> {
        if self.peek().map(|t| t.kind) == Some(TokenKind::Semicolon) {
            self.position += 1;
        }
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(SqlError::syntax_error(format!(
                "unexpected {} at end of statement",
                t
            ))),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> SqlResult<Token> {
        match self.advance() {
            Some(t) if t.kind == kind => Ok(t),
            Some(t) => Err(SqlError::syntax_error(format!(
                "expected {}, found {}",
                expected, t
            ))),
            None => Err(SqlError::syntax_error(format!(
                "expected {}, found end of statement",
                expected
            ))),
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> SqlResult<Token> {
        self.expect(TokenKind::Keyword(keyword), &keyword.to_string())
    }

    fn expect_name(&mut self, what: &str) -> SqlResult<String> {
        match self.advance() {
            Some(t) if t.is_name() => Ok(t.text),
            Some(t) => Err(SqlError::syntax_error(format!("expected {}, found {}", what, t))),
            None => Err(SqlError::syntax_error(format!(
                "expected {}, found end of statement",
                what
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(input: &str) -> SqlResult<Statement> {
        SqlParser::new(input).parse()
    }

    fn error_kind(input: &str) -> ErrorKind {
        parse(input).unwrap_err().kind()
    }

    #[test]
    fn test_classify_priority() {
        let kind = |s: &str| SqlParser::new(s).classify();
        assert_eq!(kind("create database x").unwrap(), StatementKind::CreateDatabase);
        assert_eq!(kind("USE x").unwrap(), StatementKind::UseDatabase);
        assert_eq!(kind("Create Table t (a INT)").unwrap(), StatementKind::CreateTable);
        assert_eq!(kind("INSERT INTO t VALUES (1)").unwrap(), StatementKind::Insert);
        assert!(kind("DROP TABLE t").is_err());
        assert!(kind("USEFUL x").is_err());
        assert!(kind("CREATE DATABASES x").is_err());
        assert!(kind("INSERT t").is_err());
        assert!(kind("").is_err());
    }

    #[test]
    fn test_classify_ignores_lexing_errors_after_the_leading_keywords() {
        let kind = |s: &str| SqlParser::new(s).classify();
        assert_eq!(kind("INSERT INTO t VALUES (\"x").unwrap(), StatementKind::Insert);
        assert_eq!(
            kind("DROP TABLE \"x"),
            Err(SqlError::unknown_command("DROP TABLE \"x"))
        );
        assert_eq!(error_kind("INSERT INTO t VALUES (\"x"), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_parse_create_database() {
        let stmt = parse("CREATE DATABASE Shop;").unwrap();
        assert_eq!(
            stmt,
            Statement::CreateDatabase(CreateDatabaseStatement { name: "Shop".to_string() })
        );
        assert_eq!(error_kind("CREATE DATABASE"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE DATABASE a b"), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_parse_use() {
        let stmt = parse("use shop").unwrap();
        assert_eq!(stmt, Statement::UseDatabase(UseDatabaseStatement { name: "shop".to_string() }));
        assert_eq!(error_kind("USE"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("USE a b"), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_parse_create_table() {
        let stmt = parse("CREATE TABLE users (id int, name Text)").unwrap();
        if let Statement::CreateTable(create) = stmt {
            assert_eq!(create.table_name, "users");
            assert_eq!(
                create.columns,
                vec![
                    ColumnDefinition { name: "id".to_string(), data_type: DataType::Int },
                    ColumnDefinition { name: "name".to_string(), data_type: DataType::Text },
                ]
            );
        } else {
            panic!("Expected CREATE TABLE statement");
        }
    }

    #[test]
    fn test_parse_create_table_errors() {
        assert_eq!(error_kind("CREATE TABLE t (a FLOAT)"), ErrorKind::UnsupportedType);
        assert_eq!(error_kind("CREATE TABLE t a INT"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a INT"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t )a INT("), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t ()"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a INT NOT NULL)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE x y (a INT)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE (a INT)"), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_create_table_structure_checked_before_types() {
        assert_eq!(error_kind("CREATE TABLE t (a FLOAT"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a FLOAT, b)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a FLOAT) extra"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("CREATE TABLE t (a INT, b REAL);"), ErrorKind::UnsupportedType);
    }

    #[test]
    fn test_keywords_usable_as_names() {
        let stmt = parse("CREATE TABLE values (table TEXT)").unwrap();
        if let Statement::CreateTable(create) = stmt {
            assert_eq!(create.table_name, "values");
            assert_eq!(create.columns[0].name, "table");
        } else {
            panic!("Expected CREATE TABLE statement");
        }
    }

    #[test]
    fn test_parse_insert_keeps_raw_values() {
        let stmt = parse("INSERT INTO t VALUES (1, \"hello, world\", abc, -5)").unwrap();
        assert_eq!(
            stmt,
            Statement::Insert(InsertStatement {
                table: "t".to_string(),
                values: vec![
                    "1".to_string(),
                    "\"hello, world\"".to_string(),
                    "abc".to_string(),
                    "-5".to_string(),
                ],
            })
        );
    }

    #[test]
    fn test_parse_insert_multi_token_and_empty_values() {
        let stmt = parse("insert into t values (1 2,  , \"a\")").unwrap();
        if let Statement::Insert(insert) = stmt {
            assert_eq!(insert.values, vec!["1 2", "", "\"a\""]);
        } else {
            panic!("Expected INSERT statement");
        }

        let stmt = parse("INSERT INTO t VALUES ( )").unwrap();
        if let Statement::Insert(insert) = stmt {
            assert!(insert.values.is_empty());
        } else {
            panic!("Expected INSERT statement");
        }
    }

    #[test]
    fn test_parse_insert_errors() {
        assert_eq!(error_kind("INSERT INTO t (1, 2)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO VALUES (1)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO t VALUES 1, 2"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO t VALUES (1, 2"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO t VALUES ((1))"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO my table VALUES (1)"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("INSERT INTO t VALUES (1) extra"), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_trailing_semicolon_is_optional() {
        assert!(parse("USE shop;").is_ok());
        assert!(parse("USE shop").is_ok());
        assert_eq!(error_kind("USE shop;;"), ErrorKind::SyntaxError);
        assert_eq!(error_kind("USE a; USE b"), ErrorKind::SyntaxError);
    }
}
