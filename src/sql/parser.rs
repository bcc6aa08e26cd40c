//! SQL parser for dump statements.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::Chars;

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::lexer::Scanner;
use super::token::{Token, TokenKind};

/// Tuple key to remaining tuple values, in first-insertion order.
pub type ValueMap = IndexMap<String, Vec<String>, hashbrown::DefaultHashBuilder>;

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct SelectStatement {
    /// Selected field names, in the order written. `*` is kept verbatim.
    pub fields: Vec<String>,
    /// Table name.
    pub table_name: String,
}

/// An INSERT statement.
///
/// Each value-tuple is keyed by its first literal; the remaining literals
/// form the entry's value list. A later tuple with the same key replaces the
/// earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct InsertStatement {
    /// Table name.
    pub table_name: String,
    /// Tuple values keyed by their first literal.
    pub values: ValueMap,
}

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
}

impl Statement {
    /// The table this statement targets.
    #[must_use]
    pub fn table_name(&self) -> &str {
        match self {
            Statement::Select(select) => &select.table_name,
            Statement::Insert(insert) => &insert.table_name,
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(select: SelectStatement) -> Self {
        Statement::Select(select)
    }
}

impl From<InsertStatement> for Statement {
    fn from(insert: InsertStatement) -> Self {
        Statement::Insert(insert)
    }
}

/// What the parser expected when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A statement keyword (SELECT or INSERT).
    Keyword,
    /// A field name or `*`.
    Field,
    /// The FROM keyword.
    From,
    /// A table name.
    TableName,
    /// The INTO keyword.
    Into,
    /// The VALUES keyword.
    Values,
    /// `(` opening a value-tuple.
    StartBracket,
    /// `'` around a value.
    SingleQuote,
    /// A value inside quotes.
    Value,
    /// `)` closing a value-tuple.
    EndBracket,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::Keyword => "KEYWORD",
            Expected::Field => "field",
            Expected::From => "FROM",
            Expected::TableName => "table name",
            Expected::Into => "INTO",
            Expected::Values => "VALUES",
            Expected::StartBracket => "STARTBRACKET",
            Expected::SingleQuote => "SINGLEQUOTE",
            Expected::Value => "value",
            Expected::EndBracket => "ENDBRACKET",
        })
    }
}

/// SQL parser error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("found {found:?}, expected {expected}")]
pub struct ParseError {
    /// Literal text of the offending token.
    pub found: String,
    /// What the grammar required at that point.
    pub expected: Expected,
}

impl ParseError {
    fn new(found: Token, expected: Expected) -> Self {
        Self {
            found: found.literal,
            expected,
        }
    }
}

/// SQL parser.
///
/// Pulls tokens from a [`Scanner`] on demand, keeping at most one token of
/// lookahead in a pushback slot.
pub struct Parser<I> {
    scanner: Scanner<I>,
    pushback: Option<Token>,
}

impl<'a> Parser<Chars<'a>> {
    /// Create a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_chars(input.chars())
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a new parser over a character iterator.
    #[must_use]
    pub fn from_chars(source: I) -> Self {
        Self {
            scanner: Scanner::from_chars(source),
            pushback: None,
        }
    }

    /// Mutable access to the underlying scanner.
    #[cfg(feature = "std")]
    pub(crate) fn scanner_mut(&mut self) -> &mut Scanner<I> {
        &mut self.scanner
    }

    /// Parse a single SELECT or INSERT statement.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first token that does not fit the
    /// grammar.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        let token = self.scan_ignore_whitespace();
        let result = match token.kind {
            TokenKind::Select => self.parse_select().map(Statement::Select),
            TokenKind::Insert => self.parse_insert().map(Statement::Insert),
            _ => Err(ParseError::new(token, Expected::Keyword)),
        };
        if let Err(error) = &result {
            debug!(%error, "statement rejected");
        }
        result
    }

    /// Parse the remainder of a SELECT statement.
    fn parse_select(&mut self) -> Result<SelectStatement, ParseError> {
        let mut fields = Vec::new();

        loop {
            let token = self.scan_ignore_whitespace();
            if !matches!(token.kind, TokenKind::Identifier | TokenKind::Asterisk) {
                return Err(ParseError::new(token, Expected::Field));
            }
            fields.push(token.literal);

            if !self.next_is_comma() {
                break;
            }
        }

        self.expect(TokenKind::From, Expected::From)?;
        let table_name = self.expect(TokenKind::Identifier, Expected::TableName)?;

        debug!(table = %table_name, fields = fields.len(), "parsed SELECT statement");
        Ok(SelectStatement { fields, table_name })
    }

    /// Parse the remainder of an INSERT statement.
    fn parse_insert(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect(TokenKind::Into, Expected::Into)?;

        self.skip_optional(TokenKind::Backtick);
        let table_name = self.expect(TokenKind::Identifier, Expected::TableName)?;
        self.skip_optional(TokenKind::Backtick);

        self.expect(TokenKind::Values, Expected::Values)?;

        let mut values = ValueMap::default();
        loop {
            self.expect(TokenKind::LParen, Expected::StartBracket)?;

            let key = self.parse_quoted_value()?;
            let mut row = Vec::new();
            while self.next_is_comma() {
                row.push(self.parse_quoted_value()?);
            }
            values.insert(key, row);

            self.expect(TokenKind::RParen, Expected::EndBracket)?;

            // A semicolon, end of input or anything else ends the tuple list.
            if !self.next_is_comma() {
                break;
            }
        }

        debug!(table = %table_name, tuples = values.len(), "parsed INSERT statement");
        Ok(InsertStatement { table_name, values })
    }

    /// Parse `'value'` and return the value.
    fn parse_quoted_value(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::SingleQuote, Expected::SingleQuote)?;
        let value = self.expect(TokenKind::Identifier, Expected::Value)?;
        self.expect(TokenKind::SingleQuote, Expected::SingleQuote)?;
        Ok(value)
    }

    /// Consume a comma if it is the next token, otherwise push the token back.
    fn next_is_comma(&mut self) -> bool {
        self.skip_optional(TokenKind::Comma)
    }

    /// Consume the next token if it has the given kind, otherwise push it back.
    fn skip_optional(&mut self, kind: TokenKind) -> bool {
        let token = self.scan_ignore_whitespace();
        if token.kind == kind {
            true
        } else {
            self.unscan(token);
            false
        }
    }

    /// Expect a specific token kind and return its literal.
    fn expect(&mut self, kind: TokenKind, expected: Expected) -> Result<String, ParseError> {
        let token = self.scan_ignore_whitespace();
        if token.kind == kind {
            Ok(token.literal)
        } else {
            Err(ParseError::new(token, expected))
        }
    }

    /// Return the next token, skipping one whitespace token.
    fn scan_ignore_whitespace(&mut self) -> Token {
        let token = self.scan();
        if token.kind == TokenKind::Whitespace {
            self.scan()
        } else {
            token
        }
    }

    /// Return the pushed-back token if any, otherwise the scanner's next token.
    fn scan(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            return token;
        }
        let token = self.scanner.next_token();
        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        token
    }

    /// Push a token back so the next scan returns it.
    fn unscan(&mut self, token: Token) {
        debug_assert!(self.pushback.is_none(), "only one token can be pushed back");
        self.pushback = Some(token);
    }
}
