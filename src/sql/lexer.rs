//! SQL scanner for tokenizing input.

use alloc::string::String;
use core::str::Chars;

use super::token::{Token, TokenKind, keyword};

/// Scanner that classifies runs of input characters into tokens.
///
/// The scanner pulls characters lazily from any `char` iterator and never
/// fails: characters it does not recognize come back as
/// [`TokenKind::Illegal`] tokens for the parser to report.
pub struct Scanner<I> {
    source: I,
    unread: Option<char>,
}

impl<'a> Scanner<Chars<'a>> {
    /// Create a new scanner over a string.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_chars(input.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Create a new scanner over a character iterator.
    #[must_use]
    pub fn from_chars(source: I) -> Self {
        Self {
            source,
            unread: None,
        }
    }

    /// Mutable access to the underlying character source.
    pub fn source_mut(&mut self) -> &mut I {
        &mut self.source
    }

    /// Return the next token in the input.
    pub fn next_token(&mut self) -> Token {
        let Some(c) = self.read() else {
            return Token::eof();
        };

        if is_whitespace(c) {
            self.unread(c);
            return self.scan_whitespace();
        }
        if is_ident_start(c) {
            self.unread(c);
            return self.scan_identifier();
        }

        let kind = TokenKind::from_symbol(c).unwrap_or(TokenKind::Illegal);
        Token::new(kind, String::from(c))
    }

    /// Consume a run of whitespace.
    fn scan_whitespace(&mut self) -> Token {
        let mut literal = String::new();
        while let Some(c) = self.read() {
            if !is_whitespace(c) {
                self.unread(c);
                break;
            }
            literal.push(c);
        }
        Token::new(TokenKind::Whitespace, literal)
    }

    /// Consume an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        let mut literal = String::new();
        while let Some(c) = self.read() {
            if !is_ident_cont(c) {
                self.unread(c);
                break;
            }
            literal.push(c);
        }

        let kind = keyword(&literal).unwrap_or(TokenKind::Identifier);
        Token::new(kind, literal)
    }

    fn read(&mut self) -> Option<char> {
        self.unread.take().or_else(|| self.source.next())
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.unread.is_none(), "only one character can be unread");
        self.unread = Some(c);
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Check if a character is whitespace.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
