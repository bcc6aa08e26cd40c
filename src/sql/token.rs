//! Token kinds produced by the scanner.

use alloc::string::String;
use core::fmt::{self, Display};

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact text matched in the input.
    pub literal: String,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,
    /// A character the scanner does not recognize
    Illegal,
    /// A run of whitespace
    Whitespace,

    // Identifiers
    /// An identifier (table name, field name, value)
    Identifier,

    // Symbols
    /// `*`
    Asterisk,
    /// `,`
    Comma,
    /// `'`
    SingleQuote,
    /// `` ` ``
    Backtick,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,

    // Keywords
    /// SELECT keyword
    Select,
    /// FROM keyword
    From,
    /// INSERT keyword
    Insert,
    /// INTO keyword
    Into,
    /// VALUES keyword
    Values,
}

/// Reserved words, keyed by their uppercase spelling.
static KEYWORDS: &[(&str, TokenKind)] = &[
    ("SELECT", TokenKind::Select),
    ("FROM", TokenKind::From),
    ("INSERT", TokenKind::Insert),
    ("INTO", TokenKind::Into),
    ("VALUES", TokenKind::Values),
];

/// Look up the keyword matching `ident`, ignoring ASCII case.
#[must_use]
pub fn keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(ident))
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Whether this kind is one of the reserved keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Map a single punctuation character to its token kind.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '*' => Self::Asterisk,
            ',' => Self::Comma,
            '\'' => Self::SingleQuote,
            '`' => Self::Backtick,
            '(' => Self::LParen,
            ')' => Self::RParen,
            ';' => Self::Semicolon,
            _ => return None,
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Whitespace => "WS",
            Self::Identifier => "IDENT",
            Self::Asterisk => "ASTERISK",
            Self::Comma => "COMMA",
            Self::SingleQuote => "SINGLEQUOTE",
            Self::Backtick => "BACKTICK",
            Self::LParen => "STARTBRACKET",
            Self::RParen => "ENDBRACKET",
            Self::Semicolon => "SEMICOLON",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
        };
        f.write_str(name)
    }
}
