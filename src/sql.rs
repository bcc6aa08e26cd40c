//! Scanner and parser for the statements found in MySQL dump files.
//!
//! Two statement forms are understood:
//! - `SELECT <fields> FROM <table>`
//! - ``INSERT INTO [`]<table>[`] VALUES ('key', 'value', ...), ...``
//!
//! The [`Scanner`] turns characters into [`Token`]s lazily and the [`Parser`]
//! pulls them one at a time, with a single token of pushback, to build one
//! [`Statement`].

mod format;
mod lexer;
mod parser;
#[cfg(feature = "std")]
mod reader;
mod token;

pub use lexer::Scanner;
pub use parser::{
    Expected, InsertStatement, ParseError, Parser, SelectStatement, Statement, ValueMap,
};
#[cfg(feature = "std")]
pub use reader::ReadChars;
pub use token::{Token, TokenKind, keyword};
