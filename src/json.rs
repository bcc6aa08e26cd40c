//! JSON encoding of parsed statements.
//!
//! Field names are PascalCase and statements carry no variant tag: a SELECT
//! becomes `{"Fields":[...],"TableName":"..."}` and an INSERT becomes
//! `{"TableName":"...","Values":{"key":[...]}}`.
//!
//! # Example
//!
//! ```
//! use mysql2json::json::{JsonStyle, encode};
//! use mysql2json::sql::Parser;
//!
//! let stmt = Parser::new("SELECT * FROM my_table").parse().unwrap();
//! let mut out = Vec::new();
//! encode(&stmt, &mut out, JsonStyle::Compact).unwrap();
//! assert_eq!(out, b"{\"Fields\":[\"*\"],\"TableName\":\"my_table\"}\n");
//! ```

use alloc::string::String;
use std::io::Write;

use crate::errors::Error;
use crate::sql::Statement;

/// How the JSON document is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Indented over multiple lines.
    Pretty,
}

/// Write `statement` to `writer` as one JSON document followed by a newline.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails and [`Error::Json`] if the
/// statement cannot be serialized.
pub fn encode<W: Write>(statement: &Statement, mut writer: W, style: JsonStyle) -> Result<(), Error> {
    let written = match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, statement),
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, statement),
    };
    written.map_err(|err| {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err)
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render `statement` as a JSON string without a trailing newline.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn to_string(statement: &Statement, style: JsonStyle) -> Result<String, Error> {
    let text = match style {
        JsonStyle::Compact => serde_json::to_string(statement),
        JsonStyle::Pretty => serde_json::to_string_pretty(statement),
    };
    Ok(text?)
}
