//! Testing utilities shared by the fuzz harness and regression tests.
//!
//! This module is gated behind the `testing` feature.

use alloc::string::ToString;

use crate::sql::{Parser, Statement};

/// Parse `sql` and, when it is accepted, check the parser's contract on it.
///
/// Verifies that:
/// - parsing the same text twice yields equal statements,
/// - a SELECT has at least one field and an INSERT at least one tuple,
/// - rendering the statement back to SQL and parsing it again yields an equal
///   statement.
///
/// Rejected input only has to fail cleanly, which returning here shows.
///
/// # Panics
///
/// Panics if any of the checks above fails.
pub fn test_parse_roundtrip(sql: &str) {
    let Ok(stmt) = Parser::new(sql).parse() else {
        return;
    };

    let again = Parser::new(sql)
        .parse()
        .expect("second parse of accepted input failed");
    assert_eq!(stmt, again, "parsing is not deterministic for {sql:?}");

    match &stmt {
        Statement::Select(select) => assert!(!select.fields.is_empty()),
        Statement::Insert(insert) => assert!(!insert.values.is_empty()),
    }
    assert!(!stmt.table_name().is_empty());

    let rendered = stmt.to_string();
    let reparsed = Parser::new(&rendered)
        .parse()
        .unwrap_or_else(|err| panic!("rendered SQL {rendered:?} failed to parse: {err}"));
    assert_eq!(stmt, reparsed, "roundtrip through {rendered:?} changed the statement");
}
