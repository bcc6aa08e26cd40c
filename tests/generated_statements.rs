//! Property tests over generated SELECT and INSERT statements.
//!
//! Statements are built from `arbitrary::Unstructured` over bytes drawn from
//! a seeded `StdRng`, so every run is reproducible. Each generated statement
//! is rendered with randomly chosen whitespace and keyword casing, parsed, and
//! compared against the structure it was generated from.

use arbitrary::{Result, Unstructured};
use mysql2json::sql::{Parser, ValueMap};
use mysql2json::Statement;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const SEEDS: u64 = 256;

/// Deterministic byte stream for one test case.
fn seed_bytes(seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..512).map(|_| rng.random_range(0..=u8::MAX)).collect()
}

fn identifier(u: &mut Unstructured<'_>) -> Result<String> {
    const START: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
    const CONT: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_0123456789";

    loop {
        let mut ident = String::new();
        ident.push(char::from(*u.choose(START)?));
        for _ in 0..u.int_in_range(0..=10)? {
            ident.push(char::from(*u.choose(CONT)?));
        }
        if mysql2json::sql::keyword(&ident).is_none() {
            return Ok(ident);
        }
    }
}

fn whitespace(u: &mut Unstructured<'_>) -> Result<&'static str> {
    u.choose(&["", " ", "  ", "\t", "\n", " \r\n\t "]).copied()
}

fn required_whitespace(u: &mut Unstructured<'_>) -> Result<&'static str> {
    u.choose(&[" ", "  ", "\t", "\n", " \r\n\t "]).copied()
}

fn keyword(u: &mut Unstructured<'_>, word: &str) -> Result<String> {
    Ok(if u.arbitrary()? {
        word.to_lowercase()
    } else {
        word.to_string()
    })
}

fn generate_select(u: &mut Unstructured<'_>) -> Result<(String, Vec<String>, String)> {
    let mut fields = Vec::new();
    for _ in 0..u.int_in_range(1..=6)? {
        fields.push(if u.ratio(1, 5)? {
            "*".to_string()
        } else {
            identifier(u)?
        });
    }
    let table = identifier(u)?;

    let mut sql = String::new();
    sql.push_str(whitespace(u)?);
    sql.push_str(&keyword(u, "SELECT")?);
    sql.push_str(required_whitespace(u)?);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            sql.push_str(whitespace(u)?);
            sql.push(',');
            sql.push_str(whitespace(u)?);
        }
        sql.push_str(field);
    }
    sql.push_str(required_whitespace(u)?);
    sql.push_str(&keyword(u, "FROM")?);
    sql.push_str(required_whitespace(u)?);
    sql.push_str(&table);
    Ok((sql, fields, table))
}

fn generate_insert(u: &mut Unstructured<'_>) -> Result<(String, Vec<(String, Vec<String>)>, String)> {
    let table = identifier(u)?;
    let mut tuples = Vec::new();
    for _ in 0..u.int_in_range(1..=5)? {
        let key = identifier(u)?;
        let mut row = Vec::new();
        for _ in 0..u.int_in_range(0..=4)? {
            row.push(identifier(u)?);
        }
        tuples.push((key, row));
    }

    let backticks: bool = u.arbitrary()?;
    let mut sql = String::new();
    sql.push_str(&keyword(u, "INSERT")?);
    sql.push_str(required_whitespace(u)?);
    sql.push_str(&keyword(u, "INTO")?);
    sql.push_str(required_whitespace(u)?);
    if backticks {
        sql.push('`');
    }
    sql.push_str(&table);
    if backticks {
        sql.push('`');
    }
    sql.push_str(required_whitespace(u)?);
    sql.push_str(&keyword(u, "VALUES")?);
    sql.push_str(whitespace(u)?);
    for (i, (key, row)) in tuples.iter().enumerate() {
        if i > 0 {
            sql.push(',');
            sql.push_str(whitespace(u)?);
        }
        sql.push_str("('");
        sql.push_str(key);
        sql.push('\'');
        for value in row {
            sql.push(',');
            sql.push_str(whitespace(u)?);
            sql.push('\'');
            sql.push_str(value);
            sql.push('\'');
        }
        sql.push(')');
    }
    if u.arbitrary()? {
        sql.push(';');
    }
    Ok((sql, tuples, table))
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_generated_select_statements_parse() {
    for seed in 0..SEEDS {
        let bytes = seed_bytes(seed);
        let mut u = Unstructured::new(&bytes);
        let (sql, fields, table) = generate_select(&mut u).unwrap();

        let Statement::Select(stmt) = Parser::new(&sql).parse().unwrap() else {
            panic!("Expected Select for {sql:?}");
        };
        assert_eq!(stmt.fields, fields, "input: {sql:?}");
        assert_eq!(stmt.table_name, table, "input: {sql:?}");
    }
}

#[test]
fn test_generated_insert_statements_parse() {
    for seed in 0..SEEDS {
        let bytes = seed_bytes(seed);
        let mut u = Unstructured::new(&bytes);
        let (sql, tuples, table) = generate_insert(&mut u).unwrap();

        let mut expected = ValueMap::default();
        for (key, row) in tuples {
            expected.insert(key, row);
        }

        let Statement::Insert(stmt) = Parser::new(&sql).parse().unwrap() else {
            panic!("Expected Insert for {sql:?}");
        };
        assert_eq!(stmt.table_name, table, "input: {sql:?}");
        assert_eq!(stmt.values, expected, "input: {sql:?}");
        assert!(
            stmt.values.keys().eq(expected.keys()),
            "key order differs for {sql:?}"
        );
    }
}

#[test]
fn test_generated_statements_roundtrip_through_display() {
    for seed in 0..SEEDS {
        let bytes = seed_bytes(seed);
        let mut u = Unstructured::new(&bytes);
        let sql = if u.arbitrary().unwrap() {
            generate_select(&mut u).unwrap().0
        } else {
            generate_insert(&mut u).unwrap().0
        };

        let stmt = Parser::new(&sql).parse().unwrap();
        let rendered = stmt.to_string();
        assert_eq!(
            Parser::new(&rendered).parse().unwrap(),
            stmt,
            "input: {sql:?}, rendered: {rendered:?}"
        );
    }
}
