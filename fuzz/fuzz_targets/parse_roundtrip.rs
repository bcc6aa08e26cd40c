//! Parser fuzzer.
//!
//! Feeds arbitrary text to the parser. Rejected input must fail without
//! panicking; accepted input must parse deterministically and survive a
//! render-and-reparse roundtrip.

use honggfuzz::fuzz;
use mysql2json::testing::test_parse_roundtrip;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(sql) = core::str::from_utf8(data) {
                test_parse_roundtrip(sql);
            }
        });
    }
}
