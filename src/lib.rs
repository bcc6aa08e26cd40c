#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod errors;
#[cfg(feature = "json")]
pub mod json;
pub mod sql;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
#[cfg(feature = "std")]
pub use errors::Error;
pub use sql::{InsertStatement, ParseError, Parser, SelectStatement, Statement};
