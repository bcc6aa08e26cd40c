//! Streaming character input from [`std::io::Read`] sources.

use std::io::{self, BufReader, Bytes, Read};

use super::parser::{Parser, Statement};
use crate::errors::Error;

/// Lazily decodes UTF-8 characters from a reader.
///
/// Each maximal invalid subpart decodes to one U+FFFD, and a byte that
/// breaks a sequence starts the next character. The first I/O error ends the
/// stream and is kept until [`ReadChars::take_error`] collects it.
pub struct ReadChars<R> {
    bytes: Bytes<BufReader<R>>,
    pending: Option<u8>,
    error: Option<io::Error>,
}

impl<R: Read> ReadChars<R> {
    /// Wrap a reader in a buffered UTF-8 decoder.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            pending: None,
            error: None,
        }
    }

    /// Take the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.take() {
            return Some(byte);
        }
        if self.error.is_some() {
            return None;
        }
        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

impl<R: Read> Iterator for ReadChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let first = self.next_byte()?;
        // Sequence width and the allowed range of the second byte.
        let (width, low, high) = match first {
            0x00..=0x7F => return Some(char::from(first)),
            0xC2..=0xDF => (2, 0x80, 0xBF),
            0xE0 => (3, 0xA0, 0xBF),
            0xED => (3, 0x80, 0x9F),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF),
            0xF0 => (4, 0x90, 0xBF),
            0xF4 => (4, 0x80, 0x8F),
            0xF1..=0xF3 => (4, 0x80, 0xBF),
            _ => return Some(char::REPLACEMENT_CHARACTER),
        };

        let mut code = u32::from(first & (0x7F >> width));
        for i in 1..width {
            let Some(byte) = self.next_byte() else {
                return Some(char::REPLACEMENT_CHARACTER);
            };
            let allowed = if i == 1 { low..=high } else { 0x80..=0xBF };
            if !allowed.contains(&byte) {
                self.pending = Some(byte);
                return Some(char::REPLACEMENT_CHARACTER);
            }
            code = (code << 6) | u32::from(byte & 0x3F);
        }

        Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl<R: Read> Parser<ReadChars<R>> {
    /// Create a new parser reading from `reader`.
    ///
    /// The reader is buffered internally, so it may be read past the end of
    /// the statement.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::from_chars(ReadChars::new(reader))
    }

    /// Parse a single statement from the reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading failed, otherwise [`Error::Parse`] if
    /// the statement is malformed.
    pub fn parse_stream(&mut self) -> Result<Statement, Error> {
        let result = self.parse();
        if let Some(err) = self.scanner_mut().source_mut().take_error() {
            return Err(Error::Io(err));
        }
        Ok(result?)
    }
}
