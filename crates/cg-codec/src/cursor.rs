//! Forward-only reader over an encoded string.

use crate::b64::{base64_len, decode_base64, to_standard};
use crate::error::{CodecError, Result};
use crate::text::TextEncoding;
use crate::word::{decode_word, MAX_WORD_WIDTH};

/// A read position into an encoded string.
///
/// Positions count characters, not bytes, so a token outside ASCII is
/// consumed as a single unit. A failed read leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0, position: 0 }
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Characters left to read.
    pub fn remaining(&self) -> usize {
        self.rest().chars().count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Unread tail of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Consume exactly `n` characters.
    pub fn take(&mut self, n: usize) -> Result<&'a str> {
        let rest = self.rest();
        let end = match rest.char_indices().nth(n) {
            Some((end, _)) => end,
            None => {
                let remaining = rest.chars().count();
                if remaining < n {
                    return Err(CodecError::IncompleteData { needed: n, remaining });
                }
                rest.len()
            }
        };
        self.offset += end;
        self.position += n;
        Ok(&rest[..end])
    }

    pub fn next_char(&mut self) -> Result<char> {
        let ch = self
            .rest()
            .chars()
            .next()
            .ok_or(CodecError::IncompleteData { needed: 1, remaining: 0 })?;
        self.offset += ch.len_utf8();
        self.position += 1;
        Ok(ch)
    }

    /// Read a `width`-digit word.
    pub fn word(&mut self, width: u32) -> Result<u64> {
        if width > MAX_WORD_WIDTH {
            return Err(CodecError::UnsupportedWidth { width });
        }
        let start = self.position;
        let digits = self.take(width as usize)?;
        match decode_word(digits, start) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.rewind_to(start, digits);
                Err(err)
            }
        }
    }

    /// Read `chars` base64 characters. With `safe` the URL-safe text is
    /// returned verbatim, otherwise it is rewritten as padded standard base64.
    pub fn base64(&mut self, chars: usize, safe: bool) -> Result<String> {
        let data = self.take(chars)?;
        Ok(if safe { data.to_string() } else { to_standard(data) })
    }

    /// Read `chars` base64 characters and decode them to raw bytes.
    pub fn chars(&mut self, chars: usize) -> Result<Vec<u8>> {
        let start = self.position;
        let data = self.take(chars)?;
        decode_base64(data).map_err(|err| {
            self.rewind_to(start, data);
            err
        })
    }

    /// Like [`Cursor::chars`], then decoded as text.
    pub fn chars_text(&mut self, chars: usize, encoding: TextEncoding) -> Result<String> {
        encoding.decode(&self.chars(chars)?)
    }

    /// Read the base64 characters carrying `n` raw bytes.
    pub fn bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.chars(base64_len(n))
    }

    pub fn text(&mut self, n: usize, encoding: TextEncoding) -> Result<String> {
        encoding.decode(&self.bytes(n)?)
    }

    /// Read a length-prefixed frame: a `width`-digit length, then the bytes.
    pub fn blob(&mut self, width: u32) -> Result<Vec<u8>> {
        let start = (self.offset, self.position);
        let len = self.word(width)?;
        self.bytes(len as usize).map_err(|err| {
            (self.offset, self.position) = start;
            err
        })
    }

    pub fn string(&mut self, encoding: TextEncoding, width: u32) -> Result<String> {
        encoding.decode(&self.blob(width)?)
    }

    fn rewind_to(&mut self, position: usize, consumed: &str) {
        self.offset -= consumed.len();
        self.position = position;
    }
}
