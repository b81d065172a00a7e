//! Capabilities handed to decode routines.

use cg_codec::{Cursor, TextEncoding};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::registry::Grammar;

/// Decode-side helper over the single cursor shared by a whole decode call
/// tree. Reads are strictly left to right.
pub struct Reader<'a> {
    grammar: &'a Grammar,
    cursor: Cursor<'a>,
    depth: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(grammar: &'a Grammar, input: &'a str) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(input),
            depth: 0,
        }
    }

    pub fn word(&mut self) -> Result<u64, DecodeError> {
        let width = self.grammar.config.word_width;
        self.word_with(width)
    }

    pub fn word_with(&mut self, width: u32) -> Result<u64, DecodeError> {
        Ok(self.cursor.word(width)?)
    }

    pub fn char(&mut self) -> Result<char, DecodeError> {
        Ok(self.cursor.next_char()?)
    }

    /// Raw bytes carried by the next `ceil(4n/3)` characters.
    pub fn bytes(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        Ok(self.cursor.bytes(n)?)
    }

    /// Like [`Reader::bytes`], decoded as text.
    pub fn bytes_text(&mut self, n: usize, encoding: TextEncoding) -> Result<String, DecodeError> {
        Ok(self.cursor.text(n, encoding)?)
    }

    /// Raw bytes carried by the next `n` characters.
    pub fn chars(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        Ok(self.cursor.chars(n)?)
    }

    pub fn chars_text(&mut self, n: usize, encoding: TextEncoding) -> Result<String, DecodeError> {
        Ok(self.cursor.chars_text(n, encoding)?)
    }

    pub fn blob(&mut self) -> Result<Vec<u8>, DecodeError> {
        let width = self.grammar.config.blob_width;
        self.blob_with(width)
    }

    pub fn blob_with(&mut self, width: u32) -> Result<Vec<u8>, DecodeError> {
        Ok(self.cursor.blob(width)?)
    }

    pub fn string(&mut self, encoding: TextEncoding) -> Result<String, DecodeError> {
        let width = self.grammar.config.blob_width;
        self.string_with(encoding, width)
    }

    pub fn string_with(&mut self, encoding: TextEncoding, width: u32) -> Result<String, DecodeError> {
        Ok(self.cursor.string(encoding, width)?)
    }

    /// The next `n` characters verbatim (`safe`) or as padded standard base64.
    pub fn base64(&mut self, n: usize, safe: bool) -> Result<String, DecodeError> {
        Ok(self.cursor.base64(n, safe)?)
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Decode one nested value in the grammar's initial context.
    pub fn decode(&mut self) -> Result<Value, DecodeError> {
        let grammar = self.grammar;
        self.decode_in(grammar.initial_context())
    }

    /// Read a token and run the routine `context` registered for it.
    pub fn decode_in(&mut self, context: &str) -> Result<Value, DecodeError> {
        let grammar = self.grammar;
        let ctx = grammar
            .context(context)
            .ok_or_else(|| DecodeError::UnknownContext(context.to_string()))?;
        if let Some(limit) = grammar.config.max_depth {
            if self.depth > limit {
                return Err(DecodeError::DepthExceeded { limit });
            }
        }

        let token = self.cursor.next_char()?;
        let Some(routine) = ctx.decoders.get(&Some(token)) else {
            debug!("Unknown token {token:?} for context {context}");
            return Err(DecodeError::UnknownToken {
                token,
                context: context.to_string(),
            });
        };
        trace!("Dispatching token {token:?} in context {context}");

        self.depth += 1;
        let result = routine(&mut *self);
        self.depth -= 1;
        result
    }

    /// `count` sequential nested decodes in `context`.
    pub fn decode_many_in(&mut self, context: &str, count: usize) -> Result<Vec<Value>, DecodeError> {
        (0..count).map(|_| self.decode_in(context)).collect()
    }
}
