//! Capabilities handed to encode routines.

use cg_codec::{encode_base64, encode_blob, encode_text, encode_word, to_url_safe, CodecError, TextEncoding};
use serde_json::Value;

use crate::error::{EncodeError, Refusal};
use crate::registry::Grammar;

/// Encode-side helper: primitive writers plus recursion into the grammar.
/// Every method returns a fragment; the routine concatenates them.
pub struct Writer<'a> {
    grammar: &'a Grammar,
    depth: usize,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(grammar: &'a Grammar, depth: usize) -> Self {
        Self { grammar, depth }
    }

    /// Abstain from encoding unless `condition` holds; the next rule in the
    /// context gets a chance instead.
    pub fn assert(&self, condition: bool) -> Result<(), Refusal> {
        if condition {
            Ok(())
        } else {
            Err(Refusal::Abstain)
        }
    }

    pub fn base64(&self, bytes: &[u8]) -> String {
        encode_base64(bytes)
    }

    /// Rewrite standard base64 into the URL-safe, unpadded form.
    pub fn normalize_base64(&self, standard: &str) -> String {
        to_url_safe(standard)
    }

    pub fn word(&self, value: u64) -> Result<String, CodecError> {
        encode_word(value, self.grammar.config.word_width)
    }

    pub fn word_with(&self, value: u64, width: u32) -> Result<String, CodecError> {
        encode_word(value, width)
    }

    pub fn blob(&self, bytes: &[u8]) -> Result<String, CodecError> {
        encode_blob(bytes, self.grammar.config.blob_width)
    }

    pub fn blob_with(&self, bytes: &[u8], width: u32) -> Result<String, CodecError> {
        encode_blob(bytes, width)
    }

    pub fn string(&self, text: &str, encoding: TextEncoding) -> Result<String, CodecError> {
        encode_text(text, encoding, self.grammar.config.blob_width)
    }

    pub fn string_with(&self, text: &str, encoding: TextEncoding, width: u32) -> Result<String, CodecError> {
        encode_text(text, encoding, width)
    }

    /// Encode `data` in the grammar's initial context.
    pub fn encode(&self, data: &Value) -> Result<String, EncodeError> {
        self.grammar.encode_at(self.grammar.initial_context(), data, self.depth + 1)
    }

    pub fn encode_in(&self, context: &str, data: &Value) -> Result<String, EncodeError> {
        self.grammar.encode_at(context, data, self.depth + 1)
    }
}
