//! Dispatch engine: priority-ordered encoding and token-keyed decoding.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{DecodeError, EncodeError, Refusal};
use crate::reader::Reader;
use crate::registry::Grammar;
use crate::rule::Verdict;
use crate::writer::Writer;

impl Grammar {
    /// Encode `data` in the initial context.
    pub fn encode(&self, data: &Value) -> Result<String, EncodeError> {
        self.encode_at(&self.initial, data, 0)
    }

    /// Encode `data` with the first rule of `context` that matches it and
    /// does not abstain.
    pub fn encode_in(&self, context: &str, data: &Value) -> Result<String, EncodeError> {
        self.encode_at(context, data, 0)
    }

    pub(crate) fn encode_at(&self, context: &str, data: &Value, depth: usize) -> Result<String, EncodeError> {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(EncodeError::DepthExceeded { limit });
            }
        }
        let ctx = self
            .context(context)
            .ok_or_else(|| EncodeError::UnknownContext(context.to_string()))?;
        let writer = Writer::new(self, depth);

        for (index, rule) in ctx.rules.iter().enumerate() {
            let captures = match rule.matcher.evaluate(data) {
                Verdict::Miss => continue,
                Verdict::Hit => None,
                Verdict::Captured(caps) => Some(caps),
            };

            let payload = match &rule.encode {
                None => String::new(),
                Some(encode) => match encode(&writer, data, captures.as_ref()) {
                    Ok(payload) => payload,
                    Err(Refusal::Abstain) => {
                        trace!("Rule {index} in {context} abstained");
                        continue;
                    }
                    Err(Refusal::Failed(err)) => return Err(err),
                },
            };

            trace!("Rule {index} in {context} encoded {} characters", payload.len());
            return Ok(match rule.token {
                Some(token) => {
                    let mut out = String::with_capacity(payload.len() + token.len_utf8());
                    out.push(token);
                    out.push_str(&payload);
                    out
                }
                None => payload,
            });
        }

        debug!("No rule in {context} accepted the value");
        Err(EncodeError::NoMatchingDefinition {
            context: context.to_string(),
        })
    }

    /// Decode `input` in the initial context. Characters left over once the
    /// top-level routine returns are ignored.
    pub fn decode(&self, input: &str) -> Result<Value, DecodeError> {
        self.decode_in(&self.initial, input)
    }

    pub fn decode_in(&self, context: &str, input: &str) -> Result<Value, DecodeError> {
        Reader::new(self, input).decode_in(context)
    }

    /// Like [`Grammar::decode`], but leftover input is an error.
    pub fn decode_strict(&self, input: &str) -> Result<Value, DecodeError> {
        self.decode_strict_in(&self.initial, input)
    }

    pub fn decode_strict_in(&self, context: &str, input: &str) -> Result<Value, DecodeError> {
        let mut reader = Reader::new(self, input);
        let value = reader.decode_in(context)?;
        match reader.remaining() {
            0 => Ok(value),
            remaining => Err(DecodeError::TrailingData { remaining }),
        }
    }
}
