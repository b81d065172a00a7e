//! Length-prefixed byte frames.

use crate::b64::encode_base64;
use crate::error::Result;
use crate::text::TextEncoding;
use crate::word::encode_word;

/// `word(len, width) + base64(bytes)`. Fails when the length does not fit
/// in `width` digits.
pub fn encode_blob(bytes: &[u8], width: u32) -> Result<String> {
    let mut out = encode_word(bytes.len() as u64, width)?;
    out.push_str(&encode_base64(bytes));
    Ok(out)
}

/// Blob of `text` converted to bytes under `encoding`.
pub fn encode_text(text: &str, encoding: TextEncoding, width: u32) -> Result<String> {
    encode_blob(&encoding.encode(text)?, width)
}
