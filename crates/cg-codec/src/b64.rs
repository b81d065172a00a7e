//! URL-safe base64 for raw byte payloads.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::Result;

/// URL-safe, unpadded base64 of `bytes`.
pub fn encode_base64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe, unpadded base64.
pub fn decode_base64(chars: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(chars)?)
}

/// Rewrite standard base64 into the URL-safe alphabet and drop padding.
pub fn to_url_safe(standard: &str) -> String {
    standard
        .chars()
        .filter_map(|c| match c {
            '+' => Some('-'),
            '/' => Some('_'),
            '=' => None,
            other => Some(other),
        })
        .collect()
}

/// Rewrite URL-safe base64 into standard base64, restoring `=` padding so
/// the length is a multiple of four.
pub fn to_standard(url_safe: &str) -> String {
    let mut out: String = url_safe
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let pad = (4 - url_safe.chars().count() % 4) % 4;
    out.extend(std::iter::repeat('=').take(pad));
    out
}

/// Characters needed to carry `n` raw bytes: `ceil(4n / 3)`.
pub fn base64_len(n: usize) -> usize {
    (n * 4 + 2) / 3
}
