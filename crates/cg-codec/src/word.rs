//! Fixed-width, big-endian, 6-bit-per-digit integer packing.

use crate::alphabet::{digit_char, digit_value};
use crate::error::{CodecError, Result};

/// Widest word whose capacity still fits in a `u64` (64^10 = 2^60).
pub const MAX_WORD_WIDTH: u32 = 10;

/// Number of distinct values a word of `width` digits can hold.
pub fn word_capacity(width: u32) -> Result<u64> {
    if width > MAX_WORD_WIDTH {
        return Err(CodecError::UnsupportedWidth { width });
    }
    Ok(1u64 << (6 * width))
}

/// Pack `value` into exactly `width` alphabet digits, most significant first.
pub fn encode_word(value: u64, width: u32) -> Result<String> {
    if value >= word_capacity(width)? {
        return Err(CodecError::WordOutOfRange { value, width });
    }
    let mut digits = Vec::with_capacity(width as usize);
    let mut rest = value;
    for _ in 0..width {
        digits.push(digit_char(rest));
        rest >>= 6;
    }
    Ok(digits.into_iter().rev().collect())
}

/// Inverse of [`encode_word`]. `offset` is the character position of the
/// first digit in the enclosing input, used only for error reporting.
pub fn decode_word(digits: &str, offset: usize) -> Result<u64> {
    let mut value = 0u64;
    for (i, ch) in digits.chars().enumerate() {
        let digit = digit_value(ch).ok_or(CodecError::InvalidDigit {
            ch,
            position: offset + i,
        })?;
        value = (value << 6) | digit;
    }
    Ok(value)
}
