//! The 64-character URL-safe alphabet shared by words and base64 payloads.

pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Character for a 6-bit digit. Only the low six bits are used.
pub fn digit_char(digit: u64) -> char {
    ALPHABET[(digit & 0x3f) as usize] as char
}

/// 6-bit value of an alphabet character.
pub fn digit_value(ch: char) -> Option<u64> {
    match ch {
        'A'..='Z' => Some(ch as u64 - 'A' as u64),
        'a'..='z' => Some(ch as u64 - 'a' as u64 + 26),
        '0'..='9' => Some(ch as u64 - '0' as u64 + 52),
        '-' => Some(62),
        '_' => Some(63),
        _ => None,
    }
}

/// True when every character of `s` belongs to the alphabet.
pub fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| digit_value(c).is_some())
}
