//! Compact Grammar codec primitives.
//!
//! Everything here reads or writes the 64-character URL-safe alphabet:
//! 1. Words: fixed-width big-endian integers, six bits per character
//! 2. Base64: raw bytes, URL-safe and unpadded
//! 3. Blobs: a word-sized length followed by base64 bytes
//! 4. Cursor: the forward-only reader used while decoding

pub mod alphabet;
pub mod b64;
pub mod blob;
pub mod cursor;
pub mod error;
pub mod text;
pub mod word;

pub use alphabet::{is_url_safe, ALPHABET};
pub use b64::{base64_len, decode_base64, encode_base64, to_standard, to_url_safe};
pub use blob::{encode_blob, encode_text};
pub use cursor::Cursor;
pub use error::{CodecError, Result};
pub use text::TextEncoding;
pub use word::{decode_word, encode_word, word_capacity, MAX_WORD_WIDTH};
