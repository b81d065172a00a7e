use thiserror::Error;

use crate::text::TextEncoding;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("cannot encode {value} in {width} base64 characters")]
    WordOutOfRange { value: u64, width: u32 },
    #[error("word width {width} exceeds the supported maximum of {}", crate::word::MAX_WORD_WIDTH)]
    UnsupportedWidth { width: u32 },
    #[error("incomplete data: needed {needed} characters, {remaining} remaining")]
    IncompleteData { needed: usize, remaining: usize },
    #[error("invalid base64 digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("cannot encode text as {encoding}: {reason}")]
    Unencodable { encoding: TextEncoding, reason: String },
    #[error("invalid {encoding} text: {reason}")]
    InvalidText { encoding: TextEncoding, reason: String },
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
