//! Text <-> byte conversions for length-prefixed strings.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Latin1,
    Ascii,
    Hex,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Utf16Le => "utf16le",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Hex => "hex",
        }
    }

    /// Convert `text` to bytes. Characters the encoding cannot represent are
    /// an error, never silently truncated.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Latin1 => narrow(self, text, 0xff),
            TextEncoding::Ascii => narrow(self, text, 0x7f),
            TextEncoding::Hex => hex::decode(text).map_err(|e| CodecError::Unencodable {
                encoding: self,
                reason: e.to_string(),
            }),
        }
    }

    /// Convert bytes back to text.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::InvalidText {
                encoding: self,
                reason: e.to_string(),
            }),
            TextEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(CodecError::InvalidText {
                        encoding: self,
                        reason: format!("odd byte length {}", bytes.len()),
                    });
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|e| CodecError::InvalidText {
                    encoding: self,
                    reason: e.to_string(),
                })
            }
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(i) => Err(CodecError::InvalidText {
                    encoding: self,
                    reason: format!("byte 0x{:02x} at offset {i}", bytes[i]),
                }),
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
            },
            TextEncoding::Hex => Ok(hex::encode(bytes)),
        }
    }
}

fn narrow(encoding: TextEncoding, text: &str, max: u32) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            if (c as u32) <= max {
                Ok(c as u8)
            } else {
                Err(CodecError::Unencodable {
                    encoding,
                    reason: format!("character {c:?} is out of range"),
                })
            }
        })
        .collect()
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(TextEncoding::Utf16Le),
            "latin1" | "binary" => Ok(TextEncoding::Latin1),
            "ascii" => Ok(TextEncoding::Ascii),
            "hex" => Ok(TextEncoding::Hex),
            _ => Err(CodecError::UnknownEncoding(s.to_string())),
        }
    }
}
