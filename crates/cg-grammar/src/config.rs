//! Grammar-wide defaults.

use cg_codec::MAX_WORD_WIDTH;
use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Digits used by the width-less `word` helpers.
    pub word_width: u32,
    /// Length-prefix digits used by the width-less `blob` and `string` helpers.
    pub blob_width: u32,
    /// Deepest nested encode/decode allowed; `None` leaves depth to the rule author.
    pub max_depth: Option<usize>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            word_width: 1,
            blob_width: 2,
            max_depth: None,
        }
    }
}

impl GrammarConfig {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DefinitionError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        for (name, width) in [("word_width", self.word_width), ("blob_width", self.blob_width)] {
            if width == 0 || width > MAX_WORD_WIDTH {
                return Err(DefinitionError::InvalidConfig(format!(
                    "{name} must be between 1 and {MAX_WORD_WIDTH}, got {width}"
                )));
            }
        }
        Ok(())
    }
}
