use cg_codec::CodecError;
use thiserror::Error;

/// Raised while building a grammar. Registration that fails leaves the
/// builder exactly as it was.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("unsupported token format {token:?} in context {context}")]
    MalformedToken { context: String, token: String },
    #[error("decode already defined for token {} in context {context}", describe_token(.token))]
    DuplicateToken { context: String, token: Option<char> },
    #[error("incomplete decode definition in context {context}")]
    IncompleteDecode { context: String },
    #[error("no decoders specified in context {context}")]
    NoDecoders { context: String },
    #[error("invalid match pattern in context {context}: {source}")]
    InvalidPattern {
        context: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("unknown context {0}")]
    UnknownContext(String),
    #[error("no matching definition in {context}")]
    NoMatchingDefinition { context: String },
    #[error("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unknown context {0}")]
    UnknownContext(String),
    #[error("unknown token {token:?} for context {context}")]
    UnknownToken { token: char, context: String },
    #[error("incomplete data: needed {needed} characters, {remaining} remaining")]
    IncompleteData { needed: usize, remaining: usize },
    #[error("{remaining} characters left after decoding")]
    TrailingData { remaining: usize },
    #[error("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error(transparent)]
    Codec(CodecError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CodecError> for DecodeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::IncompleteData { needed, remaining } => {
                DecodeError::IncompleteData { needed, remaining }
            }
            other => DecodeError::Codec(other),
        }
    }
}

/// Why an encode routine produced no payload.
///
/// `Abstain` hands the value on to the next rule in the context; `Failed`
/// stops encoding altogether. Only the dispatch loop ever sees `Abstain`.
#[derive(Debug)]
pub enum Refusal {
    Abstain,
    Failed(EncodeError),
}

impl From<EncodeError> for Refusal {
    fn from(err: EncodeError) -> Self {
        Refusal::Failed(err)
    }
}

impl From<CodecError> for Refusal {
    fn from(err: CodecError) -> Self {
        Refusal::Failed(EncodeError::Codec(err))
    }
}

impl From<anyhow::Error> for Refusal {
    fn from(err: anyhow::Error) -> Self {
        Refusal::Failed(EncodeError::Other(err))
    }
}

pub(crate) fn describe_token(token: &Option<char>) -> String {
    match token {
        Some(t) => format!("{t:?}"),
        None => "<none>".to_string(),
    }
}
