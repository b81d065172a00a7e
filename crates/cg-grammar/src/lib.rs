//! Compact Grammar: rule-driven encoding of values into URL-safe strings.
//!
//! A grammar is a set of named contexts. Each context holds rules in
//! priority order; a rule matches a value, emits a one-character token and
//! a payload built from the primitives in `cg-codec`. Decoding reads the
//! token and runs the routine registered for it.
//!
//! ```
//! use cg_grammar::{Grammar, Rule, TextEncoding};
//! use serde_json::json;
//!
//! let mut builder = Grammar::builder("id");
//! builder
//!     .define("id", Rule::literal("n", json!(null)))?
//!     .define(
//!         "id",
//!         Rule::builder()
//!             .token("z")
//!             .predicate(|v| v.is_string())
//!             .encode(|w, v, _| Ok(w.string(v.as_str().unwrap_or_default(), TextEncoding::Utf8)?))
//!             .decode(|r| Ok(r.string(TextEncoding::Utf8)?.into()))
//!             .build(),
//!     )?;
//! let grammar = builder.build();
//!
//! let encoded = grammar.encode(&json!("hi"))?;
//! assert_eq!(encoded, "zACaGk");
//! assert_eq!(grammar.decode(&encoded)?, json!("hi"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod reader;
pub mod registry;
pub mod rule;
pub mod writer;

pub use cg_codec::{CodecError, TextEncoding};
pub use config::GrammarConfig;
pub use error::{DecodeError, DefinitionError, EncodeError, Refusal};
pub use reader::Reader;
pub use registry::{Grammar, GrammarBuilder};
pub use rule::{decode_fn, DecodeFn, EncodeFn, MatchKind, Rule, RuleBuilder};
pub use writer::Writer;
