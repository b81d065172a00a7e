//! Grammar productions: what a rule matches and how it encodes and decodes.

use std::fmt;
use std::sync::Arc;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::{DecodeError, DefinitionError, Refusal};
use crate::reader::Reader;
use crate::writer::Writer;

pub type EncodeFn =
    Arc<dyn Fn(&Writer<'_>, &Value, Option<&Captures<'_>>) -> Result<String, Refusal> + Send + Sync>;
pub type DecodeFn = Arc<dyn Fn(&mut Reader<'_>) -> Result<Value, DecodeError> + Send + Sync>;
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Condition a value must satisfy before a rule's encode routine runs.
#[derive(Clone)]
pub enum MatchKind {
    /// Always matches.
    None,
    /// Strict equality.
    Exact(Value),
    /// Matches string values only; captures are handed to the encode routine.
    Pattern(Regex),
    Predicate(PredicateFn),
}

pub(crate) enum Verdict<'d> {
    Miss,
    Hit,
    Captured(Captures<'d>),
}

impl MatchKind {
    pub(crate) fn evaluate<'d>(&self, data: &'d Value) -> Verdict<'d> {
        match self {
            MatchKind::None => Verdict::Hit,
            MatchKind::Exact(expected) if expected == data => Verdict::Hit,
            MatchKind::Exact(_) => Verdict::Miss,
            MatchKind::Pattern(re) => match data {
                Value::String(s) => re.captures(s).map_or(Verdict::Miss, Verdict::Captured),
                _ => Verdict::Miss,
            },
            MatchKind::Predicate(f) if f(data) => Verdict::Hit,
            MatchKind::Predicate(_) => Verdict::Miss,
        }
    }
}

impl fmt::Debug for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::None => f.write_str("None"),
            MatchKind::Exact(v) => f.debug_tuple("Exact").field(v).finish(),
            MatchKind::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            MatchKind::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Clone)]
pub(crate) enum PendingMatch {
    Ready(MatchKind),
    Source(String),
}

impl PendingMatch {
    pub(crate) fn compile(self, context: &str) -> Result<MatchKind, DefinitionError> {
        match self {
            PendingMatch::Ready(kind) => Ok(kind),
            PendingMatch::Source(src) => Regex::new(&src).map(MatchKind::Pattern).map_err(|source| {
                DefinitionError::InvalidPattern {
                    context: context.to_string(),
                    source,
                }
            }),
        }
    }
}

#[derive(Clone)]
pub(crate) enum DecodeSpec {
    Absent,
    Routine(DecodeFn),
    ByToken(Vec<(String, DecodeFn)>),
}

/// An unregistered rule. Tokens and patterns are validated when the rule
/// is defined into a context.
#[derive(Clone)]
pub struct Rule {
    pub(crate) token: Option<String>,
    pub(crate) matcher: PendingMatch,
    pub(crate) encode: Option<EncodeFn>,
    pub(crate) decode: DecodeSpec,
}

impl Rule {
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// A rule that encodes `value` as its bare token and decodes the token
    /// back to `value`.
    pub fn literal(token: &str, value: impl Into<Value>) -> Rule {
        Rule::builder().token(token).exact(value).build()
    }
}

/// Box a decode closure, fixing its signature for use in a decode map.
pub fn decode_fn<F>(f: F) -> DecodeFn
where
    F: Fn(&mut Reader<'_>) -> Result<Value, DecodeError> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub struct RuleBuilder {
    rule: Rule,
}

impl Default for RuleBuilder {
    fn default() -> Self {
        Self {
            rule: Rule {
                token: None,
                matcher: PendingMatch::Ready(MatchKind::None),
                encode: None,
                decode: DecodeSpec::Absent,
            },
        }
    }
}

impl RuleBuilder {
    pub fn token(mut self, token: &str) -> Self {
        self.rule.token = Some(token.to_string());
        self
    }

    pub fn exact(mut self, value: impl Into<Value>) -> Self {
        self.rule.matcher = PendingMatch::Ready(MatchKind::Exact(value.into()));
        self
    }

    /// Regex source, compiled when the rule is defined.
    pub fn pattern(mut self, source: &str) -> Self {
        self.rule.matcher = PendingMatch::Source(source.to_string());
        self
    }

    pub fn regex(mut self, re: Regex) -> Self {
        self.rule.matcher = PendingMatch::Ready(MatchKind::Pattern(re));
        self
    }

    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.rule.matcher = PendingMatch::Ready(MatchKind::Predicate(Arc::new(f)));
        self
    }

    pub fn encode<F>(mut self, f: F) -> Self
    where
        F: Fn(&Writer<'_>, &Value, Option<&Captures<'_>>) -> Result<String, Refusal>
            + Send
            + Sync
            + 'static,
    {
        self.rule.encode = Some(Arc::new(f));
        self
    }

    /// Decode routine registered under the rule's own token.
    pub fn decode<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Reader<'_>) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        self.rule.decode = DecodeSpec::Routine(decode_fn(f));
        self
    }

    /// Decode routine registered under `token`. Repeat to cover every token
    /// the rule's encoder can emit.
    pub fn decode_token<F>(mut self, token: &str, f: F) -> Self
    where
        F: Fn(&mut Reader<'_>) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        let entry = (token.to_string(), decode_fn(f));
        match &mut self.rule.decode {
            DecodeSpec::ByToken(entries) => entries.push(entry),
            other => *other = DecodeSpec::ByToken(vec![entry]),
        }
        self
    }

    /// Replace the decode routines with a token-keyed map. The map must not
    /// be empty.
    pub fn decode_map<I, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (T, DecodeFn)>,
        T: Into<String>,
    {
        let entries = entries.into_iter().map(|(token, f)| (token.into(), f)).collect();
        self.rule.decode = DecodeSpec::ByToken(entries);
        self
    }

    pub fn build(self) -> Rule {
        self.rule
    }
}
