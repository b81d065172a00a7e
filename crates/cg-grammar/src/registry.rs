//! Context registry: a mutable builder and the immutable grammar it produces.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::GrammarConfig;
use crate::error::{describe_token, DefinitionError};
use crate::rule::{decode_fn, DecodeFn, DecodeSpec, EncodeFn, MatchKind, Rule};

/// A registered rule. Its decode routines live in the owning context's
/// token table.
pub(crate) struct Definition {
    pub(crate) token: Option<char>,
    pub(crate) matcher: MatchKind,
    pub(crate) encode: Option<EncodeFn>,
}

/// One named grammar: rules in priority order plus the token table.
#[derive(Default)]
pub(crate) struct Context {
    pub(crate) rules: Vec<Definition>,
    pub(crate) decoders: HashMap<Option<char>, DecodeFn>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = self.decoders.keys().map(describe_token).collect();
        tokens.sort();
        f.debug_struct("Context")
            .field("rules", &self.rules.len())
            .field("tokens", &tokens)
            .finish()
    }
}

fn parse_token(context: &str, token: &str) -> Result<char, DefinitionError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DefinitionError::MalformedToken {
            context: context.to_string(),
            token: token.to_string(),
        }),
    }
}

/// Accumulates rules per context. Call [`GrammarBuilder::build`] to freeze
/// it into a [`Grammar`].
#[derive(Debug)]
pub struct GrammarBuilder {
    initial: String,
    config: GrammarConfig,
    contexts: HashMap<String, Context>,
}

impl GrammarBuilder {
    /// `initial` is the context used when encode/decode are called without one.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            config: GrammarConfig::default(),
            contexts: HashMap::new(),
        }
    }

    pub fn with_config(initial: impl Into<String>, config: GrammarConfig) -> Result<Self, DefinitionError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(initial)
        })
    }

    /// Append `rule` to `context`, creating the context on first use.
    ///
    /// Registration order is encode priority. The rule's decode routines are
    /// keyed by token: a single routine goes under the rule's token, a decode
    /// map registers one routine per entry, and an exact-match rule with a
    /// token and no routine decodes to its literal.
    pub fn define(&mut self, context: &str, rule: Rule) -> Result<&mut Self, DefinitionError> {
        let Rule {
            token,
            matcher,
            encode,
            decode,
        } = rule;

        let token = token.as_deref().map(|t| parse_token(context, t)).transpose()?;
        let matcher = matcher.compile(context)?;

        let entries: Vec<(Option<char>, DecodeFn)> = match decode {
            DecodeSpec::Routine(f) => vec![(token, f)],
            DecodeSpec::ByToken(map) => {
                if map.is_empty() {
                    return Err(DefinitionError::NoDecoders {
                        context: context.to_string(),
                    });
                }
                map.into_iter()
                    .map(|(t, f)| Ok((Some(parse_token(context, &t)?), f)))
                    .collect::<Result<_, DefinitionError>>()?
            }
            DecodeSpec::Absent => match (&matcher, token) {
                (MatchKind::Exact(value), Some(_)) => {
                    let value = value.clone();
                    vec![(token, decode_fn(move |_| Ok(value.clone())))]
                }
                _ => {
                    return Err(DefinitionError::IncompleteDecode {
                        context: context.to_string(),
                    })
                }
            },
        };

        let existing = self.contexts.get(context);
        for (i, (t, _)) in entries.iter().enumerate() {
            let taken = existing.is_some_and(|ctx| ctx.decoders.contains_key(t))
                || entries[..i].iter().any(|(prev, _)| prev == t);
            if taken {
                return Err(DefinitionError::DuplicateToken {
                    context: context.to_string(),
                    token: *t,
                });
            }
        }

        let ctx = self.contexts.entry(context.to_string()).or_default();
        ctx.decoders.extend(entries);
        ctx.rules.push(Definition {
            token,
            matcher,
            encode,
        });
        Ok(self)
    }

    /// Define each rule in order.
    pub fn use_rules<I>(&mut self, context: &str, rules: I) -> Result<&mut Self, DefinitionError>
    where
        I: IntoIterator<Item = Rule>,
    {
        for rule in rules {
            self.define(context, rule)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Grammar {
        debug!(
            "Built grammar with {} contexts (initial={})",
            self.contexts.len(),
            self.initial
        );
        Grammar {
            initial: self.initial,
            config: self.config,
            contexts: self.contexts,
        }
    }
}

/// An immutable set of contexts. Encoding and decoding only borrow it, so
/// one grammar can serve any number of threads.
#[derive(Debug)]
pub struct Grammar {
    pub(crate) initial: String,
    pub(crate) config: GrammarConfig,
    pub(crate) contexts: HashMap<String, Context>,
}

impl Grammar {
    pub fn builder(initial: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(initial)
    }

    pub fn initial_context(&self) -> &str {
        &self.initial
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Context names, sorted.
    pub fn contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn rule_count(&self, context: &str) -> Option<usize> {
        self.contexts.get(context).map(|ctx| ctx.rules.len())
    }

    /// Tokens with a decode routine in `context`, sorted.
    pub fn tokens(&self, context: &str) -> Option<Vec<char>> {
        self.contexts.get(context).map(|ctx| {
            let mut tokens: Vec<char> = ctx.decoders.keys().filter_map(|t| *t).collect();
            tokens.sort_unstable();
            tokens
        })
    }

    pub(crate) fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }
}
