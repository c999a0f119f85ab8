//! Greedy chunk peeling.
//!
//! Rigging codes are written without separators (`EXLPT` is E + XL + PT), so
//! each chunk is consumed from the front: take the first code rule whose
//! literal prefixes the remaining text, emit its codes, advance, repeat.
//! Because the table lists longer codes first, `XXL` is never read as `XL` +
//! `L`.
//!
//! Peeling stops at the first position no rule matches. Whatever is left is
//! dropped. A chunk starting with a digit therefore produces nothing: `9MH`
//! and `25E` contribute no codes.

use super::trace::{ChunkTrace, PeelStep};
use crate::rules::RuleSet;

/// Split on anything that is not alphanumeric, skipping empty pieces.
pub(crate) fn chunks(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|c| !c.is_empty())
}

pub(crate) fn peel_chunk(chunk: &str, rules: &RuleSet) -> ChunkTrace {
    if rules.stopwords.iter().any(|word| *word == chunk) {
        log::trace!(target: "rigcode::engine", "skip stopword '{chunk}'");
        return ChunkTrace { text: chunk.to_string(), stopword: true, ..ChunkTrace::default() };
    }

    let mut steps = Vec::new();
    let mut rest = chunk;

    while !rest.is_empty() {
        let Some((rule, len)) = rules.codes.iter().find_map(|r| r.pattern.match_prefix(rest).map(|len| (r, len)))
        else {
            break;
        };

        log::trace!(target: "rigcode::engine", "peel '{}' from '{chunk}' via '{}'", &rest[..len], rule.name);
        steps.push(PeelStep { rule: rule.name, text: rest[..len].to_string(), codes: rule.produces });
        rest = &rest[len..];
    }

    let dropped = (!rest.is_empty()).then(|| rest.to_string());
    if let Some(dropped) = &dropped {
        log::trace!(target: "rigcode::engine", "drop unmatched '{dropped}' from '{chunk}'");
    }

    ChunkTrace { text: chunk.to_string(), steps, dropped, stopword: false }
}
