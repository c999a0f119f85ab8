//! Run traces.
//!
//! A trace records what each step of a run did: which compound matched, which
//! rule peeled which piece of each chunk, what got dropped. `Parser::run`
//! builds one alongside the attributes; the public API only hands it out from
//! `parse_verbose_with`.

use crate::RigCode;
use std::time::Duration;

/// One successful peel: `rule` consumed `text` from the front of a chunk.
#[derive(Debug, Clone)]
pub struct PeelStep {
    pub rule: &'static str,
    pub text: String,
    pub codes: &'static [RigCode],
}

/// What happened to one alphanumeric chunk of the input.
#[derive(Debug, Clone, Default)]
pub struct ChunkTrace {
    pub text: String,
    pub steps: Vec<PeelStep>,
    /// Unmatched remainder, dropped silently.
    pub dropped: Option<String>,
    /// The whole chunk was a stopword and was not peeled.
    pub stopword: bool,
}

impl ChunkTrace {
    /// Codes produced by this chunk, in peel order.
    pub fn codes(&self) -> impl Iterator<Item = RigCode> + '_ {
        self.steps.iter().flat_map(|s| s.codes.iter().copied())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunTrace {
    /// Trimmed, uppercased input.
    pub normalized: String,
    pub horsepower: Option<f64>,
    /// Name of the counter-rotation rule that fired.
    pub counter_rotation: Option<&'static str>,
    pub shaft_suffix: Option<RigCode>,
    pub chunks: Vec<ChunkTrace>,
    /// PT was added by the horsepower rule rather than read from the input.
    pub inferred_power_trim: bool,
    pub elapsed: Duration,
}
