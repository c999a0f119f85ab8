//! Rule tables.
//!
//! Every table is an ordered `Vec<Rule<_>>`. Lookups walk the table front to
//! back and stop at the first hit, so a rule must precede any shorter rule it
//! overlaps with (`XXL` before `XL` before `L`, `ELEC` before `E`).

pub(crate) mod codes;
pub(crate) mod counter_rotation;
pub(crate) mod family;

use crate::{CodeRule, MotorFamily, Rule};

/// The full set of tables used by one parser run.
#[derive(Debug)]
pub(crate) struct RuleSet {
    /// Sub-codes peeled off chunk prefixes.
    pub codes: Vec<CodeRule>,
    /// Whole-word compound counter-rotation codes.
    pub counter_rotation: Vec<CodeRule>,
    /// Product family names.
    pub families: Vec<Rule<MotorFamily>>,
    /// Chunks skipped entirely before peeling.
    pub stopwords: &'static [&'static str],
}

impl RuleSet {
    pub fn standard() -> Self {
        RuleSet {
            codes: codes::get(),
            counter_rotation: counter_rotation::get(),
            families: family::get(),
            stopwords: codes::STOPWORDS,
        }
    }
}
