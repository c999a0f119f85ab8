//! Whole-input scans that run before chunk peeling.
//!
//! Peeling only ever looks at the start of each alphanumeric chunk, so a few
//! facts have to be read off the full input first:
//!
//! - **Horsepower**: drives the power-trim and shaft-suffix business rules.
//!   It is never part of the output.
//! - **Counter rotation**: compound codes (`CXL`, `ECXLPT`, ...) that peeling
//!   would split wrongly. The matched span is blanked out of the text handed
//!   to the peeler.
//! - **Shaft suffix**: large motors are often listed as `150XL`, with the shaft
//!   glued to the horsepower. That chunk starts with a digit and would be
//!   dropped by the peeler.

use crate::rules::RuleSet;
use crate::{CodeRule, RigCode};

/// Horsepower at and above which the shaft suffix scan runs.
pub(crate) const SHAFT_SUFFIX_MIN_HP: f64 = 115.0;

/// Result of scanning the normalized input.
#[derive(Debug, Clone)]
pub(crate) struct TriggerInfo<'a> {
    pub horsepower: Option<f64>,
    pub counter_rotation: Option<&'a CodeRule>,
    pub shaft_suffix: Option<RigCode>,
    /// Input with the counter-rotation span blanked; this is what gets peeled.
    pub remaining: String,
}

impl<'a> TriggerInfo<'a> {
    /// Scan `normalized` (already trimmed and uppercased). A caller-supplied
    /// `horsepower` replaces the one found in the text.
    pub fn scan(normalized: &str, rules: &'a RuleSet, horsepower: Option<f64>) -> Self {
        let horsepower = horsepower.or_else(|| extract_horsepower(normalized));

        let mut remaining = normalized.to_string();
        let mut counter_rotation = None;
        for rule in &rules.counter_rotation {
            if let Some(span) = rule.pattern.find(normalized) {
                remaining.replace_range(span.clone(), &" ".repeat(span.len()));
                counter_rotation = Some(rule);
                break;
            }
        }

        let shaft_suffix = match horsepower {
            Some(hp) if hp >= SHAFT_SUFFIX_MIN_HP => shaft_suffix(normalized, hp),
            _ => None,
        };

        TriggerInfo { horsepower, counter_rotation, shaft_suffix, remaining }
    }
}

/// First number in `text` whose integer part has two or three digits,
/// optionally followed by `HP`.
///
/// `9.9` has a one-digit integer part and yields nothing; so do four-digit
/// numbers such as model years.
pub(crate) fn extract_horsepower(text: &str) -> Option<f64> {
    regex!(r"(?i)\b(\d+)(?:\.\d+)?(?:\s*HP)?")
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find(|m| (2..=3).contains(&m.as_str().len()))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(f64::from)
}

fn shaft_suffix(text: &str, hp: f64) -> Option<RigCode> {
    regex!(r"(?i)\b(\d{2,3})(?:HP)?(XXL|XL|L)")
        .captures_iter(text)
        .filter(|caps| caps[1].parse::<f64>().is_ok_and(|n| n == hp.trunc()))
        .find_map(|caps| match &caps[2] {
            "XXL" => Some(RigCode::ExtraExtraLongShaft),
            "XL" => Some(RigCode::ExtraLongShaft),
            "L" => Some(RigCode::LongShaft),
            _ => None,
        })
}
