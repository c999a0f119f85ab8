use crate::engine::{self, ChunkTrace, RunTrace};
use crate::rules::RuleSet;
use crate::{MotorFamily, RigAttributes, RigCode};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::standard);

/// Options that affect parsing.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Known horsepower for the motor, e.g. from inventory metadata. When set
    /// it replaces the horsepower read from the input for the power-trim and
    /// shaft-suffix rules.
    pub horsepower: Option<f64>,
}

/// What happened to one alphanumeric chunk of the input.
#[derive(Debug, Clone)]
pub struct ChunkSummary {
    pub text: String,
    /// Names of the rules that peeled this chunk, in order.
    pub rules: Vec<String>,
    /// Text each of those rules consumed.
    pub pieces: Vec<String>,
    pub codes: Vec<RigCode>,
    /// Trailing text no rule matched.
    pub dropped: Option<String>,
    pub stopword: bool,
}

/// Trace returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Trimmed, uppercased input the rules ran against.
    pub normalized: String,
    pub horsepower: Option<f64>,
    /// Name of the counter-rotation rule that fired.
    pub counter_rotation: Option<String>,
    /// Shaft read from a `150XL`-style horsepower suffix.
    pub shaft_suffix: Option<RigCode>,
    pub chunks: Vec<ChunkSummary>,
    /// PT was added because of horsepower, not read from the input.
    pub inferred_power_trim: bool,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub attributes: RigAttributes,
    pub details: ParseDetails,
}

/// Parse a rigging-code string with default [`Options`].
///
/// Never fails; unrecognized input gives [`RigAttributes::default`].
///
/// # Example
/// ```
/// use rigcode::{ControlType, ShaftCode, StartType, parse};
///
/// let rig = parse("25 ELHPT");
/// assert_eq!(rig.token_strs(), vec!["L", "E", "H", "PT"]);
/// assert_eq!(rig.shaft_code, ShaftCode::L);
/// assert_eq!(rig.start_type, StartType::Electric);
/// assert_eq!(rig.control_type, ControlType::Tiller);
/// ```
pub fn parse(input: &str) -> RigAttributes {
    parse_with(input, &Options::default())
}

pub fn parse_with(input: &str, options: &Options) -> RigAttributes {
    engine::Parser::new(input, &DEFAULT_RULES).run(options)
}

/// Parse `input` and also return a step-by-step trace, for debugging rule
/// tables. [`parse_with`] skips building the public trace.
pub fn parse_verbose_with(input: &str, options: &Options) -> ParseResultVerbose {
    let (attributes, trace) = engine::Parser::new(input, &DEFAULT_RULES).run_traced(options);
    ParseResultVerbose { attributes, details: trace_to_details(trace) }
}

/// Detect the product family named anywhere in `text`.
///
/// More specific families win: `"ProKicker FourStroke"` is a ProKicker.
pub fn detect_family(text: &str) -> Option<MotorFamily> {
    DEFAULT_RULES.families.iter().find(|rule| rule.pattern.find(text).is_some()).map(|rule| rule.produces)
}

/// Horsepower as the parser sees it: the first number with a two- or
/// three-digit integer part. `"9.9 ELH"` yields `None`.
pub fn extract_horsepower(text: &str) -> Option<f64> {
    engine::extract_horsepower(text)
}

/// Whether `text` carries an `EFI` marker as a separate word.
pub fn mentions_efi(text: &str) -> bool {
    regex!(r"(?i)\bEFI\b").is_match(text)
}

fn trace_to_details(trace: RunTrace) -> ParseDetails {
    ParseDetails {
        normalized: trace.normalized,
        horsepower: trace.horsepower,
        counter_rotation: trace.counter_rotation.map(str::to_string),
        shaft_suffix: trace.shaft_suffix,
        chunks: trace.chunks.iter().map(chunk_to_summary).collect(),
        inferred_power_trim: trace.inferred_power_trim,
        elapsed: trace.elapsed,
    }
}

fn chunk_to_summary(chunk: &ChunkTrace) -> ChunkSummary {
    ChunkSummary {
        text: chunk.text.clone(),
        rules: chunk.steps.iter().map(|s| s.rule.to_string()).collect(),
        pieces: chunk.steps.iter().map(|s| s.text.clone()).collect(),
        codes: chunk.codes().collect(),
        dropped: chunk.dropped.clone(),
        stopword: chunk.stopword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlType, ShaftCode, StartType};

    struct Case {
        input: &'static str,
        tokens: &'static [&'static str],
        shaft: ShaftCode,
        start: StartType,
        control: ControlType,
        power_trim: bool,
        command_thrust: bool,
    }

    #[test]
    fn reference_rigging_examples() {
        let cases = [
            Case {
                input: "9.9 EXLPT EFI",
                tokens: &["XL", "E", "PT"],
                shaft: ShaftCode::XL,
                start: StartType::Electric,
                control: ControlType::Remote,
                power_trim: true,
                command_thrust: false,
            },
            Case {
                input: "25 ELHPT",
                tokens: &["L", "E", "H", "PT"],
                shaft: ShaftCode::L,
                start: StartType::Electric,
                control: ControlType::Tiller,
                power_trim: true,
                command_thrust: false,
            },
            Case {
                input: "90 ELPT CT",
                tokens: &["L", "E", "PT", "CT"],
                shaft: ShaftCode::L,
                start: StartType::Electric,
                control: ControlType::Remote,
                power_trim: true,
                command_thrust: true,
            },
            Case {
                input: "MLH",
                tokens: &["L", "M", "H"],
                shaft: ShaftCode::L,
                start: StartType::Manual,
                control: ControlType::Tiller,
                power_trim: false,
                command_thrust: false,
            },
            // Known quirk: the digit-led chunk swallows the trailing codes.
            Case {
                input: "9.9MH",
                tokens: &["S"],
                shaft: ShaftCode::S,
                start: StartType::Unknown,
                control: ControlType::Remote,
                power_trim: false,
                command_thrust: false,
            },
            Case {
                input: "25E",
                tokens: &["S"],
                shaft: ShaftCode::S,
                start: StartType::Unknown,
                control: ControlType::Remote,
                power_trim: false,
                command_thrust: false,
            },
        ];

        for case in cases {
            let rig = parse(case.input);
            assert_eq!(rig.token_strs(), case.tokens, "tokens for '{}'", case.input);
            assert_eq!(rig.shaft_code, case.shaft, "shaft for '{}'", case.input);
            assert_eq!(rig.shaft_inches, case.shaft.inches(), "inches for '{}'", case.input);
            assert_eq!(rig.start_type, case.start, "start for '{}'", case.input);
            assert_eq!(rig.control_type, case.control, "control for '{}'", case.input);
            assert_eq!(rig.has_power_trim, case.power_trim, "power trim for '{}'", case.input);
            assert_eq!(rig.has_command_thrust, case.command_thrust, "command thrust for '{}'", case.input);
            assert!(!rig.is_counter_rotating, "counter rotation for '{}'", case.input);
        }
    }

    #[test]
    fn unrecognized_input_degrades_to_defaults() {
        for input in ["", "   ", "???", "Outboard", "2024", "DTS"] {
            assert_eq!(parse(input), RigAttributes::default(), "input '{input}'");
        }
    }

    #[test]
    fn parse_verbose_matches_parse() {
        let opts = Options { horsepower: Some(60.0) };
        let res = parse_verbose_with("EH Mercury", &opts);

        assert_eq!(res.attributes, parse_with("EH Mercury", &opts));
        assert_eq!(res.details.horsepower, Some(60.0));
        assert!(res.details.inferred_power_trim);
        assert_eq!(res.details.chunks[0].rules, vec!["electric start", "tiller"]);
        assert_eq!(res.details.chunks[0].pieces, vec!["E", "H"]);
        assert_eq!(res.details.chunks[0].codes, vec![RigCode::Electric, RigCode::Tiller]);
        assert!(res.details.chunks[1].stopword);
    }

    #[test]
    fn family_and_efi_detection() {
        assert_eq!(detect_family("9.9 ELH FourStroke"), Some(MotorFamily::FourStroke));
        assert_eq!(detect_family("ProKicker 9.9 ELHPT FourStroke"), Some(MotorFamily::ProKicker));
        assert_eq!(detect_family("25 ELHPT"), None);

        assert!(mentions_efi("9.9 EXLPT EFI"));
        assert!(mentions_efi("efi 25"));
        assert!(!mentions_efi("9.9 EXLPT"));
        assert!(!mentions_efi("EFIX"));
    }
}
