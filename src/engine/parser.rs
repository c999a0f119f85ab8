//! Parser: runs the pipeline described in `engine.rs` over one input.

use super::dedup::dedup_first_seen;
use super::peel::{chunks, peel_chunk};
use super::resolve::resolve;
use super::trace::{ChunkTrace, RunTrace};
use super::trigger::TriggerInfo;
use crate::rules::RuleSet;
use crate::{Options, RigAttributes, RigCode};
use std::time::Instant;

/// Horsepower at and above which power trim is standard equipment.
pub(crate) const POWER_TRIM_STANDARD_HP: f64 = 40.0;

/// Parser over a single input.
///
/// Usage: `Parser::new(input, &rules).run(&options)`. The parser holds no
/// state between runs; two runs over the same input give identical results.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    normalized: String,
    rules: &'a RuleSet,
}

impl<'a> Parser<'a> {
    pub fn new(input: &str, rules: &'a RuleSet) -> Self {
        Parser { normalized: input.trim().to_uppercase(), rules }
    }

    pub fn run(&self, options: &Options) -> RigAttributes {
        self.run_traced(options).0
    }

    pub fn run_traced(&self, options: &Options) -> (RigAttributes, RunTrace) {
        let started = Instant::now();
        let trigger = TriggerInfo::scan(&self.normalized, self.rules, options.horsepower);

        let mut codes: Vec<RigCode> = Vec::new();
        if let Some(rule) = trigger.counter_rotation {
            log::trace!(target: "rigcode::engine", "counter rotation via '{}'", rule.name);
            codes.extend_from_slice(rule.produces);
        }
        if let Some(code) = trigger.shaft_suffix.filter(|c| !codes.contains(c)) {
            log::trace!(target: "rigcode::engine", "shaft suffix {code} after horsepower");
            codes.push(code);
        }

        let peeled: Vec<ChunkTrace> = chunks(&trigger.remaining).map(|c| peel_chunk(c, self.rules)).collect();
        codes.extend(peeled.iter().flat_map(ChunkTrace::codes));

        let inferred_power_trim = trigger.horsepower.is_some_and(|hp| hp >= POWER_TRIM_STANDARD_HP)
            && !codes.contains(&RigCode::PowerTrim);
        if inferred_power_trim {
            codes.push(RigCode::PowerTrim);
        }

        let attributes = resolve(&dedup_first_seen(&codes), trigger.counter_rotation.is_some());
        log::debug!(target: "rigcode::engine", "parsed '{}' -> {:?}", self.normalized, attributes.token_strs());

        let trace = RunTrace {
            normalized: self.normalized.clone(),
            horsepower: trigger.horsepower,
            counter_rotation: trigger.counter_rotation.map(|r| r.name),
            shaft_suffix: trigger.shaft_suffix,
            chunks: peeled,
            inferred_power_trim,
            elapsed: started.elapsed(),
        };

        (attributes, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlType, ShaftCode, StartType};

    const CORPUS: &[&str] = &[
        "9.9 EXLPT EFI",
        "25 ELHPT",
        "90 ELPT CT",
        "MLH",
        "9.9MH",
        "25E",
        "",
        "   ",
        "150XL",
        "250 CXL DTS",
        "225 ECXLPT",
        "300 CXXL Verado",
        "115 CL",
        "40 ELPT",
        "60 EH",
        "Mercury 15 MH FourStroke",
        "2.5 M",
        "ELECTRIC LONG TILLER",
        "xxl",
        "!!??",
        "ß 9.9 ELH",
    ];

    fn run(input: &str) -> RigAttributes {
        let rules = RuleSet::standard();
        Parser::new(input, &rules).run(&Options::default())
    }

    #[test]
    fn runs_are_deterministic() {
        let rules = RuleSet::standard();
        for input in CORPUS {
            let parser = Parser::new(input, &rules);
            assert_eq!(parser.run(&Options::default()), parser.run(&Options::default()), "input '{input}'");
        }
    }

    #[test]
    fn case_and_surrounding_whitespace_do_not_matter() {
        assert_eq!(run("  25 elhpt "), run("25 ELHPT"));
        assert_eq!(run("mlh"), run("MLH"));
    }

    #[test]
    fn shaft_code_and_inches_agree() {
        for input in CORPUS {
            let attrs = run(input);
            assert_eq!(attrs.shaft_inches, attrs.shaft_code.inches(), "input '{input}'");
            assert_eq!(attrs.tokens.first(), Some(&attrs.shaft_code.code()), "input '{input}'");
        }
    }

    #[test]
    fn tokens_never_repeat() {
        for input in CORPUS.iter().copied().chain(["EEPTPT", "LLXL", "ECXLPT EXLPT 225"]) {
            let attrs = run(input);
            let mut sorted = attrs.token_strs();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), attrs.tokens.len(), "input '{input}' -> {:?}", attrs.token_strs());
        }
    }

    #[test]
    fn forty_horsepower_and_up_has_power_trim() {
        for input in ["40 EL", "60 EH", "90 ELPT CT", "115 CL", "150XL", "300 CXXL Verado"] {
            assert!(run(input).has_power_trim, "input '{input}'");
        }
        assert!(!run("30 EL").has_power_trim);
    }

    #[test]
    fn missing_shaft_defaults_to_short() {
        for input in ["9.9MH", "25E", "", "60 EH", "2.5 M", "!!??"] {
            let attrs = run(input);
            assert_eq!(attrs.shaft_code, ShaftCode::S, "input '{input}'");
            assert_eq!(attrs.shaft_inches, 15, "input '{input}'");
        }
    }

    #[test]
    fn counter_rotating_compounds_expand() {
        let attrs = run("225 ECXLPT");
        assert!(attrs.is_counter_rotating);
        assert_eq!(attrs.token_strs(), vec!["XL", "E", "PT"]);

        let attrs = run("250 CXL DTS");
        assert!(attrs.is_counter_rotating);
        assert_eq!(attrs.token_strs(), vec!["XL", "PT"]);

        let attrs = run("300 CXXL Verado");
        assert_eq!(attrs.shaft_code, ShaftCode::XXL);
        assert!(attrs.is_counter_rotating);
    }

    #[test]
    fn shaft_suffix_after_large_horsepower() {
        let attrs = run("150XL");
        assert_eq!(attrs.token_strs(), vec!["XL", "PT"]);
        assert_eq!(attrs.start_type, StartType::Unknown);
        assert_eq!(attrs.control_type, ControlType::Remote);
    }

    #[test]
    fn explicit_horsepower_feeds_business_rules() {
        let rules = RuleSet::standard();
        let attrs = Parser::new("EL", &rules).run(&Options { horsepower: Some(75.0) });
        assert!(attrs.has_power_trim);
        assert_eq!(attrs.token_strs(), vec!["L", "E", "PT"]);
    }

    #[test]
    fn trace_records_each_step() {
        let rules = RuleSet::standard();
        let (_, trace) = Parser::new("60 ELDTS Mercury", &rules).run_traced(&Options::default());

        assert_eq!(trace.normalized, "60 ELDTS MERCURY");
        assert_eq!(trace.horsepower, Some(60.0));
        assert!(trace.inferred_power_trim);
        assert_eq!(trace.chunks.len(), 3);
        assert_eq!(trace.chunks[0].dropped.as_deref(), Some("60"));
        assert_eq!(trace.chunks[1].steps.iter().map(|s| s.rule).collect::<Vec<_>>(), vec!["electric start", "shaft L"]);
        assert_eq!(trace.chunks[1].dropped.as_deref(), Some("DTS"));
        assert!(trace.chunks[2].stopword);
    }
}
