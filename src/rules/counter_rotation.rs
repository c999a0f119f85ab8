//! Compound counter-rotation codes.
//!
//! These are matched as whole words before general peeling. Peeling would
//! otherwise split them into meaningless pieces (`CXL` has no leading code at
//! all, `ECXLPT` would stop after `E`).

use crate::{CodeRule, RigCode};

fn rule_ecxlpt() -> CodeRule {
    rule! {
        name: "counter-rotating ECXLPT",
        pattern: re!(r"(?i)\bECXLPT\b"),
        produces: &[RigCode::Electric, RigCode::ExtraLongShaft, RigCode::PowerTrim],
    }
}

fn rule_ecxl() -> CodeRule {
    rule! {
        name: "counter-rotating ECXL",
        pattern: re!(r"(?i)\bECXL\b"),
        produces: &[RigCode::Electric, RigCode::ExtraLongShaft],
    }
}

fn rule_cxxl() -> CodeRule {
    rule! {
        name: "counter-rotating CXXL",
        pattern: re!(r"(?i)\bCXXL\b"),
        produces: &[RigCode::ExtraExtraLongShaft],
    }
}

fn rule_cxl() -> CodeRule {
    rule! {
        name: "counter-rotating CXL",
        pattern: re!(r"(?i)\bCXL\b"),
        produces: &[RigCode::ExtraLongShaft],
    }
}

fn rule_cl() -> CodeRule {
    rule! {
        name: "counter-rotating CL",
        pattern: re!(r"(?i)\bCL\b"),
        produces: &[RigCode::LongShaft],
    }
}

pub fn get() -> Vec<CodeRule> {
    vec![rule_ecxlpt(), rule_ecxl(), rule_cxxl(), rule_cxl(), rule_cl()]
}
