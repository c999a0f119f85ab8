use crate::{CodeRule, RigCode};

/// Chunks that are words in a listing rather than rigging codes. Peeling them
/// would misread their leading letters (`MERCURY` as M+E, `HP` as H).
pub const STOPWORDS: &[&str] = &["HP", "EFI", "MERCURY", "MARINE", "MOTOR", "ENGINE", "HORSEPOWER", "OUTBOARD"];

fn rule_electric_word() -> CodeRule {
    rule! { name: "electric (word)", pattern: lit!("ELECTRIC"), produces: &[RigCode::Electric] }
}

fn rule_electric_abbrev() -> CodeRule {
    rule! { name: "electric (ELEC)", pattern: lit!("ELEC"), produces: &[RigCode::Electric] }
}

fn rule_manual_word() -> CodeRule {
    rule! { name: "manual (word)", pattern: lit!("MANUAL"), produces: &[RigCode::Manual] }
}

fn rule_tiller_word() -> CodeRule {
    rule! { name: "tiller (word)", pattern: lit!("TILLER"), produces: &[RigCode::Tiller] }
}

fn rule_xxl() -> CodeRule {
    rule! { name: "shaft XXL", pattern: lit!("XXL"), produces: &[RigCode::ExtraExtraLongShaft] }
}

fn rule_xl() -> CodeRule {
    rule! { name: "shaft XL", pattern: lit!("XL"), produces: &[RigCode::ExtraLongShaft] }
}

fn rule_power_trim() -> CodeRule {
    rule! { name: "power trim", pattern: lit!("PT"), produces: &[RigCode::PowerTrim] }
}

fn rule_command_thrust() -> CodeRule {
    rule! { name: "command thrust", pattern: lit!("CT"), produces: &[RigCode::CommandThrust] }
}

fn rule_long() -> CodeRule {
    rule! { name: "shaft L", pattern: lit!("L"), produces: &[RigCode::LongShaft] }
}

fn rule_electric() -> CodeRule {
    rule! { name: "electric start", pattern: lit!("E"), produces: &[RigCode::Electric] }
}

fn rule_manual() -> CodeRule {
    rule! { name: "manual start", pattern: lit!("M"), produces: &[RigCode::Manual] }
}

fn rule_tiller() -> CodeRule {
    rule! { name: "tiller", pattern: lit!("H"), produces: &[RigCode::Tiller] }
}

/// Peeling table, most specific first.
pub fn get() -> Vec<CodeRule> {
    vec![
        rule_electric_word(),
        rule_electric_abbrev(),
        rule_manual_word(),
        rule_tiller_word(),
        rule_xxl(),
        rule_xl(),
        rule_power_trim(),
        rule_command_thrust(),
        rule_long(),
        rule_electric(),
        rule_manual(),
        rule_tiller(),
    ]
}
