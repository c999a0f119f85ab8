use crate::{MotorFamily, Rule};

fn rule_pro_kicker() -> Rule<MotorFamily> {
    rule! { name: "ProKicker", pattern: re!(r"(?i)\bPRO[\s-]*KICKER\b"), produces: MotorFamily::ProKicker }
}

fn rule_pro_xs() -> Rule<MotorFamily> {
    rule! { name: "ProXS", pattern: re!(r"(?i)\bPRO[\s-]*XS\b"), produces: MotorFamily::ProXS }
}

fn rule_sea_pro() -> Rule<MotorFamily> {
    rule! { name: "SeaPro", pattern: re!(r"(?i)\bSEA[\s-]*PRO\b"), produces: MotorFamily::SeaPro }
}

fn rule_verado() -> Rule<MotorFamily> {
    rule! { name: "Verado", pattern: re!(r"(?i)\bVERADO\b"), produces: MotorFamily::Verado }
}

fn rule_racing() -> Rule<MotorFamily> {
    rule! { name: "Racing", pattern: re!(r"(?i)\bRACING\b"), produces: MotorFamily::Racing }
}

fn rule_avator() -> Rule<MotorFamily> {
    rule! { name: "Avator", pattern: re!(r"(?i)\bAVATOR\b"), produces: MotorFamily::Avator }
}

fn rule_four_stroke() -> Rule<MotorFamily> {
    rule! {
        name: "FourStroke",
        pattern: re!(r"(?i)\b(?:FOUR|4)[\s-]*STROKE\b"),
        produces: MotorFamily::FourStroke,
    }
}

/// Family table. Kicker and sport variants are also FourStrokes, so the
/// generic FourStroke rule goes last.
pub fn get() -> Vec<Rule<MotorFamily>> {
    vec![
        rule_pro_kicker(),
        rule_pro_xs(),
        rule_sea_pro(),
        rule_verado(),
        rule_racing(),
        rule_avator(),
        rule_four_stroke(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<MotorFamily> {
        get().into_iter().find(|r| r.pattern.find(text).is_some()).map(|r| r.produces)
    }

    #[test]
    fn family_examples_matching() {
        let cases: Vec<(Option<MotorFamily>, &str)> = vec![
            (Some(MotorFamily::FourStroke), "9.9 ELH FourStroke"),
            (Some(MotorFamily::FourStroke), "Mercury 25 ELPT 4-Stroke"),
            (Some(MotorFamily::FourStroke), "FOUR STROKE 60 ELPT"),
            (Some(MotorFamily::ProKicker), "9.9 ELHPT ProKicker FourStroke"),
            (Some(MotorFamily::ProKicker), "Pro Kicker 15"),
            (Some(MotorFamily::ProXS), "Pro XS 115 ELPT"),
            (Some(MotorFamily::ProXS), "90 ELPT CT ProXS"),
            (Some(MotorFamily::SeaPro), "SeaPro 150 XL"),
            (Some(MotorFamily::SeaPro), "Sea-Pro 60"),
            (Some(MotorFamily::Verado), "Verado 300 CXXL"),
            (Some(MotorFamily::Racing), "Mercury Racing 450R"),
            (Some(MotorFamily::Avator), "Avator 7.5e"),
            (None, "25 ELHPT"),
            (None, "professional"),
        ];

        for (expected, input) in cases {
            assert_eq!(detect(input), expected, "input '{input}'");
        }
    }
}
