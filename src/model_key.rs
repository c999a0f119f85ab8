//! Canonical model keys.
//!
//! A model key groups motors that are the same configuration, e.g. to share
//! product images across listings. A manufacturer model number from the
//! [`ModelCatalog`] is the key whenever one can be resolved. Otherwise the key
//! is synthesized from family, horsepower, EFI and rig tokens, so every
//! configuration still gets a stable key:
//!
//! ```text
//! model_number known to catalog ──▶ model_number (as given)
//! display_name in catalog       ──▶ catalog model number
//! otherwise                     ──▶ FAMILY-<hp>HP-EFI-<tokens..>-MODEL
//! ```

use crate::{ModelCatalog, RigAttributes};

const SEPARATOR: &str = "-";

/// Inputs for one key.
#[derive(Debug, Clone, Copy)]
pub struct KeyRequest<'a> {
    pub family: Option<&'a str>,
    /// Omitted from the synthesized key unless positive.
    pub horsepower: f64,
    pub has_efi: bool,
    pub rig: &'a RigAttributes,
    pub display_name: Option<&'a str>,
    pub model_number: Option<&'a str>,
}

impl<'a> KeyRequest<'a> {
    pub fn new(rig: &'a RigAttributes) -> Self {
        KeyRequest { family: None, horsepower: 0.0, has_efi: false, rig, display_name: None, model_number: None }
    }

    pub fn family(mut self, family: &'a str) -> Self {
        self.family = Some(family);
        self
    }

    pub fn horsepower(mut self, horsepower: f64) -> Self {
        self.horsepower = horsepower;
        self
    }

    pub fn efi(mut self, has_efi: bool) -> Self {
        self.has_efi = has_efi;
        self
    }

    pub fn display_name(mut self, display_name: &'a str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn model_number(mut self, model_number: &'a str) -> Self {
        self.model_number = Some(model_number);
        self
    }

    /// Resolve the key. Never fails; with nothing to go on the result is the
    /// rig tokens alone (or empty).
    pub fn build(&self, catalog: &ModelCatalog) -> String {
        if let Some(model_number) = self.model_number.filter(|m| catalog.contains_model_number(m)) {
            log::debug!("model key: explicit model number {model_number:?}");
            return model_number.to_string();
        }

        let from_table = self.display_name.and_then(|name| catalog.model_number_for(name).map(|m| (name, m)));
        if let Some((name, model_number)) = from_table {
            log::debug!("model key: {name:?} resolved to {model_number:?}");
            return model_number.to_string();
        }

        let key = self.synthesize();
        log::debug!("model key: synthesized {key:?}");
        key
    }

    fn synthesize(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(family) = self.family {
            parts.push(family.trim().to_uppercase());
        }
        if self.horsepower > 0.0 {
            parts.push(format!("{}HP", format_horsepower(self.horsepower)));
        }
        if self.has_efi {
            parts.push("EFI".to_string());
        }
        parts.extend(self.rig.tokens.iter().map(|t| t.as_str().to_string()));
        if let Some(model_number) = self.model_number {
            parts.push(model_number.trim().to_uppercase());
        }

        collapse_separators(&parts.join(SEPARATOR))
    }
}

/// Build a model key; see [`KeyRequest::build`].
///
/// # Example
/// ```
/// use rigcode::{ModelCatalog, build_key, parse};
///
/// let catalog = ModelCatalog::builtin().unwrap();
/// let rig = parse("90 ELPT CT");
/// assert_eq!(build_key(&catalog, Some("ProXS"), 90.0, true, &rig, None, None), "PROXS-90HP-EFI-L-E-PT-CT");
/// ```
pub fn build_key(
    catalog: &ModelCatalog,
    family: Option<&str>,
    horsepower: f64,
    has_efi: bool,
    rig: &RigAttributes,
    display_name: Option<&str>,
    model_number: Option<&str>,
) -> String {
    KeyRequest { family, horsepower, has_efi, rig, display_name, model_number }.build(catalog)
}

/// Horsepower as written in keys: `25`, `9.9`.
pub fn format_horsepower(horsepower: f64) -> String {
    if horsepower.fract() == 0.0 { format!("{}", horsepower as i64) } else { format!("{horsepower}") }
}

fn collapse_separators(key: &str) -> String {
    key.split(SEPARATOR).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModelMapping, parse};

    fn catalog() -> ModelCatalog {
        ModelCatalog::from_entries([
            ModelMapping { description: "9.9 ELH FourStroke".into(), model_number: "1A10302LK".into() },
            ModelMapping { description: "90 ELPT CT ProXS".into(), model_number: "1F904532D".into() },
        ])
        .unwrap()
    }

    #[test]
    fn synthesized_reference_keys() {
        let catalog = catalog();
        let cases: Vec<(&str, &str, f64, bool, &str)> = vec![
            ("FOURSTROKE-9.9HP-EFI-XL-E-PT", "FourStroke", 9.9, true, "9.9 EXLPT EFI"),
            ("FOURSTROKE-25HP-EFI-L-E-H-PT", "FourStroke", 25.0, true, "25 ELHPT"),
            ("PROXS-90HP-EFI-L-E-PT-CT", "ProXS", 90.0, true, "90 ELPT CT"),
            ("FOURSTROKE-5HP-L-M-H", "FourStroke", 5.0, false, "MLH"),
            ("FOURSTROKE-9.9HP-S", "FourStroke", 9.9, false, "9.9MH"),
        ];

        for (expected, family, hp, efi, input) in cases {
            let rig = parse(input);
            assert_eq!(build_key(&catalog, Some(family), hp, efi, &rig, None, None), expected, "input '{input}'");
        }
    }

    #[test]
    fn display_name_in_table_wins() {
        let catalog = catalog();
        let rig = parse("9.9 ELH");

        let key = build_key(&catalog, Some("FourStroke"), 9.9, true, &rig, Some("9.9 ELH FourStroke"), None);
        assert_eq!(key, "1A10302LK");

        let key = build_key(&catalog, None, 0.0, false, &rig, Some("9.9  elh fourstroke"), None);
        assert_eq!(key, "1A10302LK");
    }

    #[test]
    fn known_model_number_is_returned_as_given() {
        let catalog = catalog();
        let rig = parse("90 ELPT CT");

        let key = build_key(&catalog, Some("ProXS"), 90.0, true, &rig, Some("9.9 ELH FourStroke"), Some("1F904532D"));
        assert_eq!(key, "1F904532D");
    }

    #[test]
    fn unknown_model_number_is_appended() {
        let catalog = catalog();
        let rig = parse("25 ELPT");

        let key = build_key(&catalog, Some("FourStroke"), 25.0, true, &rig, Some("25 ELPT Mystery"), Some("x25-new"));
        assert_eq!(key, "FOURSTROKE-25HP-EFI-L-E-PT-X25-NEW");
    }

    #[test]
    fn separators_collapse_and_trim() {
        let catalog = catalog();
        let rig = parse("MLH");

        let key = KeyRequest::new(&rig).family("-Four--Stroke-").model_number("--").build(&catalog);
        assert_eq!(key, "FOUR-STROKE-L-M-H");
    }

    #[test]
    fn sparse_inputs_still_yield_a_key() {
        let catalog = ModelCatalog::default();
        let rig = parse("");

        assert_eq!(build_key(&catalog, None, 0.0, false, &rig, None, None), "S");
        assert_eq!(build_key(&catalog, Some(""), -3.0, false, &rig, Some(""), Some("")), "S");
        assert_eq!(KeyRequest::new(&rig).horsepower(115.0).efi(true).build(&catalog), "115HP-EFI-S");
    }

    #[test]
    fn horsepower_formatting() {
        assert_eq!(format_horsepower(25.0), "25");
        assert_eq!(format_horsepower(9.9), "9.9");
        assert_eq!(format_horsepower(2.5), "2.5");
        assert_eq!(format_horsepower(300.0), "300");
    }
}
