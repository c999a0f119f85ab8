//! Attribute derivation.
//!
//! Turns the de-duplicated code list into [`RigAttributes`]. The derived
//! shaft always leads the output tokens, so an input without shaft codes
//! still yields `["S", ...]`.

use crate::{ControlType, RigAttributes, RigCode, ShaftCode, StartType};

bitflags::bitflags! {
    /// Which codes were seen, independent of order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct RigFeatures: u16 {
        const LONG             = 1 << 0;
        const EXTRA_LONG       = 1 << 1;
        const EXTRA_EXTRA_LONG = 1 << 2;
        const ELECTRIC         = 1 << 3;
        const MANUAL           = 1 << 4;
        const TILLER           = 1 << 5;
        const POWER_TRIM       = 1 << 6;
        const COMMAND_THRUST   = 1 << 7;
    }
}

impl RigFeatures {
    fn of(code: RigCode) -> Self {
        match code {
            RigCode::ShortShaft => RigFeatures::empty(),
            RigCode::LongShaft => RigFeatures::LONG,
            RigCode::ExtraLongShaft => RigFeatures::EXTRA_LONG,
            RigCode::ExtraExtraLongShaft => RigFeatures::EXTRA_EXTRA_LONG,
            RigCode::Electric => RigFeatures::ELECTRIC,
            RigCode::Manual => RigFeatures::MANUAL,
            RigCode::Tiller => RigFeatures::TILLER,
            RigCode::PowerTrim => RigFeatures::POWER_TRIM,
            RigCode::CommandThrust => RigFeatures::COMMAND_THRUST,
        }
    }

    pub(crate) fn from_codes(codes: &[RigCode]) -> Self {
        codes.iter().fold(RigFeatures::empty(), |acc, &code| acc | RigFeatures::of(code))
    }

    /// Longest shaft present wins; no shaft code means short shaft.
    fn shaft(self) -> ShaftCode {
        if self.contains(RigFeatures::EXTRA_EXTRA_LONG) {
            ShaftCode::XXL
        } else if self.contains(RigFeatures::EXTRA_LONG) {
            ShaftCode::XL
        } else if self.contains(RigFeatures::LONG) {
            ShaftCode::L
        } else {
            ShaftCode::S
        }
    }

    fn start_type(self) -> StartType {
        if self.contains(RigFeatures::ELECTRIC) {
            StartType::Electric
        } else if self.contains(RigFeatures::MANUAL) {
            StartType::Manual
        } else {
            StartType::Unknown
        }
    }

    fn control_type(self) -> ControlType {
        if self.contains(RigFeatures::TILLER) { ControlType::Tiller } else { ControlType::Remote }
    }
}

/// `codes` must already be de-duplicated.
pub(crate) fn resolve(codes: &[RigCode], counter_rotating: bool) -> RigAttributes {
    let features = RigFeatures::from_codes(codes);
    let shaft_code = features.shaft();

    let tokens = std::iter::once(shaft_code.code()).chain(codes.iter().copied().filter(|c| !c.is_shaft())).collect();

    RigAttributes {
        tokens,
        shaft_code,
        shaft_inches: shaft_code.inches(),
        start_type: features.start_type(),
        control_type: features.control_type(),
        has_power_trim: features.contains(RigFeatures::POWER_TRIM),
        has_command_thrust: features.contains(RigFeatures::COMMAND_THRUST),
        is_counter_rotating: counter_rotating,
    }
}
