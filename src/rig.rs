use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical rigging code.
///
/// These are the only values that ever appear in [`RigAttributes::tokens`].
/// They serialize to the literal manufacturer codes (`"XL"`, `"PT"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RigCode {
    #[serde(rename = "S")]
    ShortShaft,
    #[serde(rename = "L")]
    LongShaft,
    #[serde(rename = "XL")]
    ExtraLongShaft,
    #[serde(rename = "XXL")]
    ExtraExtraLongShaft,
    #[serde(rename = "E")]
    Electric,
    #[serde(rename = "M")]
    Manual,
    #[serde(rename = "H")]
    Tiller,
    #[serde(rename = "PT")]
    PowerTrim,
    #[serde(rename = "CT")]
    CommandThrust,
}

impl RigCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RigCode::ShortShaft => "S",
            RigCode::LongShaft => "L",
            RigCode::ExtraLongShaft => "XL",
            RigCode::ExtraExtraLongShaft => "XXL",
            RigCode::Electric => "E",
            RigCode::Manual => "M",
            RigCode::Tiller => "H",
            RigCode::PowerTrim => "PT",
            RigCode::CommandThrust => "CT",
        }
    }

    /// The shaft this code designates, if it is a shaft code.
    pub fn shaft(self) -> Option<ShaftCode> {
        match self {
            RigCode::ShortShaft => Some(ShaftCode::S),
            RigCode::LongShaft => Some(ShaftCode::L),
            RigCode::ExtraLongShaft => Some(ShaftCode::XL),
            RigCode::ExtraExtraLongShaft => Some(ShaftCode::XXL),
            _ => None,
        }
    }

    pub fn is_shaft(self) -> bool {
        self.shaft().is_some()
    }
}

impl fmt::Display for RigCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shaft length designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum ShaftCode {
    #[default]
    S,
    L,
    XL,
    XXL,
}

impl ShaftCode {
    /// Nominal transom height in inches.
    pub fn inches(self) -> u8 {
        match self {
            ShaftCode::S => 15,
            ShaftCode::L => 20,
            ShaftCode::XL => 25,
            ShaftCode::XXL => 30,
        }
    }

    pub fn code(self) -> RigCode {
        match self {
            ShaftCode::S => RigCode::ShortShaft,
            ShaftCode::L => RigCode::LongShaft,
            ShaftCode::XL => RigCode::ExtraLongShaft,
            ShaftCode::XXL => RigCode::ExtraExtraLongShaft,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.code().as_str()
    }
}

impl fmt::Display for ShaftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StartType {
    Electric,
    Manual,
    #[default]
    Unknown,
}

/// Steering/control type. Remote unless a tiller code is present; there is
/// no unknown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlType {
    Tiller,
    #[default]
    Remote,
}

/// Normalized result of parsing one rigging-code string.
///
/// Construct through [`crate::parse`]; the fields are public for reading, and
/// `shaft_inches` always equals `shaft_code.inches()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigAttributes {
    /// Derived shaft code first, then the remaining codes in first-seen order.
    pub tokens: Vec<RigCode>,
    pub shaft_code: ShaftCode,
    pub shaft_inches: u8,
    pub start_type: StartType,
    pub control_type: ControlType,
    pub has_power_trim: bool,
    pub has_command_thrust: bool,
    pub is_counter_rotating: bool,
}

impl Default for RigAttributes {
    fn default() -> Self {
        let shaft_code = ShaftCode::default();
        RigAttributes {
            tokens: vec![shaft_code.code()],
            shaft_code,
            shaft_inches: shaft_code.inches(),
            start_type: StartType::default(),
            control_type: ControlType::default(),
            has_power_trim: false,
            has_command_thrust: false,
            is_counter_rotating: false,
        }
    }
}

impl RigAttributes {
    /// Tokens rendered as their manufacturer codes.
    pub fn token_strs(&self) -> Vec<&'static str> {
        self.tokens.iter().map(|t| t.as_str()).collect()
    }
}

/// Mercury outboard product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorFamily {
    FourStroke,
    ProXS,
    SeaPro,
    ProKicker,
    Verado,
    Racing,
    Avator,
}

impl MotorFamily {
    pub fn display_name(self) -> &'static str {
        match self {
            MotorFamily::FourStroke => "FourStroke",
            MotorFamily::ProXS => "ProXS",
            MotorFamily::SeaPro => "SeaPro",
            MotorFamily::ProKicker => "ProKicker",
            MotorFamily::Verado => "Verado",
            MotorFamily::Racing => "Racing",
            MotorFamily::Avator => "Avator",
        }
    }
}

impl fmt::Display for MotorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
