use crate::constants::{ODI_OVERS, T20_OVERS};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, convert::Infallible, fmt, str::FromStr};
use strum_macros::{Display, EnumIter, EnumString};

use crate::geometry::Point;

/// Fielder name → field coordinate. Sorted by name so output is stable.
pub type Positions = BTreeMap<String, Point>;

/// Batsman handedness
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Handedness {
    #[default]
    #[strum(to_string = "Right-handed", serialize = "right", serialize = "rhb")]
    Right,
    #[strum(to_string = "Left-handed", serialize = "left", serialize = "lhb")]
    Left,
}

impl Handedness {
    pub fn opposite(self) -> Self {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }

    /// Preset catalog is stored for right-handers
    pub fn is_mirrored(self) -> bool {
        self == Handedness::Left
    }
}

impl TryFrom<String> for Handedness {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<Handedness> for String {
    fn from(h: Handedness) -> Self {
        h.to_string()
    }
}

/// Match format. Unknown names are kept verbatim and get no restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchFormat {
    #[default]
    T20,
    Odi,
    Test,
    Other(String),
}

impl MatchFormat {
    /// Scheduled overs per innings (None = unlimited)
    pub fn innings_overs(&self) -> Option<u32> {
        match self {
            MatchFormat::T20 => Some(T20_OVERS),
            MatchFormat::Odi => Some(ODI_OVERS),
            MatchFormat::Test | MatchFormat::Other(_) => None,
        }
    }

    /// Whether overs completed affects the restriction
    pub fn uses_overs(&self) -> bool {
        matches!(self, MatchFormat::T20 | MatchFormat::Odi)
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::T20 => write!(f, "T20"),
            MatchFormat::Odi => write!(f, "ODI"),
            MatchFormat::Test => write!(f, "Test"),
            MatchFormat::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for MatchFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_uppercase().as_str() {
            "T20" => MatchFormat::T20,
            "ODI" => MatchFormat::Odi,
            "TEST" => MatchFormat::Test,
            _ => MatchFormat::Other(trimmed.to_string()),
        })
    }
}

impl From<String> for MatchFormat {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

impl From<MatchFormat> for String {
    fn from(format: MatchFormat) -> Self {
        format.to_string()
    }
}
