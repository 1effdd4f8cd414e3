use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::SimError;

/// Standardised approach lighting configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LightingSystemType {
    #[serde(rename = "ALSF-I")]
    AlsfI,
    #[serde(rename = "ALSF-II")]
    AlsfII,
    #[serde(rename = "MALS")]
    Mals,
    #[serde(rename = "MALSF")]
    Malsf,
    #[serde(rename = "MALSR")]
    Malsr,
    #[serde(rename = "SSALR")]
    Ssalr,
    #[serde(rename = "ODALS")]
    Odals,
    #[default]
    #[serde(rename = "NONE")]
    None,
}

impl LightingSystemType {
    pub const ALL: [LightingSystemType; 8] = [
        LightingSystemType::AlsfI,
        LightingSystemType::AlsfII,
        LightingSystemType::Mals,
        LightingSystemType::Malsf,
        LightingSystemType::Malsr,
        LightingSystemType::Ssalr,
        LightingSystemType::Odals,
        LightingSystemType::None,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            LightingSystemType::AlsfI => "ALSF-I",
            LightingSystemType::AlsfII => "ALSF-II",
            LightingSystemType::Mals => "MALS",
            LightingSystemType::Malsf => "MALSF",
            LightingSystemType::Malsr => "MALSR",
            LightingSystemType::Ssalr => "SSALR",
            LightingSystemType::Odals => "ODALS",
            LightingSystemType::None => "NONE",
        }
    }

    /// Parses a tag, resolving anything unknown to [`LightingSystemType::None`].
    pub fn from_tag_or_none(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|e: SimError| {
            warn!("{}, using no approach lighting", e);
            LightingSystemType::None
        })
    }
}

impl FromStr for LightingSystemType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == normalized)
            .ok_or_else(|| SimError::UnknownLightingSystem(s.to_string()))
    }
}

impl fmt::Display for LightingSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Runway features that can be switched on and off independently of the
/// approach lighting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub edge_lights: bool,
    pub papi: bool,
    pub reil: bool,
    pub rcls: bool,
    pub threshold_markings: bool,
    pub tdz_markings: bool,
    pub side_stripes: bool,
    pub aim_point: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            edge_lights: true,
            papi: true,
            reil: true,
            rcls: true,
            threshold_markings: true,
            tdz_markings: true,
            side_stripes: true,
            aim_point: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("ALSF-II".parse::<LightingSystemType>().unwrap(), LightingSystemType::AlsfII);
        assert_eq!("malsr".parse::<LightingSystemType>().unwrap(), LightingSystemType::Malsr);
        assert_eq!("alsf_i".parse::<LightingSystemType>().unwrap(), LightingSystemType::AlsfI);
        assert!("HIALS".parse::<LightingSystemType>().is_err());
    }

    #[test]
    fn test_unknown_tag_resolves_to_none() {
        assert_eq!(
            LightingSystemType::from_tag_or_none("HIALS"),
            LightingSystemType::None
        );
    }

    #[test]
    fn test_tag_round_trip() {
        for t in LightingSystemType::ALL {
            assert_eq!(t.tag().parse::<LightingSystemType>().unwrap(), t);
        }
    }
}
