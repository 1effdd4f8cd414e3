use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::SimError;

/// How visibility is reported for a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityUnit {
    /// Runway visual range [ft]
    #[serde(rename = "RVR")]
    Rvr,
    /// Prevailing visibility [statute miles]
    #[serde(rename = "SM")]
    StatuteMiles,
}

impl fmt::Display for VisibilityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityUnit::Rvr => write!(f, "RVR"),
            VisibilityUnit::StatuteMiles => write!(f, "SM"),
        }
    }
}

/// Whether the procedure provides vertical guidance down to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApproachKind {
    Precision,
    /// Levels off at the minimum descent altitude
    NonPrecision,
    /// Levels off at the circling minimum descent altitude
    Circling,
}

impl ApproachKind {
    /// Non-precision and circling procedures hold the MDA once reached
    /// instead of following the glidepath below it.
    pub fn levels_off_at_minimums(self) -> bool {
        !matches!(self, ApproachKind::Precision)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApproachMinimum {
    pub id: &'static str,
    pub label: &'static str,
    /// Decision height / minimum descent altitude above the TDZ [ft]
    pub ceiling_ft: u32,
    pub visibility: f64,
    pub visibility_unit: VisibilityUnit,
    pub kind: ApproachKind,
}

pub const DEFAULT_MINIMUM_ID: &str = "cat-i";

pub static APPROACH_MINIMUMS: [ApproachMinimum; 8] = [
    ApproachMinimum {
        id: "cat-i",
        label: "CAT I ILS",
        ceiling_ft: 200,
        visibility: 2400.0,
        visibility_unit: VisibilityUnit::Rvr,
        kind: ApproachKind::Precision,
    },
    ApproachMinimum {
        id: "cat-ii",
        label: "CAT II ILS",
        ceiling_ft: 100,
        visibility: 1200.0,
        visibility_unit: VisibilityUnit::Rvr,
        kind: ApproachKind::Precision,
    },
    ApproachMinimum {
        id: "cat-iiia",
        label: "CAT IIIa ILS",
        ceiling_ft: 50,
        visibility: 700.0,
        visibility_unit: VisibilityUnit::Rvr,
        kind: ApproachKind::Precision,
    },
    ApproachMinimum {
        id: "cat-iiib",
        label: "CAT IIIb ILS",
        ceiling_ft: 20,
        visibility: 600.0,
        visibility_unit: VisibilityUnit::Rvr,
        kind: ApproachKind::Precision,
    },
    ApproachMinimum {
        id: "lpv",
        label: "RNAV (GPS) LPV",
        ceiling_ft: 250,
        visibility: 4000.0,
        visibility_unit: VisibilityUnit::Rvr,
        kind: ApproachKind::Precision,
    },
    ApproachMinimum {
        id: "lnav",
        label: "RNAV (GPS) LNAV",
        ceiling_ft: 400,
        visibility: 1.0,
        visibility_unit: VisibilityUnit::StatuteMiles,
        kind: ApproachKind::NonPrecision,
    },
    ApproachMinimum {
        id: "vor",
        label: "VOR",
        ceiling_ft: 500,
        visibility: 1.0,
        visibility_unit: VisibilityUnit::StatuteMiles,
        kind: ApproachKind::NonPrecision,
    },
    ApproachMinimum {
        id: "circling",
        label: "Circling",
        ceiling_ft: 700,
        visibility: 2.0,
        visibility_unit: VisibilityUnit::StatuteMiles,
        kind: ApproachKind::Circling,
    },
];

impl ApproachMinimum {
    pub fn all() -> &'static [ApproachMinimum] {
        &APPROACH_MINIMUMS
    }

    pub fn default_minimum() -> &'static ApproachMinimum {
        &APPROACH_MINIMUMS[0]
    }

    pub fn try_lookup(id: &str) -> Result<&'static ApproachMinimum, SimError> {
        APPROACH_MINIMUMS
            .iter()
            .find(|m| m.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| SimError::UnknownMinimum(id.to_string()))
    }

    /// Looks up a minimum by id, falling back to CAT I for unknown ids.
    pub fn lookup(id: &str) -> &'static ApproachMinimum {
        match Self::try_lookup(id) {
            Ok(minimum) => minimum,
            Err(e) => {
                warn!("{}, falling back to {}", e, DEFAULT_MINIMUM_ID);
                Self::default_minimum()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_minimum() {
        let m = ApproachMinimum::lookup("cat-ii");
        assert_eq!(m.ceiling_ft, 100);
        assert_eq!(m.visibility_unit, VisibilityUnit::Rvr);
        assert_eq!(ApproachMinimum::lookup("LNAV").id, "lnav");
    }

    #[test]
    fn test_unknown_minimum_falls_back() {
        assert!(ApproachMinimum::try_lookup("cat-iv").is_err());
        assert_eq!(ApproachMinimum::lookup("cat-iv").id, DEFAULT_MINIMUM_ID);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: std::collections::HashSet<_> = ApproachMinimum::all().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), APPROACH_MINIMUMS.len());
    }

    #[test]
    fn test_level_off_kinds() {
        assert!(!ApproachKind::Precision.levels_off_at_minimums());
        assert!(ApproachKind::NonPrecision.levels_off_at_minimums());
        assert!(ApproachKind::Circling.levels_off_at_minimums());
    }
}
