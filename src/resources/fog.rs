use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::VisibilityUnit;
use crate::utils::{
    feet_to_meters, statute_miles_to_meters, CONTRAST_THRESHOLD_LN, IN_CLOUD_FOG_END_M,
    RVR_FOG_END_FRACTION, RVR_FOG_START_FRACTION, SM_FOG_END_FRACTION, SM_FOG_START_FRACTION,
};

/// Linear fog for the renderer, in metres.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    pub start_m: f64,
    pub end_m: f64,
    /// Extinction coefficient [1/m] for exponential fog
    pub density: f64,
}

impl Default for FogSettings {
    fn default() -> Self {
        FogModel::compute(2400.0, VisibilityUnit::Rvr)
    }
}

pub struct FogModel;

impl FogModel {
    /// Reported visibility converted to metres.
    ///
    /// RVR is read directly as the distance at which runway lights are seen.
    pub fn visibility_meters(visibility: f64, unit: VisibilityUnit) -> f64 {
        match unit {
            VisibilityUnit::Rvr => feet_to_meters(visibility),
            VisibilityUnit::StatuteMiles => statute_miles_to_meters(visibility),
        }
        .max(0.0)
    }

    /// Fog below the cloud base.
    ///
    /// RVR closes in tightly around the reported value (10% to 80%);
    /// prevailing visibility is more generous (30% to 100%).
    pub fn compute(visibility: f64, unit: VisibilityUnit) -> FogSettings {
        let meters = Self::visibility_meters(visibility, unit);
        let (start_fraction, end_fraction) = match unit {
            VisibilityUnit::Rvr => (RVR_FOG_START_FRACTION, RVR_FOG_END_FRACTION),
            VisibilityUnit::StatuteMiles => (SM_FOG_START_FRACTION, SM_FOG_END_FRACTION),
        };
        let end_m = meters * end_fraction;
        FogSettings {
            start_m: meters * start_fraction,
            end_m,
            density: Self::density_for(end_m),
        }
    }

    /// Fog for the current flight phase; inside cloud the view is nearly opaque.
    pub fn for_phase(visibility: f64, unit: VisibilityUnit, below_cloud: bool) -> FogSettings {
        let clear = Self::compute(visibility, unit);
        if below_cloud {
            return clear;
        }
        let end_m = clear.end_m.min(IN_CLOUD_FOG_END_M);
        FogSettings {
            start_m: 0.0,
            end_m,
            density: Self::density_for(end_m),
        }
    }

    fn density_for(end_m: f64) -> f64 {
        if end_m > 0.0 {
            CONTRAST_THRESHOLD_LN / end_m
        } else {
            f64::MAX
        }
    }
}
