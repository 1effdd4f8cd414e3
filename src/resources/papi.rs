use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    nautical_miles_to_feet, rad_to_deg, PAPI_ALL_RED_DEG, PAPI_ALL_WHITE_DEG, PAPI_LIGHT_COUNT,
    PAPI_SLIGHTLY_HIGH_DEG, PAPI_SLIGHTLY_LOW_DEG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PapiLightColor {
    Red,
    White,
}

/// The four PAPI boxes, left to right. Reds always occupy the leftmost slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PapiState {
    pub lights: [PapiLightColor; PAPI_LIGHT_COUNT],
}

impl PapiState {
    pub fn from_red_count(red_count: u8) -> Self {
        let reds = (red_count as usize).min(PAPI_LIGHT_COUNT);
        let mut lights = [PapiLightColor::White; PAPI_LIGHT_COUNT];
        for light in lights.iter_mut().take(reds) {
            *light = PapiLightColor::Red;
        }
        Self { lights }
    }

    pub fn red_count(&self) -> u8 {
        self.lights
            .iter()
            .filter(|l| **l == PapiLightColor::Red)
            .count() as u8
    }
}

/// Number of red lights shown for an approach angle [deg].
///
/// An angle sitting exactly on a boundary resolves away from the on-path
/// indication: 3.25 and 3.5 read high, 2.75 and 2.5 read low.
pub fn red_count_for_angle(angle_deg: f64) -> u8 {
    if angle_deg >= PAPI_ALL_WHITE_DEG {
        0
    } else if angle_deg >= PAPI_SLIGHTLY_HIGH_DEG {
        1
    } else if angle_deg > PAPI_SLIGHTLY_LOW_DEG {
        2
    } else if angle_deg > PAPI_ALL_RED_DEG {
        3
    } else {
        4
    }
}

/// Derives the PAPI indication from the aircraft position, remembering the
/// last valid result for degenerate inputs.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PapiEvaluator {
    red_count: u8,
}

impl Default for PapiEvaluator {
    fn default() -> Self {
        // On glidepath until told otherwise
        Self { red_count: 2 }
    }
}

impl PapiEvaluator {
    pub fn red_count(&self) -> u8 {
        self.red_count
    }

    pub fn state(&self) -> PapiState {
        PapiState::from_red_count(self.red_count)
    }

    /// Updates from altitude above the TDZ [ft] and distance to it [NM].
    ///
    /// Non-positive or non-finite inputs leave the previous indication in place.
    pub fn update(&mut self, altitude_ft: f64, distance_nm: f64) -> u8 {
        let distance_ft = nautical_miles_to_feet(distance_nm);
        if !(distance_ft > 0.0) || !altitude_ft.is_finite() || !distance_ft.is_finite() {
            return self.red_count;
        }

        let angle_deg = rad_to_deg((altitude_ft / distance_ft).atan());
        self.red_count = red_count_for_angle(angle_deg);
        self.red_count
    }
}
