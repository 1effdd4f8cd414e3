use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::FeatureToggles;
use crate::utils::{FEET_TO_METERS, RUNWAY_LENGTH_FT, RUNWAY_WIDTH_FT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkingKind {
    ThresholdPianoKey,
    AimPoint,
    TouchdownZone,
    SideStripe,
}

/// A white painted rectangle lying flat on the runway surface.
///
/// Dimensions are in feet in the same frame as the light fixtures:
/// `center_z` runs down the runway from the threshold.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkingStripe {
    pub kind: MarkingKind,
    pub center_x: f64,
    pub center_z: f64,
    /// Along the runway
    pub length_ft: f64,
    /// Across the runway
    pub width_ft: f64,
}

impl MarkingStripe {
    fn starting_at(kind: MarkingKind, center_x: f64, start_z: f64, length_ft: f64, width_ft: f64) -> Self {
        Self {
            kind,
            center_x,
            center_z: start_z + length_ft / 2.0,
            length_ft,
            width_ft,
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            (self.center_x * FEET_TO_METERS) as f32,
            0.0,
            (self.center_z * FEET_TO_METERS) as f32,
        )
    }
}

/// Runway paint for a 150-ft precision runway.
pub struct RunwayMarkings;

impl RunwayMarkings {
    const PIANO_KEY_COUNT: usize = 12;
    const PIANO_KEY_LENGTH_FT: f64 = 150.0;
    const PIANO_KEY_WIDTH_FT: f64 = 5.75;
    const PIANO_KEY_START_FT: f64 = 20.0;

    const AIM_POINT_START_FT: f64 = 1020.0;
    const AIM_POINT_LENGTH_FT: f64 = 150.0;
    const AIM_POINT_WIDTH_FT: f64 = 30.0;
    const AIM_POINT_CENTER_X_FT: f64 = 51.0;

    const TDZ_BAR_LENGTH_FT: f64 = 75.0;
    const TDZ_BAR_WIDTH_FT: f64 = 6.0;
    const TDZ_BAR_GAP_FT: f64 = 5.0;
    const TDZ_INNER_BAR_X_FT: f64 = 39.0;
    /// (station past the threshold, bars per side); 1000 ft is the aim point
    const TDZ_GROUPS: [(f64, usize); 5] =
        [(500.0, 3), (1500.0, 2), (2000.0, 2), (2500.0, 1), (3000.0, 1)];

    const SIDE_STRIPE_WIDTH_FT: f64 = 3.0;

    pub fn create(toggles: &FeatureToggles) -> Vec<MarkingStripe> {
        let mut stripes = Vec::new();
        if toggles.threshold_markings {
            Self::piano_keys(&mut stripes);
        }
        if toggles.aim_point {
            Self::aim_point(&mut stripes);
        }
        if toggles.tdz_markings {
            Self::touchdown_zone(&mut stripes);
        }
        if toggles.side_stripes {
            Self::side_stripes(&mut stripes);
        }
        stripes
    }

    fn piano_keys(stripes: &mut Vec<MarkingStripe>) {
        // Stripes and gaps share one width, with a double gap on the centreline
        let pitch = 2.0 * Self::PIANO_KEY_WIDTH_FT;
        let per_side = Self::PIANO_KEY_COUNT / 2;
        for side in [-1.0, 1.0] {
            for i in 0..per_side {
                let x = Self::PIANO_KEY_WIDTH_FT * 1.5 + i as f64 * pitch;
                stripes.push(MarkingStripe::starting_at(
                    MarkingKind::ThresholdPianoKey,
                    side * x,
                    Self::PIANO_KEY_START_FT,
                    Self::PIANO_KEY_LENGTH_FT,
                    Self::PIANO_KEY_WIDTH_FT,
                ));
            }
        }
    }

    fn aim_point(stripes: &mut Vec<MarkingStripe>) {
        for side in [-1.0, 1.0] {
            stripes.push(MarkingStripe::starting_at(
                MarkingKind::AimPoint,
                side * Self::AIM_POINT_CENTER_X_FT,
                Self::AIM_POINT_START_FT,
                Self::AIM_POINT_LENGTH_FT,
                Self::AIM_POINT_WIDTH_FT,
            ));
        }
    }

    fn touchdown_zone(stripes: &mut Vec<MarkingStripe>) {
        let pitch = Self::TDZ_BAR_WIDTH_FT + Self::TDZ_BAR_GAP_FT;
        for (station, bars) in Self::TDZ_GROUPS {
            for side in [-1.0, 1.0] {
                for i in 0..bars {
                    stripes.push(MarkingStripe::starting_at(
                        MarkingKind::TouchdownZone,
                        side * (Self::TDZ_INNER_BAR_X_FT + i as f64 * pitch),
                        station,
                        Self::TDZ_BAR_LENGTH_FT,
                        Self::TDZ_BAR_WIDTH_FT,
                    ));
                }
            }
        }
    }

    fn side_stripes(stripes: &mut Vec<MarkingStripe>) {
        let x = RUNWAY_WIDTH_FT / 2.0 - Self::SIDE_STRIPE_WIDTH_FT / 2.0;
        for side in [-1.0, 1.0] {
            stripes.push(MarkingStripe::starting_at(
                MarkingKind::SideStripe,
                side * x,
                0.0,
                RUNWAY_LENGTH_FT,
                Self::SIDE_STRIPE_WIDTH_FT,
            ));
        }
    }
}
