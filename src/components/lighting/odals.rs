use nalgebra::Vector3;

use super::{
    builder::{stations, LayoutBuilder},
    ApproachLightingSystem, FeatureToggles, LightColor, LightRole, SystemConfig,
};
use crate::utils::{ELEVATED_LIGHT_HEIGHT_FT, RUNWAY_WIDTH_FT};

/// Omnidirectional approach lighting: flashers only, no barrettes and no
/// threshold bar.
pub struct Odals;

impl Odals {
    const LENGTH_FT: u32 = 1500;
    const EDGE_OFFSET_FT: f64 = 40.0;
    /// Threshold flashers move outboard to clear the PAPI
    const EDGE_OFFSET_WITH_PAPI_FT: f64 = 75.0;

    pub fn threshold_offset_ft(toggles: &FeatureToggles) -> f64 {
        let edge = if toggles.papi {
            Self::EDGE_OFFSET_WITH_PAPI_FT
        } else {
            Self::EDGE_OFFSET_FT
        };
        RUNWAY_WIDTH_FT / 2.0 + edge
    }
}

impl ApproachLightingSystem for Odals {
    fn config(&self) -> SystemConfig {
        SystemConfig {
            has_sequenced_flashers: true,
            has_threshold_bar: false,
            has_reil: true,
            system_length_ft: Self::LENGTH_FT as f64,
        }
    }

    fn build(&self, layout: &mut LayoutBuilder, toggles: &FeatureToggles) {
        // The threshold pair fires together as the last step of the sweep
        let offset = Self::threshold_offset_ft(toggles);
        let threshold_pair: Vec<usize> = [-offset, offset]
            .into_iter()
            .map(|x| {
                layout.light(
                    "threshold-flashers",
                    Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, 0.0),
                    LightColor::Strobe,
                    LightRole::SequencedFlasher,
                )
            })
            .collect();
        layout.flasher_group(threshold_pair);

        for station in stations(300, Self::LENGTH_FT, 300) {
            layout.flasher(station, 0.0);
        }
    }
}
