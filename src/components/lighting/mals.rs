use super::{
    builder::{stations, LayoutBuilder},
    ApproachLightingSystem, FeatureToggles, LightColor, SystemConfig,
};

const MALS_LENGTH_FT: u32 = 1400;
const MALS_SPACING_FT: f64 = 2.5;
const BARRETTE_LIGHTS: usize = 5;

/// Runway alignment indicator lights extend the MALS out to this station.
const RAIL_LENGTH_FT: u32 = 2400;

fn mals_barrettes(layout: &mut LayoutBuilder) {
    for station in stations(200, MALS_LENGTH_FT, 200) {
        layout.barrette(
            &format!("centerline-{}", station),
            station,
            0.0,
            BARRETTE_LIGHTS,
            MALS_SPACING_FT,
            LightColor::White,
        );
    }
    layout.threshold_bar(10.0);
}

fn mals_config(has_sequenced_flashers: bool, system_length_ft: u32) -> SystemConfig {
    SystemConfig {
        has_sequenced_flashers,
        has_threshold_bar: true,
        has_reil: false,
        system_length_ft: system_length_ft as f64,
    }
}

/// Medium-intensity approach lighting.
pub struct Mals;

impl ApproachLightingSystem for Mals {
    fn config(&self) -> SystemConfig {
        mals_config(false, MALS_LENGTH_FT)
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        mals_barrettes(layout);
    }
}

/// MALS with flashers on the three outermost barrettes.
pub struct Malsf;

impl ApproachLightingSystem for Malsf {
    fn config(&self) -> SystemConfig {
        mals_config(true, MALS_LENGTH_FT)
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        mals_barrettes(layout);
        for station in stations(1000, MALS_LENGTH_FT, 200) {
            layout.flasher(station, 0.0);
        }
    }
}

/// MALS with runway alignment indicator lights.
pub struct Malsr;

impl ApproachLightingSystem for Malsr {
    fn config(&self) -> SystemConfig {
        mals_config(true, RAIL_LENGTH_FT)
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        mals_barrettes(layout);
        for station in stations(1600, RAIL_LENGTH_FT, 200) {
            layout.flasher(station, 0.0);
        }
    }
}
