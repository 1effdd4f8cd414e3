use super::{
    builder::{stations, LayoutBuilder, SideBarrettes},
    ApproachLightingSystem, FeatureToggles, LightColor, SystemConfig,
};

/// Simplified short approach lighting with runway alignment indicator lights.
pub struct Ssalr;

impl Ssalr {
    const SSALS_LENGTH_FT: u32 = 1400;
    const RAIL_LENGTH_FT: u32 = 2400;
    const SPACING_FT: f64 = 40.5 / 12.0;
    const BARRETTE_LIGHTS: usize = 5;
    const CROSSBAR_STATION_FT: f64 = 1000.0;

    const CROSSBAR_SIDES: SideBarrettes = SideBarrettes {
        lights: 5,
        spacing_ft: 5.0,
        inner_offset_ft: 15.0,
    };
}

impl ApproachLightingSystem for Ssalr {
    fn config(&self) -> SystemConfig {
        SystemConfig {
            has_sequenced_flashers: true,
            has_threshold_bar: true,
            has_reil: false,
            system_length_ft: Self::RAIL_LENGTH_FT as f64,
        }
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        for station in stations(200, Self::SSALS_LENGTH_FT, 200) {
            if station == Self::CROSSBAR_STATION_FT {
                layout.crossbar(
                    station,
                    Self::BARRETTE_LIGHTS,
                    Self::SPACING_FT,
                    Self::CROSSBAR_SIDES,
                );
            } else {
                layout.barrette(
                    &format!("centerline-{}", station),
                    station,
                    0.0,
                    Self::BARRETTE_LIGHTS,
                    Self::SPACING_FT,
                    LightColor::White,
                );
            }
        }
        layout.threshold_bar(10.0);

        for station in stations(1600, Self::RAIL_LENGTH_FT, 200) {
            layout.flasher(station, 0.0);
        }
    }
}
