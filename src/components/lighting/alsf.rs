use super::{
    builder::{stations, LayoutBuilder, SideBarrettes},
    ApproachLightingSystem, FeatureToggles, LightColor, SystemConfig,
};

const CENTERLINE_LIGHTS: usize = 5;
const DECISION_BAR_STATION_FT: f64 = 1000.0;

/// ALSF-I crossbar spacing, 40.5 in
const ALSF_I_SPACING_FT: f64 = 40.5 / 12.0;
const ALSF_II_SPACING_FT: f64 = 3.5;

const DECISION_BAR_SIDES: SideBarrettes = SideBarrettes {
    lights: 8,
    spacing_ft: 5.0,
    inner_offset_ft: 15.0,
};

/// Approach lighting with sequenced flashers, CAT I.
pub struct AlsfI;

impl AlsfI {
    const LENGTH_FT: u32 = 3000;

    const PRE_THRESHOLD_BAR: SideBarrettes = SideBarrettes {
        lights: 5,
        spacing_ft: 3.5,
        inner_offset_ft: 50.0,
    };

    const TERMINATING_BAR: SideBarrettes = SideBarrettes {
        lights: 3,
        spacing_ft: ALSF_I_SPACING_FT,
        inner_offset_ft: 25.0,
    };
}

impl ApproachLightingSystem for AlsfI {
    fn config(&self) -> SystemConfig {
        SystemConfig {
            has_sequenced_flashers: true,
            has_threshold_bar: true,
            has_reil: false,
            system_length_ft: Self::LENGTH_FT as f64,
        }
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        for station in stations(100, Self::LENGTH_FT, 100) {
            if station == DECISION_BAR_STATION_FT {
                layout.crossbar(station, CENTERLINE_LIGHTS, ALSF_I_SPACING_FT, DECISION_BAR_SIDES);
            } else {
                layout.barrette(
                    &format!("centerline-{}", station),
                    station,
                    0.0,
                    CENTERLINE_LIGHTS,
                    ALSF_I_SPACING_FT,
                    LightColor::White,
                );
            }
        }

        layout.red_bar_pair("pre-threshold-bar", 100.0, Self::PRE_THRESHOLD_BAR);
        layout.red_bar_pair("terminating-bar", 200.0, Self::TERMINATING_BAR);
        layout.threshold_bar(10.0);

        for station in stations(1000, Self::LENGTH_FT, 100) {
            layout.flasher(station, 0.0);
        }
    }
}

/// Approach lighting with sequenced flashers, CAT II/III.
pub struct AlsfII;

impl AlsfII {
    const LENGTH_FT: u32 = 2400;
    const HALF_BAR_STATION_FT: f64 = 500.0;

    const HALF_BAR_SIDES: SideBarrettes = SideBarrettes {
        lights: 4,
        spacing_ft: 5.0,
        inner_offset_ft: 15.0,
    };

    const SIDE_ROW: SideBarrettes = SideBarrettes {
        lights: 3,
        spacing_ft: 5.0,
        inner_offset_ft: 36.0,
    };
}

impl ApproachLightingSystem for AlsfII {
    fn config(&self) -> SystemConfig {
        SystemConfig {
            has_sequenced_flashers: true,
            has_threshold_bar: true,
            has_reil: false,
            system_length_ft: Self::LENGTH_FT as f64,
        }
    }

    fn build(&self, layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {
        for station in stations(100, Self::LENGTH_FT, 100) {
            if station == DECISION_BAR_STATION_FT {
                layout.crossbar(station, CENTERLINE_LIGHTS, ALSF_II_SPACING_FT, DECISION_BAR_SIDES);
            } else if station == Self::HALF_BAR_STATION_FT {
                layout.crossbar(station, CENTERLINE_LIGHTS, ALSF_II_SPACING_FT, Self::HALF_BAR_SIDES);
            } else {
                layout.barrette(
                    &format!("centerline-{}", station),
                    station,
                    0.0,
                    CENTERLINE_LIGHTS,
                    ALSF_II_SPACING_FT,
                    LightColor::White,
                );
            }
        }

        for station in stations(100, 900, 100) {
            layout.red_bar_pair(&format!("side-row-{}", station), station, Self::SIDE_ROW);
        }
        layout.threshold_bar(5.0);

        for station in stations(1000, Self::LENGTH_FT, 100) {
            layout.flasher(station, 0.0);
        }
    }
}
