use nalgebra::Vector3;

use super::{builder::LayoutBuilder, FeatureToggles, LightColor, LightRole, SystemConfig};
use crate::{
    resources::PapiState,
    utils::{
        ELEVATED_LIGHT_HEIGHT_FT, INSET_LIGHT_HEIGHT_FT, PAPI_LIGHT_COUNT, RUNWAY_LENGTH_FT,
        RUNWAY_WIDTH_FT, TDZ_OFFSET_FT,
    },
};

const EDGE_LIGHT_SPACING_FT: f64 = 200.0;
const EDGE_LIGHT_OUTBOARD_FT: f64 = 2.0;
/// Edge lights turn yellow over this final stretch of runway
const CAUTION_ZONE_FT: f64 = 2000.0;

const THRESHOLD_LIGHT_SPACING_FT: f64 = 10.0;

const REIL_EDGE_OFFSET_FT: f64 = 40.0;

const RCLS_SPACING_FT: f64 = 50.0;
const RCLS_FIRST_FT: f64 = 75.0;
const RCLS_ALTERNATING_ZONE_FT: f64 = 3000.0;
const RCLS_RED_ZONE_FT: f64 = 1000.0;

const PAPI_EDGE_OFFSET_FT: f64 = 50.0;
const PAPI_SPACING_FT: f64 = 30.0;

/// Adds the toggled runway lights. Lights the approach system provides
/// itself (threshold bar, threshold flashers) are not duplicated.
pub fn add_runway_lights(layout: &mut LayoutBuilder, system: &SystemConfig, toggles: &FeatureToggles) {
    let half_width = RUNWAY_WIDTH_FT / 2.0;

    if toggles.edge_lights {
        add_edge_lights(layout, half_width);
        if !system.has_threshold_bar {
            add_threshold_lights(layout, half_width);
        }
    }

    if toggles.reil && !system.has_reil {
        for x in [-(half_width + REIL_EDGE_OFFSET_FT), half_width + REIL_EDGE_OFFSET_FT] {
            layout.light(
                "reil",
                Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, 0.0),
                LightColor::Strobe,
                LightRole::Reil,
            );
        }
    }

    if toggles.rcls {
        add_centerline_lights(layout);
    }

    if toggles.papi {
        add_papi(layout, half_width);
    }
}

fn add_edge_lights(layout: &mut LayoutBuilder, half_width: f64) {
    let count = (RUNWAY_LENGTH_FT / EDGE_LIGHT_SPACING_FT) as usize + 1;
    for (group, side) in [("edge-left", -1.0), ("edge-right", 1.0)] {
        for i in 0..count {
            let z = i as f64 * EDGE_LIGHT_SPACING_FT;
            let color = if z > RUNWAY_LENGTH_FT - CAUTION_ZONE_FT {
                LightColor::Yellow
            } else {
                LightColor::White
            };
            layout.light(
                group,
                Vector3::new(side * (half_width + EDGE_LIGHT_OUTBOARD_FT), ELEVATED_LIGHT_HEIGHT_FT, z),
                color,
                LightRole::Steady,
            );
        }
    }
}

fn add_threshold_lights(layout: &mut LayoutBuilder, half_width: f64) {
    let count = (2.0 * half_width / THRESHOLD_LIGHT_SPACING_FT) as usize + 1;
    for i in 0..count {
        layout.light(
            "runway-threshold",
            Vector3::new(
                -half_width + i as f64 * THRESHOLD_LIGHT_SPACING_FT,
                INSET_LIGHT_HEIGHT_FT,
                0.0,
            ),
            LightColor::Green,
            LightRole::ThresholdBar,
        );
    }
}

fn rcls_color(index: usize, remaining_ft: f64) -> LightColor {
    if remaining_ft <= RCLS_RED_ZONE_FT {
        LightColor::Red
    } else if remaining_ft <= RCLS_ALTERNATING_ZONE_FT && index % 2 == 1 {
        LightColor::Red
    } else {
        LightColor::White
    }
}

fn add_centerline_lights(layout: &mut LayoutBuilder) {
    let last = RUNWAY_LENGTH_FT - RCLS_FIRST_FT;
    let count = ((last - RCLS_FIRST_FT) / RCLS_SPACING_FT) as usize + 1;
    for i in 0..count {
        let z = RCLS_FIRST_FT + i as f64 * RCLS_SPACING_FT;
        layout.light(
            "rcls",
            Vector3::new(0.0, INSET_LIGHT_HEIGHT_FT, z),
            rcls_color(i, RUNWAY_LENGTH_FT - z),
            LightRole::Rcls,
        );
    }
}

/// Four boxes right of the runway abeam the TDZ, slot 0 nearest the runway.
fn add_papi(layout: &mut LayoutBuilder, half_width: f64) {
    let initial = PapiState::from_red_count(2);
    for slot in 0..PAPI_LIGHT_COUNT {
        let x = half_width + PAPI_EDGE_OFFSET_FT + slot as f64 * PAPI_SPACING_FT;
        layout.light(
            "papi",
            Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, TDZ_OFFSET_FT),
            initial.lights[slot].into(),
            LightRole::Papi(slot as u8),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LightingLayoutCatalog, LightingSystemType};

    fn runway_only(toggles: FeatureToggles) -> crate::components::FixtureSet {
        LightingLayoutCatalog::create(LightingSystemType::None, &toggles)
    }

    fn all_off() -> FeatureToggles {
        FeatureToggles {
            edge_lights: false,
            papi: false,
            reil: false,
            rcls: false,
            threshold_markings: false,
            tdz_markings: false,
            side_stripes: false,
            aim_point: false,
        }
    }

    #[test]
    fn test_toggles_off_gives_empty_set() {
        assert!(runway_only(all_off()).is_empty());
    }

    #[test]
    fn test_edge_lights_caution_zone() {
        let set = runway_only(FeatureToggles {
            edge_lights: true,
            ..all_off()
        });
        assert_eq!(set.in_group("edge-left").count(), 51);
        assert_eq!(set.in_group("edge-right").count(), 51);
        let yellow = set
            .in_group("edge-left")
            .filter(|f| f.color == LightColor::Yellow)
            .count();
        assert_eq!(yellow, 10);
        assert_eq!(set.in_group("runway-threshold").count(), 16);
    }

    #[test]
    fn test_reil_pair() {
        let set = runway_only(FeatureToggles {
            reil: true,
            ..all_off()
        });
        let reil = set.reil_indices();
        assert_eq!(reil.len(), 2);
        for i in reil {
            let f = &set.fixtures()[i];
            assert_eq!(f.color, LightColor::Strobe);
            assert_eq!(f.position.x.abs(), 115.0);
        }
    }

    #[test]
    fn test_rcls_color_coding() {
        let set = runway_only(FeatureToggles {
            rcls: true,
            ..all_off()
        });
        let rcls: Vec<_> = set.with_role(LightRole::Rcls).collect();
        assert_eq!(rcls.len(), 198);
        assert!(rcls
            .iter()
            .filter(|f| f.position.z >= RUNWAY_LENGTH_FT - RCLS_RED_ZONE_FT)
            .all(|f| f.color == LightColor::Red));
        assert!(rcls
            .iter()
            .filter(|f| f.position.z < RUNWAY_LENGTH_FT - RCLS_ALTERNATING_ZONE_FT)
            .all(|f| f.color == LightColor::White));
    }

    #[test]
    fn test_papi_slots_left_to_right() {
        let set = runway_only(FeatureToggles {
            papi: true,
            ..all_off()
        });
        let papi = set.papi_indices();
        assert_eq!(papi.len(), 4);
        let xs: Vec<f64> = papi.iter().map(|&i| set.fixtures()[i].position.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(set.fixtures()[papi[0]].color, LightColor::Red);
        assert_eq!(set.fixtures()[papi[3]].color, LightColor::White);
    }
}
