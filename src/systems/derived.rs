use bevy::prelude::*;

use crate::{
    components::{LightFixture, LightRole},
    resources::{
        AnimationState, ApproachConfiguration, CockpitView, FogModel, FogSettings, PapiEvaluator,
    },
};

/// Re-evaluates the PAPI indication and recolours the four boxes.
pub fn papi_system(
    config: Res<ApproachConfiguration>,
    state: Res<AnimationState>,
    mut evaluator: ResMut<PapiEvaluator>,
    mut fixtures: Query<&mut LightFixture>,
) {
    let previous = evaluator.red_count();
    let red_count = evaluator.update(state.altitude_ft(&config), state.current_distance_nm());
    if red_count != previous {
        debug!("PAPI {} red -> {} red", previous, red_count);
    }

    let papi = evaluator.state();
    for mut fixture in &mut fixtures {
        let LightRole::Papi(slot) = fixture.role else {
            continue;
        };
        if let Some(&color) = papi.lights.get(slot as usize) {
            let color = color.into();
            if fixture.color != color {
                fixture.color = color;
            }
        }
    }
}

/// Tightens the fog to the in-cloud value above the ceiling.
pub fn fog_system(
    config: Res<ApproachConfiguration>,
    state: Res<AnimationState>,
    mut fog: ResMut<FogSettings>,
) {
    let below_cloud = !state.is_above_decision_height(&config);
    let next = FogModel::for_phase(
        config.effective_visibility(),
        config.effective_visibility_unit(),
        below_cloud,
    );
    if *fog != next {
        *fog = next;
    }
}

pub fn cockpit_view_system(
    config: Res<ApproachConfiguration>,
    state: Res<AnimationState>,
    mut view: ResMut<CockpitView>,
) {
    if !state.is_changed() && !config.is_changed() {
        return;
    }
    view.update(state.altitude_ft(&config), state.longitudinal_position_ft());
}
