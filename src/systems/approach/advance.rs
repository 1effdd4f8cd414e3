use bevy::prelude::*;

use crate::{
    plugins::{BreakoutEvent, LandedEvent},
    resources::{AnimationState, ApproachConfiguration, DiagnosticFlags},
};

/// Keeps the starting distance consistent with the latest ceiling and speed.
pub fn sync_animation_with_config(
    config: Res<ApproachConfiguration>,
    mut state: ResMut<AnimationState>,
) {
    if config.is_changed() {
        state.sync_with_config(&config);
    }
}

/// Moves the aircraft along the glidepath by this frame's simulated time.
pub fn advance_approach_system(
    time: Res<Time>,
    config: Res<ApproachConfiguration>,
    flags: Res<DiagnosticFlags>,
    mut state: ResMut<AnimationState>,
    mut breakouts: EventWriter<BreakoutEvent>,
    mut landings: EventWriter<LandedEvent>,
) {
    if !state.is_playing() || state.is_paused() {
        return;
    }

    let delta_ms = time.delta().as_secs_f64() * 1000.0;
    let update = state.update_position(delta_ms, &config, &flags);

    if update.broke_out {
        breakouts.send(BreakoutEvent {
            altitude_ft: state.altitude_ft(&config),
            distance_nm: state.current_distance_nm(),
        });
    }
    if update.landed {
        landings.send(LandedEvent {
            distance_nm: state.current_distance_nm(),
        });
    }
}
