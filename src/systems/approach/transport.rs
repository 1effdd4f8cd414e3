use bevy::prelude::*;

use crate::{
    plugins::ApproachCommand,
    resources::{AnimationState, ApproachConfiguration},
};

/// Applies transport commands in the order they were sent.
///
/// Play/pause timestamps come from the wall clock so that resuming shifts
/// the start by the real pause duration.
pub fn handle_approach_commands(
    mut requests: EventReader<ApproachCommand>,
    real_time: Res<Time<Real>>,
    config: Res<ApproachConfiguration>,
    mut state: ResMut<AnimationState>,
) {
    for request in requests.read() {
        let now = real_time.elapsed();
        match *request {
            ApproachCommand::Play => state.play(now, &config),
            ApproachCommand::Pause => state.pause(now),
            ApproachCommand::Stop => {
                state.stop();
                info!("Approach stopped at {:.2} NM", state.current_distance_nm());
            }
            ApproachCommand::Reset => {
                state.reset(&config);
                info!("Approach reset to {:.2} NM", state.current_distance_nm());
            }
            ApproachCommand::SetDistance(distance_nm) => {
                state.set_distance(distance_nm, &config);
                debug!("Scrubbed to {:.3} NM", state.current_distance_nm());
            }
        }
    }
}
