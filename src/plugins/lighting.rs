use bevy::prelude::*;

use crate::{
    plugins::ApproachSet,
    resources::LightingSession,
    systems::{
        dispose_lighting_on_exit, rabbit_flasher_system, rebuild_lighting_system,
        reil_flasher_system,
    },
};

/// Spawns the light layout and markings for the active configuration and
/// drives the flashers. Requires [`ApproachConfiguration`](crate::resources::ApproachConfiguration).
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightingSession>()
            .add_systems(
                Update,
                (
                    rebuild_lighting_system,
                    (rabbit_flasher_system, reil_flasher_system),
                )
                    .chain()
                    .in_set(ApproachSet::Lighting),
            )
            .add_systems(Last, dispose_lighting_on_exit);
    }
}
