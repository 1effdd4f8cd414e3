use bevy::prelude::*;

use crate::{
    plugins::{ApproachCommand, ApproachSequencePlugin, ApproachSet, BreakoutEvent, LandedEvent},
    resources::{
        AnimationState, ApproachConfiguration, ApproachSimConfig, CockpitView, FogModel,
        PapiEvaluator,
    },
    systems::{
        advance_approach_system, cockpit_view_system, fog_system, handle_approach_commands,
        papi_system, sync_animation_with_config,
    },
};

/// Approach animation, PAPI, fog and cockpit view for one session.
pub struct ApproachPlugin {
    pub config: ApproachSimConfig,
}

impl ApproachPlugin {
    pub fn new(config: ApproachSimConfig) -> Self {
        Self { config }
    }
}

impl Default for ApproachPlugin {
    fn default() -> Self {
        Self::new(ApproachSimConfig::default())
    }
}

impl Plugin for ApproachPlugin {
    fn build(&self, app: &mut App) {
        let approach = ApproachConfiguration::from_sim_config(&self.config);
        let animation = AnimationState::new(&approach);
        let fog = FogModel::for_phase(
            approach.effective_visibility(),
            approach.effective_visibility_unit(),
            !animation.is_above_decision_height(&approach),
        );
        let mut view = CockpitView::default();
        view.update(animation.altitude_ft(&approach), animation.longitudinal_position_ft());

        info!(
            "Approach: {} ({} ft, {} {}), {} at {} kt, starting {:.2} NM out",
            approach.minimum().label,
            approach.effective_ceiling_ft(),
            approach.effective_visibility(),
            approach.effective_visibility_unit(),
            approach.lighting(),
            approach.approach_speed_kt(),
            animation.starting_distance_nm()
        );
        if self.config.diagnostics.test_mode {
            warn!(
                "Test mode: simulation clock runs {}x",
                self.config.diagnostics.time_multiplier()
            );
        }

        app.add_plugins(ApproachSequencePlugin)
            .add_event::<ApproachCommand>()
            .add_event::<BreakoutEvent>()
            .add_event::<LandedEvent>()
            .insert_resource(self.config.diagnostics)
            .insert_resource(approach)
            .insert_resource(animation)
            .insert_resource(fog)
            .insert_resource(view)
            .init_resource::<PapiEvaluator>()
            .add_systems(Update, handle_approach_commands.in_set(ApproachSet::Input))
            .add_systems(
                Update,
                (sync_animation_with_config, advance_approach_system)
                    .chain()
                    .in_set(ApproachSet::Advance),
            )
            .add_systems(
                Update,
                (papi_system, fog_system, cockpit_view_system).in_set(ApproachSet::Derive),
            );
    }
}
