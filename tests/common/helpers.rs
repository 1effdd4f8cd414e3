use approach::{
    components::{LightFixture, LightRole},
    resources::ApproachSimConfig,
};
use bevy::prelude::*;

use crate::common::TestApp;

/// Config for a given minimum and lighting system at the default speed.
pub fn scenario(minimum: &str, lighting: &str) -> ApproachSimConfig {
    ApproachSimConfig {
        minimum: minimum.to_string(),
        lighting: lighting.to_string(),
        ..ApproachSimConfig::default()
    }
}

/// Spawned fixtures with their current visibility, for a given role.
pub fn fixtures_with_role(app: &mut TestApp, role: LightRole) -> Vec<(LightFixture, Visibility)> {
    app.query_with::<LightFixture, Visibility>()
        .into_iter()
        .filter(|(fixture, _)| fixture.role == role)
        .collect()
}

pub fn visible_count(fixtures: &[(LightFixture, Visibility)]) -> usize {
    fixtures
        .iter()
        .filter(|(_, visibility)| *visibility != Visibility::Hidden)
        .count()
}
