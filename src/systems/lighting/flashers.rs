use bevy::prelude::*;

use crate::{components::LightFixture, resources::LightingSession};

fn visibility_for(shown: bool) -> Visibility {
    if shown {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Steps the rabbit on wall-clock time; it keeps running while the approach
/// is paused.
pub fn rabbit_flasher_system(
    real_time: Res<Time<Real>>,
    mut session: ResMut<LightingSession>,
    mut visibilities: Query<&mut Visibility, With<LightFixture>>,
) {
    let Some(active) = session.rabbit.tick(real_time.delta()) else {
        return;
    };
    let Some(fixtures) = session.fixtures() else {
        return;
    };

    for (step, group) in fixtures.sequenced_flashers().iter().enumerate() {
        for &index in group {
            let Some(entity) = session.fixture_entity(index) else {
                continue;
            };
            if let Ok(mut visibility) = visibilities.get_mut(entity) {
                visibility.set_if_neq(visibility_for(step == active));
            }
        }
    }
}

pub fn reil_flasher_system(
    real_time: Res<Time<Real>>,
    mut session: ResMut<LightingSession>,
    mut visibilities: Query<&mut Visibility, With<LightFixture>>,
) {
    let Some(lit) = session.reil.tick(real_time.delta()) else {
        return;
    };
    let Some(fixtures) = session.fixtures() else {
        return;
    };

    for index in fixtures.reil_indices() {
        if let Some(mut visibility) = session
            .fixture_entity(index)
            .and_then(|entity| visibilities.get_mut(entity).ok())
        {
            visibility.set_if_neq(visibility_for(lit));
        }
    }
}
