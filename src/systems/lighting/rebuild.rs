use bevy::prelude::*;

use crate::{
    components::{LightFixture, LightRole, LightingLayoutCatalog, RunwayMarkings},
    resources::{ApproachConfiguration, LightingSession},
};

fn initial_visibility(fixture: &LightFixture) -> Visibility {
    // Flashers stay dark until the scheduler fires them
    if fixture.role == LightRole::SequencedFlasher {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    }
}

/// Replaces the whole light layout when the lighting system or a toggle changes.
///
/// The previous session is disposed first so its timers never overlap the
/// new ones.
pub fn rebuild_lighting_system(
    mut commands: Commands,
    config: Res<ApproachConfiguration>,
    mut session: ResMut<LightingSession>,
) {
    let system = config.lighting();
    let toggles = *config.toggles();
    if !session.needs_rebuild(system, &toggles) {
        return;
    }

    for entity in session.dispose() {
        commands.entity(entity).despawn();
    }

    let fixtures = LightingLayoutCatalog::create(system, &toggles);
    let fixture_entities: Vec<Entity> = fixtures
        .fixtures()
        .iter()
        .map(|fixture| {
            commands
                .spawn((
                    Name::new(fixture.name.clone()),
                    Transform::from_translation(fixture.translation()),
                    initial_visibility(fixture),
                    fixture.clone(),
                ))
                .id()
        })
        .collect();

    let markings = RunwayMarkings::create(&toggles);
    let marking_entities: Vec<Entity> = markings
        .iter()
        .enumerate()
        .map(|(i, stripe)| {
            commands
                .spawn((
                    Name::new(format!("marking/{:?}/{}", stripe.kind, i)),
                    Transform::from_translation(stripe.translation()),
                    Visibility::Inherited,
                    *stripe,
                ))
                .id()
        })
        .collect();

    info!(
        "Built {} layout: {} fixtures, {} flasher steps, {} markings",
        system,
        fixtures.len(),
        fixtures.sequenced_flashers().len(),
        markings.len()
    );
    session.install(toggles, fixtures, fixture_entities, marking_entities);
}

/// Cancels the flashers and despawns the layout when the app shuts down.
/// Later frames leave the lighting torn down.
pub fn dispose_lighting_on_exit(
    mut exits: EventReader<AppExit>,
    mut commands: Commands,
    mut session: ResMut<LightingSession>,
) {
    if exits.is_empty() {
        return;
    }
    exits.clear();
    if session.is_shut_down() {
        return;
    }

    for entity in session.shut_down() {
        commands.entity(entity).despawn();
    }
    info!("Lighting session disposed");
}
