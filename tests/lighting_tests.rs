mod common;

use approach::{
    components::{
        FeatureToggles, LightFixture, LightRole, LightingLayoutCatalog, LightingSystemType,
        MarkingStripe, RunwayMarkings,
    },
    plugins::ApproachCommand,
    resources::{ApproachConfiguration, LightingSession},
};
use bevy::prelude::*;
use std::time::Duration;

use common::{
    assert_fixture_visible, fixtures_with_role, scenario, visible_count, TestAppBuilder,
};

#[test]
fn test_layout_spawned_for_configured_system() {
    let mut app = TestAppBuilder::new()
        .with_config(scenario("cat-ii", "ALSF-II"))
        .build();

    let expected = LightingLayoutCatalog::create(LightingSystemType::AlsfII, &FeatureToggles::default());
    let fixtures = app.query_all::<LightFixture>();
    assert_eq!(fixtures.len(), expected.len());

    let markings = app.query_all::<MarkingStripe>();
    assert_eq!(markings.len(), RunwayMarkings::create(&FeatureToggles::default()).len());

    let session = app.resource::<LightingSession>();
    assert!(session.rabbit.is_running());
    assert_eq!(session.fixture_entities().len(), expected.len());
}

#[test]
fn test_rabbit_shows_one_step_at_a_time() {
    let mut app = TestAppBuilder::new().build();

    let flashers = fixtures_with_role(&mut app, LightRole::SequencedFlasher);
    assert_eq!(flashers.len(), 15);
    assert_eq!(visible_count(&flashers), 0);

    app.run_for(Duration::from_millis(100));
    let flashers = fixtures_with_role(&mut app, LightRole::SequencedFlasher);
    assert_eq!(visible_count(&flashers), 1);
}

#[test]
fn test_rabbit_sweeps_towards_threshold() {
    let mut app = TestAppBuilder::new()
        .with_frame(Duration::from_millis(1))
        .build();
    let period = app.resource::<LightingSession>().rabbit.period().unwrap();

    let mut stations = Vec::new();
    for _ in 0..3 {
        app.run_for(period);
        let flashers = fixtures_with_role(&mut app, LightRole::SequencedFlasher);
        let lit: Vec<f64> = flashers
            .iter()
            .filter(|(_, v)| *v != Visibility::Hidden)
            .map(|(f, _)| f.station_ft())
            .collect();
        assert_eq!(lit.len(), 1);
        stations.push(lit[0]);
    }
    assert_eq!(stations, vec![2400.0, 2300.0, 2200.0]);
}

#[test]
fn test_rabbit_keeps_running_while_paused() {
    let mut app = TestAppBuilder::new().build();

    app.send(ApproachCommand::Play);
    app.run_steps(5);
    app.send(ApproachCommand::Pause);
    app.run_frame();

    let before = app.resource::<LightingSession>().rabbit.active_step();
    app.run_for(Duration::from_millis(100));
    let after = app.resource::<LightingSession>().rabbit.active_step();
    assert!(after.is_some());
    assert_ne!(before, after);
}

#[test]
fn test_lighting_change_replaces_layout() {
    let mut app = TestAppBuilder::new().build();

    app.resource_mut::<ApproachConfiguration>()
        .set_lighting(LightingSystemType::Odals);
    app.run_frame();

    let expected = LightingLayoutCatalog::create(LightingSystemType::Odals, &FeatureToggles::default());
    let fixtures = app.query_all::<LightFixture>();
    assert_eq!(fixtures.len(), expected.len());
    assert!(fixtures
        .iter()
        .all(|f| matches!(f.system, None | Some(LightingSystemType::Odals))));

    let session = app.resource::<LightingSession>();
    assert_eq!(
        session.rabbit.period(),
        Some(Duration::from_millis(500) / 6)
    );
    assert!(!session.reil.is_running());
}

#[test]
fn test_toggle_change_replaces_markings() {
    let mut app = TestAppBuilder::new().build();

    app.resource_mut::<ApproachConfiguration>()
        .toggles_mut()
        .side_stripes = false;
    app.run_frame();

    let toggles = *app.resource::<ApproachConfiguration>().toggles();
    assert_eq!(
        app.query_all::<MarkingStripe>().len(),
        RunwayMarkings::create(&toggles).len()
    );
}

#[test]
fn test_reil_blink_in_unison() {
    let mut app = TestAppBuilder::new()
        .with_config(scenario("cat-i", "MALSR"))
        .build();

    let reil = fixtures_with_role(&mut app, LightRole::Reil);
    assert_eq!(reil.len(), 2);
    for (fixture, visibility) in &reil {
        assert_fixture_visible(fixture, *visibility, true);
    }

    app.run_for(Duration::from_millis(250));
    let reil = fixtures_with_role(&mut app, LightRole::Reil);
    for (fixture, visibility) in &reil {
        assert_fixture_visible(fixture, *visibility, false);
    }

    app.run_for(Duration::from_millis(250));
    let reil = fixtures_with_role(&mut app, LightRole::Reil);
    for (fixture, visibility) in &reil {
        assert_fixture_visible(fixture, *visibility, true);
    }
}

#[test]
fn test_app_exit_disposes_session() {
    let mut app = TestAppBuilder::new().build();
    assert!(!app.query_all::<LightFixture>().is_empty());

    app.app.world_mut().send_event(AppExit::Success);
    app.run_frame();

    assert!(app.query_all::<LightFixture>().is_empty());
    assert!(app.query_all::<MarkingStripe>().is_empty());
    let session = app.resource::<LightingSession>();
    assert!(!session.is_active());
    assert!(!session.rabbit.is_running());
    assert!(!session.reil.is_running());
}

#[test]
fn test_lighting_stays_down_after_exit() {
    let mut app = TestAppBuilder::new()
        .with_config(scenario("cat-ii", "ALSF-II"))
        .build();
    assert!(app.resource::<LightingSession>().rabbit.is_running());

    app.app.world_mut().send_event(AppExit::Success);
    app.run_frame();

    // A host that keeps ticking, even with a new configuration
    app.run_steps(50);
    app.resource_mut::<ApproachConfiguration>()
        .set_lighting(LightingSystemType::Malsr);
    app.run_steps(50);

    assert!(app.query_all::<LightFixture>().is_empty());
    assert!(app.query_all::<MarkingStripe>().is_empty());
    let session = app.resource::<LightingSession>();
    assert!(session.is_shut_down());
    assert!(!session.is_active());
    assert!(!session.rabbit.is_running());
    assert!(!session.reil.is_running());
}
