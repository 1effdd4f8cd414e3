use bevy::prelude::*;
use std::time::Duration;

use crate::{
    components::{FeatureToggles, FixtureSet, LightingSystemType},
    utils::{RABBIT_SWEEP_MS, REIL_TOGGLE_MS},
};

/// Round-robin driver for the sequenced flashers.
///
/// One full sweep takes `RABBIT_SWEEP_MS` however many steps there are.
/// Steps are indexed nearest the threshold first; the sweep runs from the
/// last step down to step 0 and wraps.
#[derive(Debug, Clone, Default)]
pub struct RabbitScheduler {
    timer: Option<Timer>,
    step_count: usize,
    next_step: usize,
    active_step: Option<usize>,
}

impl RabbitScheduler {
    /// Cancels any running sweep and starts a new one over `step_count` steps.
    pub fn start(&mut self, step_count: usize) {
        self.stop();
        if step_count == 0 {
            return;
        }
        let period = Duration::from_millis(RABBIT_SWEEP_MS) / step_count as u32;
        self.timer = Some(Timer::new(period, TimerMode::Repeating));
        self.step_count = step_count;
        self.next_step = step_count - 1;
    }

    pub fn stop(&mut self) {
        self.timer = None;
        self.step_count = 0;
        self.next_step = 0;
        self.active_step = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.duration())
    }

    pub fn active_step(&self) -> Option<usize> {
        self.active_step
    }

    /// Advances the wall clock. Returns the step to show when one or more
    /// periods elapsed; all other steps are dark.
    pub fn tick(&mut self, delta: Duration) -> Option<usize> {
        let timer = self.timer.as_mut()?;
        timer.tick(delta);
        let fired = timer.times_finished_this_tick();
        if fired == 0 {
            return None;
        }

        let mut shown = self.next_step;
        for _ in 0..fired {
            shown = self.next_step;
            self.next_step = if self.next_step == 0 {
                self.step_count - 1
            } else {
                self.next_step - 1
            };
        }
        self.active_step = Some(shown);
        self.active_step
    }
}

/// 2 Hz on/off blink shared by both REIL strobes.
#[derive(Debug, Clone, Default)]
pub struct ReilFlasher {
    timer: Option<Timer>,
    lit: bool,
}

impl ReilFlasher {
    /// Cancels any running blink and starts lit.
    pub fn start(&mut self) {
        self.stop();
        self.timer = Some(Timer::new(
            Duration::from_millis(REIL_TOGGLE_MS),
            TimerMode::Repeating,
        ));
        self.lit = true;
    }

    pub fn stop(&mut self) {
        self.timer = None;
        self.lit = false;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Returns the new state when it changed during this tick.
    pub fn tick(&mut self, delta: Duration) -> Option<bool> {
        let timer = self.timer.as_mut()?;
        timer.tick(delta);
        if timer.times_finished_this_tick() % 2 == 1 {
            self.lit = !self.lit;
            Some(self.lit)
        } else {
            None
        }
    }
}

/// The active light layout and everything spawned or scheduled for it.
///
/// A new layout always supersedes the previous one completely: the caller
/// despawns the entities returned by [`LightingSession::dispose`] before
/// installing the next set. After [`LightingSession::shut_down`] nothing is
/// rebuilt or rescheduled again.
#[derive(Resource, Debug, Default)]
pub struct LightingSession {
    built_for: Option<(LightingSystemType, FeatureToggles)>,
    fixtures: Option<FixtureSet>,
    /// Parallel to `fixtures`
    fixture_entities: Vec<Entity>,
    marking_entities: Vec<Entity>,
    pub rabbit: RabbitScheduler,
    pub reil: ReilFlasher,
    torn_down: bool,
}

impl LightingSession {
    pub fn needs_rebuild(&self, system: LightingSystemType, toggles: &FeatureToggles) -> bool {
        !self.torn_down && self.built_for != Some((system, *toggles))
    }

    pub fn fixtures(&self) -> Option<&FixtureSet> {
        self.fixtures.as_ref()
    }

    pub fn fixture_entity(&self, index: usize) -> Option<Entity> {
        self.fixture_entities.get(index).copied()
    }

    pub fn fixture_entities(&self) -> &[Entity] {
        &self.fixture_entities
    }

    pub fn marking_entities(&self) -> &[Entity] {
        &self.marking_entities
    }

    /// Takes ownership of a freshly spawned layout and restarts both flashers.
    pub fn install(
        &mut self,
        toggles: FeatureToggles,
        fixtures: FixtureSet,
        fixture_entities: Vec<Entity>,
        marking_entities: Vec<Entity>,
    ) {
        self.rabbit.start(fixtures.sequenced_flashers().len());
        if fixtures.reil_indices().is_empty() {
            self.reil.stop();
        } else {
            self.reil.start();
        }
        self.built_for = Some((fixtures.system, toggles));
        self.fixtures = Some(fixtures);
        self.fixture_entities = fixture_entities;
        self.marking_entities = marking_entities;
    }

    /// Cancels both flashers and hands back every entity to despawn.
    pub fn dispose(&mut self) -> Vec<Entity> {
        self.rabbit.stop();
        self.reil.stop();
        self.built_for = None;
        self.fixtures = None;
        let mut entities = std::mem::take(&mut self.fixture_entities);
        entities.append(&mut self.marking_entities);
        entities
    }

    /// Final teardown: disposes the layout and blocks any later rebuild.
    pub fn shut_down(&mut self) -> Vec<Entity> {
        self.torn_down = true;
        self.dispose()
    }

    pub fn is_shut_down(&self) -> bool {
        self.torn_down
    }

    pub fn is_active(&self) -> bool {
        self.fixtures.is_some()
    }
}
