use bevy::{prelude::*, time::TimeUpdateStrategy};
use std::time::Duration;

use approach::{
    plugins::{ApproachCommand, ApproachPlugin, BreakoutEvent, LandedEvent, LightingPlugin},
    resources::ApproachSimConfig,
};

/// Every transition event seen since the app was built
#[derive(Resource, Default, Debug)]
pub struct RecordedEvents {
    pub breakouts: Vec<BreakoutEvent>,
    pub landings: Vec<LandedEvent>,
}

fn record_events(
    mut breakouts: EventReader<BreakoutEvent>,
    mut landings: EventReader<LandedEvent>,
    mut recorded: ResMut<RecordedEvents>,
) {
    recorded.breakouts.extend(breakouts.read().copied());
    recorded.landings.extend(landings.read().copied());
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: ApproachSimConfig,
    with_lighting: bool,
    frame: Duration,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: ApproachSimConfig::default(),
            with_lighting: true,
            frame: Duration::from_millis(10),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ApproachSimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_minimum(mut self, id: &str) -> Self {
        self.config.minimum = id.to_string();
        self
    }

    pub fn with_lighting(mut self, tag: &str) -> Self {
        self.config.lighting = tag.to_string();
        self
    }

    pub fn with_speed(mut self, knots: f64) -> Self {
        self.config.approach_speed_kt = knots;
        self
    }

    pub fn with_test_mode(mut self) -> Self {
        self.config.diagnostics.test_mode = true;
        self
    }

    pub fn without_lighting(mut self) -> Self {
        self.with_lighting = false;
        self
    }

    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame))
            .add_plugins(ApproachPlugin::new(self.config))
            .init_resource::<RecordedEvents>()
            .add_systems(Last, record_events);

        if self.with_lighting {
            app.add_plugins(LightingPlugin);
        }

        // The first update only initialises the clocks; deltas start on the second
        app.update();

        TestApp {
            app,
            frame: self.frame,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub frame: Duration,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Runs whole frames covering at least `duration`.
    pub fn run_for(&mut self, duration: Duration) {
        let steps = duration.as_nanos().div_ceil(self.frame.as_nanos()) as usize;
        self.run_steps(steps);
    }

    pub fn send(&mut self, command: ApproachCommand) {
        self.app.world_mut().send_event(command);
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn recorded(&self) -> &RecordedEvents {
        self.resource::<RecordedEvents>()
    }

    pub fn query_all<T: Component + Clone>(&mut self) -> Vec<T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).cloned().collect()
    }

    pub fn query_with<T: Component + Clone, U: Component + Clone>(&mut self) -> Vec<(T, U)> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&T, &U)>();
        query
            .iter(world)
            .map(|(t, u)| (t.clone(), u.clone()))
            .collect()
    }
}
