mod animation;
mod cockpit;
pub mod config;
mod flashers;
mod fog;
mod minimums;
mod papi;

pub use animation::{
    altitude_at, min_landing_distance_nm, starting_distance_nm, AnimationPhase, AnimationState,
    PositionUpdate,
};
pub use cockpit::CockpitView;
pub use config::{ApproachConfiguration, ApproachSimConfig, DiagnosticFlags};
pub use flashers::{LightingSession, RabbitScheduler, ReilFlasher};
pub use fog::{FogModel, FogSettings};
pub use minimums::{
    ApproachKind, ApproachMinimum, VisibilityUnit, APPROACH_MINIMUMS, DEFAULT_MINIMUM_ID,
};
pub use papi::{red_count_for_angle, PapiEvaluator, PapiLightColor, PapiState};
