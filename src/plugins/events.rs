use bevy::prelude::*;

/// Transport controls for the approach animation.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ApproachCommand {
    Play,
    Pause,
    Stop,
    Reset,
    /// Manual scrub to a distance from the TDZ [NM]
    SetDistance(f64),
}

/// The aircraft reached the cloud base for the first time this approach.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BreakoutEvent {
    pub altitude_ft: f64,
    pub distance_nm: f64,
}

/// The aircraft reached the landing floor and the animation stopped.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LandedEvent {
    pub distance_nm: f64,
}
