mod approach;
mod events;
mod lighting;
mod staging;

pub use approach::ApproachPlugin;
pub use events::{ApproachCommand, BreakoutEvent, LandedEvent};
pub use lighting::LightingPlugin;
pub use staging::{ApproachSequencePlugin, ApproachSet};
