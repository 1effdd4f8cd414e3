pub mod approach;
pub mod simulation;

pub use approach::ApproachConfiguration;
pub use simulation::{ApproachSimConfig, DiagnosticFlags};
