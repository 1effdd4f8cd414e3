mod advance;
mod transport;

pub use advance::{advance_approach_system, sync_animation_with_config};
pub use transport::handle_approach_commands;
