mod approach;
mod derived;
mod lighting;

pub use approach::{advance_approach_system, handle_approach_commands, sync_animation_with_config};
pub use derived::{cockpit_view_system, fog_system, papi_system};
pub use lighting::{
    dispose_lighting_on_exit, rabbit_flasher_system, rebuild_lighting_system, reil_flasher_system,
};
