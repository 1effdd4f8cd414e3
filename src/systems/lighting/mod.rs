mod flashers;
mod rebuild;

pub use flashers::{rabbit_flasher_system, reil_flasher_system};
pub use rebuild::{dispose_lighting_on_exit, rebuild_lighting_system};
