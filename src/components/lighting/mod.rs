mod alsf;
mod builder;
mod catalog;
mod fixture;
mod mals;
mod odals;
mod runway;
mod ssalr;
mod types;

pub use alsf::{AlsfI, AlsfII};
pub use builder::{stations, LayoutBuilder, SideBarrettes};
pub use catalog::{ApproachLightingSystem, LightingLayoutCatalog, NoApproachLights, SystemConfig};
pub use fixture::{FixtureSet, LightColor, LightFixture, LightRole};
pub use mals::{Mals, Malsf, Malsr};
pub use odals::Odals;
pub use runway::add_runway_lights;
pub use ssalr::Ssalr;
pub use types::{FeatureToggles, LightingSystemType};
