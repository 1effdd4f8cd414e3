pub mod lighting;
pub mod markings;

pub use lighting::{
    ApproachLightingSystem, FeatureToggles, FixtureSet, LayoutBuilder, LightColor, LightFixture,
    LightRole, LightingLayoutCatalog, LightingSystemType, SystemConfig,
};
pub use markings::{MarkingKind, MarkingStripe, RunwayMarkings};
