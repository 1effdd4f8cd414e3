use serde::{Deserialize, Serialize};

use super::{
    alsf::{AlsfI, AlsfII},
    builder::LayoutBuilder,
    mals::{Mals, Malsf, Malsr},
    odals::Odals,
    runway::add_runway_lights,
    ssalr::Ssalr,
    FeatureToggles, FixtureSet, LightingSystemType,
};

/// Static properties of an approach lighting system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub has_sequenced_flashers: bool,
    /// Carries its own threshold bar; generic threshold lights are omitted
    pub has_threshold_bar: bool,
    /// Carries its own threshold flashers; generic REIL are omitted
    pub has_reil: bool,
    pub system_length_ft: f64,
}

/// Shared contract of every approach lighting configuration.
pub trait ApproachLightingSystem: Sync {
    fn config(&self) -> SystemConfig;

    /// Adds this system's lights to `layout`.
    fn build(&self, layout: &mut LayoutBuilder, toggles: &FeatureToggles);
}

/// Runway without approach lights.
pub struct NoApproachLights;

impl ApproachLightingSystem for NoApproachLights {
    fn config(&self) -> SystemConfig {
        SystemConfig::default()
    }

    fn build(&self, _layout: &mut LayoutBuilder, _toggles: &FeatureToggles) {}
}

static ALSF_I: AlsfI = AlsfI;
static ALSF_II: AlsfII = AlsfII;
static MALS: Mals = Mals;
static MALSF: Malsf = Malsf;
static MALSR: Malsr = Malsr;
static SSALR: Ssalr = Ssalr;
static ODALS: Odals = Odals;
static NONE: NoApproachLights = NoApproachLights;

impl LightingSystemType {
    /// Layout generator for this system type.
    pub fn layout(self) -> &'static dyn ApproachLightingSystem {
        match self {
            LightingSystemType::AlsfI => &ALSF_I,
            LightingSystemType::AlsfII => &ALSF_II,
            LightingSystemType::Mals => &MALS,
            LightingSystemType::Malsf => &MALSF,
            LightingSystemType::Malsr => &MALSR,
            LightingSystemType::Ssalr => &SSALR,
            LightingSystemType::Odals => &ODALS,
            LightingSystemType::None => &NONE,
        }
    }

    pub fn config(self) -> SystemConfig {
        self.layout().config()
    }
}

pub struct LightingLayoutCatalog;

impl LightingLayoutCatalog {
    /// Every light for an approach lighting system plus the toggled runway
    /// lights. Pure: equal inputs give equal sets.
    pub fn create(system: LightingSystemType, toggles: &FeatureToggles) -> FixtureSet {
        let generator = system.layout();
        let config = generator.config();

        let owner = (system != LightingSystemType::None).then_some(system);
        let mut layout = LayoutBuilder::new(owner);
        generator.build(&mut layout, toggles);

        layout.set_owner(None);
        add_runway_lights(&mut layout, &config, toggles);

        layout.finish(system, config)
    }
}
