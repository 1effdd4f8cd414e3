use bevy::prelude::*;

use super::simulation::ApproachSimConfig;
use crate::{
    components::{FeatureToggles, LightingSystemType},
    resources::{ApproachKind, ApproachMinimum, VisibilityUnit},
    utils::{MAX_APPROACH_SPEED_KT, MIN_APPROACH_SPEED_KT},
};

/// The active approach scenario.
///
/// Only changed through the setters below; the animation loop reads it but
/// never writes it. Effective ceiling and visibility fall back to the
/// selected minimum whenever no override is set.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ApproachConfiguration {
    minimum: &'static ApproachMinimum,
    ceiling_override: Option<u32>,
    visibility_override: Option<f64>,
    visibility_unit_override: Option<VisibilityUnit>,
    lighting: LightingSystemType,
    approach_speed_kt: f64,
    toggles: FeatureToggles,
}

impl Default for ApproachConfiguration {
    fn default() -> Self {
        Self::from_sim_config(&ApproachSimConfig::default())
    }
}

impl ApproachConfiguration {
    pub fn from_sim_config(config: &ApproachSimConfig) -> Self {
        let mut approach = Self {
            minimum: ApproachMinimum::lookup(&config.minimum),
            ceiling_override: config.ceiling_override_ft,
            visibility_override: config.visibility_override,
            visibility_unit_override: config.visibility_unit_override,
            lighting: LightingSystemType::from_tag_or_none(&config.lighting),
            approach_speed_kt: MIN_APPROACH_SPEED_KT,
            toggles: config.toggles,
        };
        approach.set_approach_speed(config.approach_speed_kt);
        approach
    }

    pub fn minimum(&self) -> &'static ApproachMinimum {
        self.minimum
    }

    pub fn approach_kind(&self) -> ApproachKind {
        self.minimum.kind
    }

    pub fn lighting(&self) -> LightingSystemType {
        self.lighting
    }

    pub fn toggles(&self) -> &FeatureToggles {
        &self.toggles
    }

    pub fn approach_speed_kt(&self) -> f64 {
        self.approach_speed_kt
    }

    pub fn effective_ceiling_ft(&self) -> f64 {
        self.ceiling_override.unwrap_or(self.minimum.ceiling_ft) as f64
    }

    pub fn effective_visibility(&self) -> f64 {
        self.visibility_override.unwrap_or(self.minimum.visibility)
    }

    pub fn effective_visibility_unit(&self) -> VisibilityUnit {
        self.visibility_unit_override
            .unwrap_or(self.minimum.visibility_unit)
    }

    /// Selects a minimum by id; unknown ids resolve to the default minimum.
    pub fn select_minimum(&mut self, id: &str) {
        self.minimum = ApproachMinimum::lookup(id);
        info!("Selected approach minimum {}", self.minimum.label);
    }

    pub fn set_lighting(&mut self, lighting: LightingSystemType) {
        self.lighting = lighting;
    }

    pub fn set_lighting_tag(&mut self, tag: &str) {
        self.lighting = LightingSystemType::from_tag_or_none(tag);
    }

    pub fn set_toggles(&mut self, toggles: FeatureToggles) {
        self.toggles = toggles;
    }

    pub fn toggles_mut(&mut self) -> &mut FeatureToggles {
        &mut self.toggles
    }

    /// Sets the approach speed, clamped into the supported range.
    pub fn set_approach_speed(&mut self, knots: f64) {
        let clamped = knots.clamp(MIN_APPROACH_SPEED_KT, MAX_APPROACH_SPEED_KT);
        if clamped != knots {
            debug!("Approach speed {} kt clamped to {} kt", knots, clamped);
        }
        self.approach_speed_kt = clamped;
    }

    pub fn set_custom_ceiling(&mut self, ceiling_ft: Option<u32>) {
        self.ceiling_override = ceiling_ft;
    }

    pub fn set_custom_visibility(&mut self, visibility: Option<f64>) {
        self.visibility_override = visibility.map(|v| v.max(0.0));
    }

    pub fn set_custom_visibility_unit(&mut self, unit: Option<VisibilityUnit>) {
        self.visibility_unit_override = unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_values_fall_back_to_minimum() {
        for minimum in ApproachMinimum::all() {
            let mut config = ApproachConfiguration::default();
            config.select_minimum(minimum.id);

            assert_eq!(config.effective_ceiling_ft(), minimum.ceiling_ft as f64);
            assert_eq!(config.effective_visibility(), minimum.visibility);
            assert_eq!(config.effective_visibility_unit(), minimum.visibility_unit);
        }
    }

    #[test]
    fn test_overrides_win_regardless_of_minimum() {
        let mut config = ApproachConfiguration::default();
        config.set_custom_ceiling(Some(330));
        config.set_custom_visibility(Some(0.75));
        config.set_custom_visibility_unit(Some(VisibilityUnit::StatuteMiles));

        for minimum in ApproachMinimum::all() {
            config.select_minimum(minimum.id);
            assert_eq!(config.effective_ceiling_ft(), 330.0);
            assert_eq!(config.effective_visibility(), 0.75);
            assert_eq!(
                config.effective_visibility_unit(),
                VisibilityUnit::StatuteMiles
            );
        }

        config.set_custom_ceiling(None);
        config.select_minimum("cat-ii");
        assert_eq!(config.effective_ceiling_ft(), 100.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut config = ApproachConfiguration::default();
        config.set_approach_speed(20.0);
        assert_eq!(config.approach_speed_kt(), MIN_APPROACH_SPEED_KT);
        config.set_approach_speed(400.0);
        assert_eq!(config.approach_speed_kt(), MAX_APPROACH_SPEED_KT);
        config.set_approach_speed(140.0);
        assert_eq!(config.approach_speed_kt(), 140.0);
    }

    #[test]
    fn test_unknown_lighting_tag_resolves_to_none() {
        let mut config = ApproachConfiguration::default();
        config.set_lighting_tag("MALSR");
        assert_eq!(config.lighting(), LightingSystemType::Malsr);
        config.set_lighting_tag("NOT-A-SYSTEM");
        assert_eq!(config.lighting(), LightingSystemType::None);
    }
}
