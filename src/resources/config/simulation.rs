use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    components::FeatureToggles,
    resources::{VisibilityUnit, DEFAULT_MINIMUM_ID},
    utils::{SimError, DEFAULT_APPROACH_SPEED_KT, TEST_MODE_TIME_MULTIPLIER},
};

/// Switches for automated end-to-end runs.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticFlags {
    /// Runs the simulation clock faster by a fixed multiplier
    pub test_mode: bool,
}

impl DiagnosticFlags {
    /// Parses url-query style flags such as `?test=true&foo=bar`.
    ///
    /// A bare `test` key, `1`, `true`, `yes` and `on` all enable test mode.
    pub fn from_query(query: &str) -> Self {
        let test_mode = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next()?.trim();
                let value = parts.next().map(str::trim);
                (key == "test").then_some(value)
            })
            .any(|value| match value {
                None | Some("") => true,
                Some(v) => matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
            });

        Self { test_mode }
    }

    pub fn time_multiplier(&self) -> f64 {
        if self.test_mode {
            TEST_MODE_TIME_MULTIPLIER
        } else {
            1.0
        }
    }
}

/// Initial scenario settings, loadable from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproachSimConfig {
    pub minimum: String,
    pub approach_speed_kt: f64,
    pub lighting: String,
    pub toggles: FeatureToggles,
    pub ceiling_override_ft: Option<u32>,
    pub visibility_override: Option<f64>,
    pub visibility_unit_override: Option<VisibilityUnit>,
    pub diagnostics: DiagnosticFlags,
}

impl Default for ApproachSimConfig {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_ID.to_string(),
            approach_speed_kt: DEFAULT_APPROACH_SPEED_KT,
            lighting: "ALSF-II".to_string(),
            toggles: FeatureToggles::default(),
            ceiling_override_ft: None,
            visibility_override: None,
            visibility_unit_override: None,
            diagnostics: DiagnosticFlags::default(),
        }
    }
}

impl ApproachSimConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Rejects settings that would otherwise be silently corrected.
    pub fn validate(&self) -> Result<(), SimError> {
        crate::resources::ApproachMinimum::try_lookup(&self.minimum)?;
        self.lighting
            .parse::<crate::components::LightingSystemType>()?;
        if !self.approach_speed_kt.is_finite() || self.approach_speed_kt <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "approach speed must be positive, got {}",
                self.approach_speed_kt
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ApproachSimConfig::default();
        assert_eq!(config.minimum, "cat-i");
        assert_eq!(config.approach_speed_kt, 120.0);
        assert!(!config.diagnostics.test_mode);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> Result<(), SimError> {
        let mut config = ApproachSimConfig::default();
        config.lighting = "ODALS".to_string();
        config.ceiling_override_ft = Some(300);
        config.toggles.papi = false;

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;
        assert!(fs::metadata(temp_file.path()).is_ok());

        let loaded = ApproachSimConfig::load(temp_file.path())?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ApproachSimConfig =
            serde_yaml::from_str("minimum: lnav\nlighting: MALSR\n").unwrap();
        assert_eq!(config.minimum, "lnav");
        assert_eq!(config.approach_speed_kt, 120.0);
        assert_eq!(config.toggles, FeatureToggles::default());
    }

    #[test]
    fn test_invalid_config_load() {
        let result = ApproachSimConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(SimError::Io(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_tags() {
        let mut config = ApproachSimConfig::default();
        config.lighting = "HIALS".to_string();
        assert!(matches!(
            config.validate(),
            Err(SimError::UnknownLightingSystem(_))
        ));

        let mut config = ApproachSimConfig::default();
        config.minimum = "cat-iv".to_string();
        assert!(matches!(config.validate(), Err(SimError::UnknownMinimum(_))));
    }

    #[test]
    fn test_diagnostic_flags_from_query() {
        assert!(DiagnosticFlags::from_query("?test=true").test_mode);
        assert!(DiagnosticFlags::from_query("foo=bar&test=1").test_mode);
        assert!(DiagnosticFlags::from_query("test").test_mode);
        assert!(!DiagnosticFlags::from_query("?test=false").test_mode);
        assert!(!DiagnosticFlags::from_query("?testing=true").test_mode);
        assert!(!DiagnosticFlags::from_query("").test_mode);
        assert_eq!(DiagnosticFlags::from_query("test=on").time_multiplier(), 10.0);
        assert_eq!(DiagnosticFlags::default().time_multiplier(), 1.0);
    }
}
