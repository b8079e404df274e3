use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Recoil weight fraction must lie in [0, 1], got {value}")]
    WeightOutOfRange { value: f64 },

    #[error("Isolation annulus requires 0 <= dr_min < dr_max, got ({dr_min}, {dr_max})")]
    InvalidAnnulus { dr_min: f64, dr_max: f64 },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which four-momentum each resonance leg contributes during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KinematicsSource {
    /// The leg's own reconstructed momentum and mass.
    #[default]
    Reconstructed,
    /// The momentum and mass of the leg's truth-matched particle, resolved
    /// through the track-to-truth association.
    TruthMatched,
}

/// What happens when a leg's track has no truth association under
/// [`KinematicsSource::TruthMatched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTruthPolicy {
    /// Surface the failed lookup as an error for the event.
    #[default]
    Reject,
    /// Fall back to the leg's reconstructed kinematics.
    UseReconstructed,
    /// Drop the affected pair from consideration.
    SkipPair,
}

/// Immutable configuration of the resonance-candidate selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResonanceConfig {
    /// Target resonance mass in GeV.
    pub resonance_mass: f64,
    /// Target recoil mass in GeV.
    pub recoil_mass: f64,
    /// Weight of the recoil-mass deviation in the distance, in [0, 1].
    pub recoil_weight: f64,
    /// Center-of-mass energy in GeV, defining the beam four-vector.
    pub ecm: f64,
    #[serde(default)]
    pub kinematics: KinematicsSource,
    #[serde(default)]
    pub on_missing_truth: MissingTruthPolicy,
}

impl ResonanceConfig {
    pub fn builder() -> ResonanceConfigBuilder {
        ResonanceConfigBuilder::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.recoil_weight) {
            return Err(ConfigError::WeightOutOfRange {
                value: self.recoil_weight,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ResonanceConfigBuilder {
    resonance_mass: Option<f64>,
    recoil_mass: Option<f64>,
    recoil_weight: Option<f64>,
    ecm: Option<f64>,
    kinematics: Option<KinematicsSource>,
    on_missing_truth: Option<MissingTruthPolicy>,
}

impl ResonanceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resonance_mass(mut self, mass: f64) -> Self {
        self.resonance_mass = Some(mass);
        self
    }
    pub fn recoil_mass(mut self, mass: f64) -> Self {
        self.recoil_mass = Some(mass);
        self
    }
    pub fn recoil_weight(mut self, weight: f64) -> Self {
        self.recoil_weight = Some(weight);
        self
    }
    pub fn ecm(mut self, ecm: f64) -> Self {
        self.ecm = Some(ecm);
        self
    }
    pub fn kinematics(mut self, source: KinematicsSource) -> Self {
        self.kinematics = Some(source);
        self
    }
    pub fn on_missing_truth(mut self, policy: MissingTruthPolicy) -> Self {
        self.on_missing_truth = Some(policy);
        self
    }

    pub fn build(self) -> Result<ResonanceConfig, ConfigError> {
        let config = ResonanceConfig {
            resonance_mass: self
                .resonance_mass
                .ok_or(ConfigError::MissingParameter("resonance_mass"))?,
            recoil_mass: self
                .recoil_mass
                .ok_or(ConfigError::MissingParameter("recoil_mass"))?,
            recoil_weight: self
                .recoil_weight
                .ok_or(ConfigError::MissingParameter("recoil_weight"))?,
            ecm: self.ecm.ok_or(ConfigError::MissingParameter("ecm"))?,
            kinematics: self.kinematics.unwrap_or_default(),
            on_missing_truth: self.on_missing_truth.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Immutable configuration of the cone-isolation annulus.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsolationConfig {
    /// Inner ΔR bound, exclusive.
    pub dr_min: f64,
    /// Outer ΔR bound, exclusive.
    pub dr_max: f64,
}

impl IsolationConfig {
    pub fn new(dr_min: f64, dr_max: f64) -> Result<Self, ConfigError> {
        let config = Self { dr_min, dr_max };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dr_min >= 0.0 && self.dr_min < self.dr_max) {
            return Err(ConfigError::InvalidAnnulus {
                dr_min: self.dr_min,
                dr_max: self.dr_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_a_complete_config() {
        let config = ResonanceConfig::builder()
            .resonance_mass(91.2)
            .recoil_mass(125.0)
            .recoil_weight(0.4)
            .ecm(240.0)
            .kinematics(KinematicsSource::TruthMatched)
            .on_missing_truth(MissingTruthPolicy::UseReconstructed)
            .build()
            .unwrap();

        assert_eq!(config.resonance_mass, 91.2);
        assert_eq!(config.recoil_mass, 125.0);
        assert_eq!(config.recoil_weight, 0.4);
        assert_eq!(config.ecm, 240.0);
        assert_eq!(config.kinematics, KinematicsSource::TruthMatched);
        assert_eq!(config.on_missing_truth, MissingTruthPolicy::UseReconstructed);
    }

    #[test]
    fn builder_defaults_the_kinematics_source_and_truth_policy() {
        let config = ResonanceConfig::builder()
            .resonance_mass(91.2)
            .recoil_mass(125.0)
            .recoil_weight(0.5)
            .ecm(240.0)
            .build()
            .unwrap();

        assert_eq!(config.kinematics, KinematicsSource::Reconstructed);
        assert_eq!(config.on_missing_truth, MissingTruthPolicy::Reject);
    }

    #[test]
    fn builder_reports_the_first_missing_parameter() {
        let result = ResonanceConfig::builder().recoil_mass(125.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("resonance_mass"))
        ));
    }

    #[test]
    fn recoil_weight_outside_the_unit_interval_is_rejected() {
        let result = ResonanceConfig::builder()
            .resonance_mass(91.2)
            .recoil_mass(125.0)
            .recoil_weight(1.5)
            .ecm(240.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::WeightOutOfRange { value }) if value == 1.5
        ));
    }

    #[test]
    fn resonance_config_parses_from_toml() {
        let config = ResonanceConfig::from_toml_str(
            r#"
            resonance_mass = 91.2
            recoil_mass = 125.0
            recoil_weight = 0.5
            ecm = 240.0
            kinematics = "truth_matched"
            on_missing_truth = "skip_pair"
            "#,
        )
        .unwrap();

        assert_eq!(config.kinematics, KinematicsSource::TruthMatched);
        assert_eq!(config.on_missing_truth, MissingTruthPolicy::SkipPair);
    }

    #[test]
    fn toml_validation_applies_after_parsing() {
        let result = ResonanceConfig::from_toml_str(
            r#"
            resonance_mass = 91.2
            recoil_mass = 125.0
            recoil_weight = -0.1
            ecm = 240.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::WeightOutOfRange { .. })));
    }

    #[test]
    fn unknown_toml_fields_are_rejected() {
        let result = ResonanceConfig::from_toml_str(
            r#"
            resonance_mass = 91.2
            recoil_mass = 125.0
            recoil_weight = 0.5
            ecm = 240.0
            chi2 = 3.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn isolation_config_requires_an_ordered_annulus() {
        assert!(IsolationConfig::new(0.01, 0.5).is_ok());
        assert!(matches!(
            IsolationConfig::new(0.5, 0.5),
            Err(ConfigError::InvalidAnnulus { .. })
        ));
        assert!(matches!(
            IsolationConfig::new(-0.1, 0.5),
            Err(ConfigError::InvalidAnnulus { .. })
        ));
    }

    #[test]
    fn isolation_config_parses_from_toml() {
        let config = IsolationConfig::from_toml_str("dr_min = 0.01\ndr_max = 0.5\n").unwrap();
        assert_eq!(config.dr_min, 0.01);
        assert_eq!(config.dr_max, 0.5);
    }
}
