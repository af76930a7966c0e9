//! Monitor configuration.
//!
//! Defines the recognized monitor options and welfare thresholds, with TOML
//! loading for deployments that keep them on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, MonitorResult};

/// Default number of states kept for indicator context.
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;

/// Theories the indicator set draws from. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theory {
    /// Global workspace theory.
    #[serde(rename = "GWT")]
    GlobalWorkspace,
    /// Integrated information theory.
    #[serde(rename = "IIT")]
    IntegratedInformation,
    /// Recurrent processing theory.
    #[serde(rename = "RPT")]
    RecurrentProcessing,
    /// Higher-order theory.
    #[serde(rename = "HOT")]
    HigherOrder,
    /// Attention schema theory.
    #[serde(rename = "AST")]
    AttentionSchema,
}

impl Theory {
    pub const ALL: [Theory; 5] = [
        Theory::GlobalWorkspace,
        Theory::IntegratedInformation,
        Theory::RecurrentProcessing,
        Theory::HigherOrder,
        Theory::AttentionSchema,
    ];
}

/// Configuration for a [`ConsciousnessMonitor`](crate::ConsciousnessMonitor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Expected sampling rate in Hz. Informational, never enforced.
    pub measurement_rate_hz: f64,

    /// Theories in play. Informational, not used in computation.
    pub theories: Vec<Theory>,

    /// Whether the caller intends to persist proof hashes.
    ///
    /// Hashes are computed and recorded either way.
    pub proof_chain: bool,

    /// Capacity of the bounded state buffer.
    pub buffer_capacity: usize,

    /// Thresholds for welfare rules.
    pub welfare: WelfareThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            measurement_rate_hz: 10.0,
            theories: Theory::ALL.to_vec(),
            proof_chain: true,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            welfare: WelfareThresholds::default(),
        }
    }
}

impl MonitorConfig {
    /// Set the state buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_proof_chain(mut self, enabled: bool) -> Self {
        self.proof_chain = enabled;
        self
    }

    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> MonitorResult<Self> {
        let config: MonitorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> MonitorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> MonitorResult<()> {
        if self.buffer_capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "buffer_capacity must be at least 1".into(),
            ));
        }
        if !self.measurement_rate_hz.is_finite() || self.measurement_rate_hz <= 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "measurement_rate_hz must be positive, got {}",
                self.measurement_rate_hz
            )));
        }
        self.welfare.validate()
    }
}

/// Thresholds for the welfare rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelfareThresholds {
    /// Error counts above this raise a distress concern.
    pub max_error_count: u64,

    /// Battery levels below this are critical.
    pub critical_battery: f64,

    /// Any sensor health below this counts as degraded.
    pub degraded_sensor_health: f64,

    /// Current scores below this may count as a sudden drop.
    pub drop_score: f64,

    /// Prior scores must all exceed this for a drop to count.
    pub drop_baseline: f64,

    /// Number of prior assessments the drop rule looks back over.
    pub drop_window: usize,
}

impl Default for WelfareThresholds {
    fn default() -> Self {
        Self {
            max_error_count: 50,
            critical_battery: 0.15,
            degraded_sensor_health: 0.3,
            drop_score: 0.3,
            drop_baseline: 0.5,
            drop_window: 3,
        }
    }
}

impl WelfareThresholds {
    fn validate(&self) -> MonitorResult<()> {
        let fractions = [
            ("critical_battery", self.critical_battery),
            ("degraded_sensor_health", self.degraded_sensor_health),
            ("drop_score", self.drop_score),
            ("drop_baseline", self.drop_baseline),
        ];
        for (name, value) in fractions {
            if !value.is_finite() {
                return Err(MonitorError::InvalidConfig(format!(
                    "welfare.{name} must be finite"
                )));
            }
        }
        if self.drop_window == 0 {
            return Err(MonitorError::InvalidConfig(
                "welfare.drop_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.measurement_rate_hz, 10.0);
        assert_eq!(config.theories.len(), 5);
        assert!(config.proof_chain);
        assert_eq!(config.buffer_capacity, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = MonitorConfig::default().with_buffer_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(MonitorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_rate_rejected() {
        let config = MonitorConfig {
            measurement_rate_hz: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MonitorConfig {
            measurement_rate_hz: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MonitorConfig::from_toml_str(
            r#"
            buffer_capacity = 20
            theories = ["GWT", "IIT"]

            [welfare]
            critical_battery = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.buffer_capacity, 20);
        assert_eq!(
            config.theories,
            vec![Theory::GlobalWorkspace, Theory::IntegratedInformation]
        );
        assert_eq!(config.welfare.critical_battery, 0.2);
        assert_eq!(config.welfare.max_error_count, 50);
        assert!(config.proof_chain);
    }

    #[test]
    fn test_invalid_toml() {
        let result = MonitorConfig::from_toml_str("buffer_capacity = \"lots\"");
        assert!(matches!(result, Err(MonitorError::ConfigParse(_))));
    }

    #[test]
    fn test_toml_capacity_validated() {
        let result = MonitorConfig::from_toml_str("buffer_capacity = 0");
        assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = MonitorConfig::load("/nonexistent/orion/monitor.toml");
        assert!(matches!(result, Err(MonitorError::Io(_))));
    }
}
