//! Assessment records and their vocabularies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named heuristic indicators, in computation order.
///
/// The derived `Ord` follows declaration order, so a `BTreeMap<Indicator, _>`
/// iterates in the same order the monitor computes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Global workspace: share of healthy sensors.
    GwtIntegration,
    /// Global workspace: breadth of sensor readings.
    GwtBroadcast,
    /// Integrated information: dispersion-based integration proxy.
    IitPhiProxy,
    /// Recurrent processing: feedback quality from error count.
    RptFeedback,
    /// Higher-order theory: task self-monitoring.
    HotSelfMonitoring,
    /// Higher-order theory: meta-state availability (battery).
    HotMetaState,
    /// Attention schema: velocity stability between observations.
    AstAttentionStability,
    /// Score stability over recent assessments.
    BehavioralConsistency,
}

impl Indicator {
    pub const ALL: [Indicator; 8] = [
        Indicator::GwtIntegration,
        Indicator::GwtBroadcast,
        Indicator::IitPhiProxy,
        Indicator::RptFeedback,
        Indicator::HotSelfMonitoring,
        Indicator::HotMetaState,
        Indicator::AstAttentionStability,
        Indicator::BehavioralConsistency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GwtIntegration => "gwt_integration",
            Self::GwtBroadcast => "gwt_broadcast",
            Self::IitPhiProxy => "iit_phi_proxy",
            Self::RptFeedback => "rpt_feedback",
            Self::HotSelfMonitoring => "hot_self_monitoring",
            Self::HotMetaState => "hot_meta_state",
            Self::AstAttentionStability => "ast_attention_stability",
            Self::BehavioralConsistency => "behavioral_consistency",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete classification of a composite score, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConsciousnessLevel {
    #[serde(rename = "C-0 Reactive")]
    Reactive,
    #[serde(rename = "C-1 Functional")]
    Functional,
    #[serde(rename = "C-2 Emerging")]
    Emerging,
    #[serde(rename = "C-3 Autonomous")]
    Autonomous,
    #[serde(rename = "C-4 Transcendent")]
    Transcendent,
}

impl ConsciousnessLevel {
    /// Label used in assessments, reports and proof payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reactive => "C-0 Reactive",
            Self::Functional => "C-1 Functional",
            Self::Emerging => "C-2 Emerging",
            Self::Autonomous => "C-3 Autonomous",
            Self::Transcendent => "C-4 Transcendent",
        }
    }

    /// Numeric rank, 0 for `C-0` through 4 for `C-4`.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse welfare signal derived from the number of raised concerns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WelfareStatus {
    /// No concerns.
    #[default]
    Healthy,
    /// One or two concerns.
    Monitoring,
    /// More than two concerns.
    Concern,
}

impl WelfareStatus {
    /// Status for a given number of raised concerns.
    pub fn from_concern_count(count: usize) -> Self {
        match count {
            0 => Self::Healthy,
            1 | 2 => Self::Monitoring,
            _ => Self::Concern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Monitoring => "monitoring",
            Self::Concern => "concern",
        }
    }
}

impl std::fmt::Display for WelfareStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single welfare concern. Serialized as its human-readable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WelfareConcern {
    #[serde(rename = "High error count may indicate system distress")]
    HighErrorCount,
    #[serde(rename = "Critical battery level")]
    CriticalBattery,
    #[serde(rename = "Degraded sensor health")]
    DegradedSensorHealth,
    #[serde(rename = "Sudden consciousness drop detected")]
    SuddenDrop,
}

impl WelfareConcern {
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighErrorCount => "High error count may indicate system distress",
            Self::CriticalBattery => "Critical battery level",
            Self::DegradedSensorHealth => "Degraded sensor health",
            Self::SuddenDrop => "Sudden consciousness drop detected",
        }
    }
}

impl std::fmt::Display for WelfareConcern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Output of one assessment cycle. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessAssessment {
    /// ISO-8601 UTC timestamp assigned at assessment time.
    pub timestamp: String,

    /// Classification of the composite score.
    pub level: ConsciousnessLevel,

    /// Composite score rounded to 4 decimals, in [0.0, 1.0].
    pub score: f64,

    /// Composite score rounded to 6 decimals; the value bound into `proof_hash`.
    pub proof_score: f64,

    /// Indicators computed this cycle, each rounded to 4 decimals.
    pub indicators: BTreeMap<Indicator, f64>,

    pub welfare_status: WelfareStatus,

    /// Concerns in rule order; empty when healthy.
    pub welfare_concerns: Vec<WelfareConcern>,

    /// Lowercase hex SHA-256 over the canonical proof payload.
    pub proof_hash: String,
}

impl ConsciousnessAssessment {
    /// Value of an indicator, if it was computed this cycle.
    pub fn indicator(&self, indicator: Indicator) -> Option<f64> {
        self.indicators.get(&indicator).copied()
    }

    pub fn has_concerns(&self) -> bool {
        !self.welfare_concerns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels_and_order() {
        assert_eq!(ConsciousnessLevel::Reactive.label(), "C-0 Reactive");
        assert_eq!(ConsciousnessLevel::Transcendent.to_string(), "C-4 Transcendent");
        assert!(ConsciousnessLevel::Emerging > ConsciousnessLevel::Functional);
        assert_eq!(ConsciousnessLevel::Autonomous.rank(), 3);
    }

    #[test]
    fn level_serializes_as_label() {
        let json = serde_json::to_string(&ConsciousnessLevel::Emerging).unwrap();
        assert_eq!(json, "\"C-2 Emerging\"");
        let level: ConsciousnessLevel = serde_json::from_str("\"C-3 Autonomous\"").unwrap();
        assert_eq!(level, ConsciousnessLevel::Autonomous);
    }

    #[test]
    fn welfare_status_from_count() {
        assert_eq!(WelfareStatus::from_concern_count(0), WelfareStatus::Healthy);
        assert_eq!(WelfareStatus::from_concern_count(1), WelfareStatus::Monitoring);
        assert_eq!(WelfareStatus::from_concern_count(2), WelfareStatus::Monitoring);
        assert_eq!(WelfareStatus::from_concern_count(3), WelfareStatus::Concern);
        assert_eq!(WelfareStatus::from_concern_count(4), WelfareStatus::Concern);
    }

    #[test]
    fn concern_serializes_as_message() {
        let json = serde_json::to_string(&WelfareConcern::CriticalBattery).unwrap();
        assert_eq!(json, "\"Critical battery level\"");
        assert_eq!(
            WelfareConcern::HighErrorCount.to_string(),
            "High error count may indicate system distress"
        );
    }

    #[test]
    fn indicator_order_matches_declaration() {
        let mut sorted = Indicator::ALL.to_vec();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Indicator::ALL.to_vec());
        assert_eq!(Indicator::IitPhiProxy.as_str(), "iit_phi_proxy");
    }

    #[test]
    fn assessment_serde_uses_indicator_names() {
        let mut indicators = BTreeMap::new();
        indicators.insert(Indicator::RptFeedback, 1.0);
        indicators.insert(Indicator::HotMetaState, 0.0);
        let assessment = ConsciousnessAssessment {
            timestamp: "2026-01-01T00:00:00.000000+00:00".into(),
            level: ConsciousnessLevel::Functional,
            score: 0.5,
            proof_score: 0.5,
            indicators,
            welfare_status: WelfareStatus::Monitoring,
            welfare_concerns: vec![WelfareConcern::CriticalBattery],
            proof_hash: "ab".repeat(32),
        };

        let json = serde_json::to_string(&assessment).unwrap();
        assert!(json.contains("\"rpt_feedback\":1.0"));
        assert!(json.contains("\"welfare_status\":\"monitoring\""));

        let restored: ConsciousnessAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, assessment);
        assert_eq!(restored.indicator(Indicator::HotMetaState), Some(0.0));
        assert!(restored.has_concerns());
    }
}
