//! Summary reports over the full assessment history.

use orion_consciousness_types::{ConsciousnessAssessment, ConsciousnessLevel, WelfareStatus};
use serde::{Deserialize, Serialize};

use crate::round_to;

/// Status carried by the report of a monitor with no assessments.
pub const NO_ASSESSMENTS: &str = "No assessments performed";

/// Hex characters of the latest proof shown in a report.
const PROOF_PREVIEW_CHARS: usize = 32;

/// Report over a monitor's history.
///
/// Serializes either as `{"status": "No assessments performed"}` or as the
/// flat summary object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonitorReport {
    Summary(ReportSummary),
    Empty { status: String },
}

/// Aggregate view of every assessment recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub current_level: ConsciousnessLevel,
    pub current_score: f64,
    pub welfare_status: WelfareStatus,
    pub total_assessments: usize,
    /// Mean of all scores, rounded to 4 decimals.
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub proof_chain_length: usize,
    /// First 32 hex characters of the latest proof hash, then `...`.
    pub latest_proof: String,
}

impl MonitorReport {
    pub fn empty() -> Self {
        Self::Empty {
            status: NO_ASSESSMENTS.to_string(),
        }
    }

    /// Summarize `history`; `proof_chain` runs parallel to it.
    pub fn from_history(history: &[ConsciousnessAssessment], proof_chain: &[String]) -> Self {
        let Some(latest) = history.last() else {
            return Self::empty();
        };

        let mut total = 0.0;
        let mut min_score = f64::MAX;
        let mut max_score = f64::MIN;
        for assessment in history {
            total += assessment.score;
            min_score = min_score.min(assessment.score);
            max_score = max_score.max(assessment.score);
        }

        let latest_proof = match proof_chain.last() {
            Some(hash) => format!("{}...", preview(hash)),
            None => "None".to_string(),
        };

        Self::Summary(ReportSummary {
            current_level: latest.level,
            current_score: latest.score,
            welfare_status: latest.welfare_status,
            total_assessments: history.len(),
            average_score: round_to(total / history.len() as f64, 4),
            min_score: round_to(min_score, 4),
            max_score: round_to(max_score, 4),
            proof_chain_length: proof_chain.len(),
            latest_proof,
        })
    }

    pub fn summary(&self) -> Option<&ReportSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

fn preview(hash: &str) -> &str {
    hash.get(..PROOF_PREVIEW_CHARS).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn assessment(score: f64, hash: &str) -> ConsciousnessAssessment {
        ConsciousnessAssessment {
            timestamp: "2026-01-01T00:00:00.000000+00:00".into(),
            level: crate::scoring::classify(score),
            score,
            proof_score: score,
            indicators: BTreeMap::new(),
            welfare_status: WelfareStatus::Healthy,
            welfare_concerns: Vec::new(),
            proof_hash: hash.into(),
        }
    }

    #[test]
    fn empty_history_is_sentinel() {
        let report = MonitorReport::from_history(&[], &[]);
        assert!(report.is_empty());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "status": "No assessments performed" })
        );
    }

    #[test]
    fn summary_over_history() {
        let h1 = "a".repeat(64);
        let h2 = "0123456789abcdef".repeat(4);
        let history = vec![assessment(0.4, &h1), assessment(0.9, &h2), assessment(0.65, &h2)];
        let chain = vec![h1.clone(), h2.clone(), h2.clone()];

        let report = MonitorReport::from_history(&history, &chain);
        let summary = report.summary().unwrap();
        assert_eq!(summary.current_level, ConsciousnessLevel::Emerging);
        assert_eq!(summary.current_score, 0.65);
        assert_eq!(summary.total_assessments, 3);
        assert_eq!(summary.average_score, 0.65);
        assert_eq!(summary.min_score, 0.4);
        assert_eq!(summary.max_score, 0.9);
        assert_eq!(summary.proof_chain_length, 3);
        assert_eq!(summary.latest_proof, "0123456789abcdef0123456789abcdef...");
    }

    #[test]
    fn summary_serializes_flat() {
        let hash = "f".repeat(64);
        let report = MonitorReport::from_history(&[assessment(0.3, &hash)], &[hash.clone()]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["current_level"], "C-1 Functional");
        assert_eq!(value["welfare_status"], "healthy");
        assert!(value.get("status").is_none());

        let restored: MonitorReport = serde_json::from_value(value).unwrap();
        assert_eq!(restored, report);
    }
}
