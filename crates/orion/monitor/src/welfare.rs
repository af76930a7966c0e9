use orion_consciousness_types::{RobotState, WelfareConcern, WelfareStatus};

use crate::config::WelfareThresholds;

/// Concerns raised for one cycle and the status they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelfareVerdict {
    pub status: WelfareStatus,
    /// Concerns in rule order.
    pub concerns: Vec<WelfareConcern>,
}

/// Applies the welfare rule set to a state and its score trend.
#[derive(Debug, Clone)]
pub struct WelfareDetector {
    thresholds: WelfareThresholds,
}

impl WelfareDetector {
    pub fn new(thresholds: WelfareThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self::new(WelfareThresholds::default())
    }

    /// Evaluate every rule independently; concerns accumulate in rule order.
    ///
    /// `prior_scores` are recorded scores of earlier assessments, oldest first.
    pub fn detect(&self, state: &RobotState, score: f64, prior_scores: &[f64]) -> WelfareVerdict {
        let t = &self.thresholds;
        let mut concerns = Vec::new();

        if state.error_count > t.max_error_count {
            concerns.push(WelfareConcern::HighErrorCount);
        }
        if state.battery_level < t.critical_battery {
            concerns.push(WelfareConcern::CriticalBattery);
        }
        if state
            .sensor_health
            .values()
            .any(|&health| health < t.degraded_sensor_health)
        {
            concerns.push(WelfareConcern::DegradedSensorHealth);
        }
        if self.is_sudden_drop(score, prior_scores) {
            concerns.push(WelfareConcern::SuddenDrop);
        }

        WelfareVerdict {
            status: WelfareStatus::from_concern_count(concerns.len()),
            concerns,
        }
    }

    /// Low current score right after a run of high ones.
    fn is_sudden_drop(&self, score: f64, prior_scores: &[f64]) -> bool {
        let t = &self.thresholds;
        if score >= t.drop_score || prior_scores.len() < t.drop_window {
            return false;
        }
        prior_scores[prior_scores.len() - t.drop_window..]
            .iter()
            .all(|&prior| prior > t.drop_baseline)
    }
}

impl Default for WelfareDetector {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
