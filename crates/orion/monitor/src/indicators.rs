//! Indicator computation.
//!
//! Every indicator is an independent pure function of the current state and
//! the monitor's context (state buffer, prior assessment scores). Indicators
//! whose preconditions fail are absent from the [`IndicatorSet`] rather than
//! zero, so the key set of an assessment depends on the shape of its input.

use std::collections::BTreeMap;

use orion_consciousness_types::{Indicator, RobotState};

use crate::buffer::StateBuffer;

/// Sensors with health above this count as healthy for integration.
const HEALTHY_SENSOR: f64 = 0.5;
/// Reading count at which broadcast saturates.
const BROADCAST_SATURATION: f64 = 10.0;
/// Integration proxy when only a single reading is available.
const SINGLE_READING_PHI: f64 = 0.3;
/// Error count at which feedback bottoms out.
const FEEDBACK_ERROR_SPAN: f64 = 100.0;
/// Battery above this keeps the meta-state available.
const META_STATE_BATTERY: f64 = 0.1;
/// Velocity change that drives attention stability to zero.
const ATTENTION_VELOCITY_SPAN: f64 = 10.0;
/// Number of prior scores used for behavioral consistency.
pub const CONSISTENCY_WINDOW: usize = 5;
const CONSISTENCY_VARIANCE_GAIN: f64 = 10.0;
/// Value used while an indicator lacks enough context.
const NEUTRAL: f64 = 0.5;

/// Indicators computed for one cycle, each explicitly present or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorSet {
    pub gwt_integration: Option<f64>,
    pub gwt_broadcast: Option<f64>,
    pub iit_phi_proxy: Option<f64>,
    pub rpt_feedback: Option<f64>,
    pub hot_self_monitoring: Option<f64>,
    pub hot_meta_state: Option<f64>,
    pub ast_attention_stability: Option<f64>,
    pub behavioral_consistency: Option<f64>,
}

impl IndicatorSet {
    /// Compute all indicators for `state`.
    ///
    /// `buffer` is expected to already contain `state` as its latest entry;
    /// `prior_scores` are the recorded scores of earlier assessments, oldest
    /// first.
    pub fn compute(state: &RobotState, buffer: &StateBuffer, prior_scores: &[f64]) -> Self {
        let (gwt_integration, gwt_broadcast) = match global_workspace(state) {
            Some((integration, broadcast)) => (Some(integration), Some(broadcast)),
            None => (None, None),
        };

        Self {
            gwt_integration,
            gwt_broadcast,
            iit_phi_proxy: Some(integration_proxy(state)),
            rpt_feedback: Some(recurrent_feedback(state)),
            hot_self_monitoring: Some(self_monitoring(state)),
            hot_meta_state: Some(meta_state(state)),
            ast_attention_stability: Some(attention_stability(buffer)),
            behavioral_consistency: Some(behavioral_consistency(prior_scores)),
        }
    }

    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::GwtIntegration => self.gwt_integration,
            Indicator::GwtBroadcast => self.gwt_broadcast,
            Indicator::IitPhiProxy => self.iit_phi_proxy,
            Indicator::RptFeedback => self.rpt_feedback,
            Indicator::HotSelfMonitoring => self.hot_self_monitoring,
            Indicator::HotMetaState => self.hot_meta_state,
            Indicator::AstAttentionStability => self.ast_attention_stability,
            Indicator::BehavioralConsistency => self.behavioral_consistency,
        }
    }

    /// Present indicators, in computation order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, f64)> + '_ {
        Indicator::ALL
            .into_iter()
            .filter_map(|indicator| self.get(indicator).map(|value| (indicator, value)))
    }

    /// Number of present indicators.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present indicators as a map with values rounded to `places` decimals.
    pub fn to_rounded_map(&self, places: usize) -> BTreeMap<Indicator, f64> {
        self.iter()
            .map(|(indicator, value)| (indicator, crate::round_to(value, places)))
            .collect()
    }
}

/// Global workspace pair `(integration, broadcast)`.
///
/// Both are gated on `sensor_health` being non-empty, even though broadcast
/// only looks at `sensor_readings`.
pub fn global_workspace(state: &RobotState) -> Option<(f64, f64)> {
    if state.sensor_health.is_empty() {
        return None;
    }

    let healthy = state
        .sensor_health
        .values()
        .filter(|&&health| health > HEALTHY_SENSOR)
        .count();
    let total = state.sensor_health.len().max(1);
    let integration = healthy as f64 / total as f64;
    let broadcast = (state.sensor_readings.len() as f64 / BROADCAST_SATURATION).min(1.0);

    Some((integration, broadcast))
}

/// Integration proxy from the coefficient of variation of sensor readings.
///
/// Lower dispersion relative to magnitude reads as tighter integration.
pub fn integration_proxy(state: &RobotState) -> f64 {
    let values: Vec<f64> = state.sensor_readings.values().copied().collect();
    match values.len() {
        0 => return 0.0,
        1 => return SINGLE_READING_PHI,
        _ => {}
    }

    let mean = mean(&values);
    if mean == 0.0 {
        return 0.0;
    }

    let cv = population_variance(&values).sqrt() / mean.abs();
    (1.0 - cv).clamp(0.0, 1.0)
}

pub fn recurrent_feedback(state: &RobotState) -> f64 {
    1.0 - (state.error_count as f64 / FEEDBACK_ERROR_SPAN).min(1.0)
}

/// Task completion rate, clamped into [0, 1].
pub fn self_monitoring(state: &RobotState) -> f64 {
    state.task_completion_rate.clamp(0.0, 1.0)
}

pub fn meta_state(state: &RobotState) -> f64 {
    if state.battery_level > META_STATE_BATTERY {
        1.0
    } else {
        0.0
    }
}

/// Velocity stability between the latest buffered state and the one before.
pub fn attention_stability(buffer: &StateBuffer) -> f64 {
    match (buffer.latest(), buffer.previous()) {
        (Some(current), Some(prev)) => {
            let change = (current.velocity - prev.velocity).abs();
            (1.0 - change / ATTENTION_VELOCITY_SPAN).max(0.0)
        }
        _ => NEUTRAL,
    }
}

/// Stability of the most recent prior scores.
pub fn behavioral_consistency(prior_scores: &[f64]) -> f64 {
    if prior_scores.len() < CONSISTENCY_WINDOW {
        return NEUTRAL;
    }
    let recent = &prior_scores[prior_scores.len() - CONSISTENCY_WINDOW..];
    (1.0 - population_variance(recent) * CONSISTENCY_VARIANCE_GAIN).max(0.0)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
