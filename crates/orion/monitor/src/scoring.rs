//! Composite scoring and level classification.

use orion_consciousness_types::ConsciousnessLevel;

use crate::indicators::IndicatorSet;

/// Lower score bounds per level, evaluated top-down.
const LEVEL_BANDS: [(f64, ConsciousnessLevel); 4] = [
    (0.85, ConsciousnessLevel::Transcendent),
    (0.70, ConsciousnessLevel::Autonomous),
    (0.50, ConsciousnessLevel::Emerging),
    (0.20, ConsciousnessLevel::Functional),
];

/// Arithmetic mean of the present indicators.
///
/// The denominator is floored at one, so an empty set scores zero.
pub fn composite_score(indicators: &IndicatorSet) -> f64 {
    let (sum, count) = indicators
        .iter()
        .fold((0.0, 0usize), |(sum, count), (_, value)| (sum + value, count + 1));
    sum / count.max(1) as f64
}

/// Map a composite score onto its classification level.
pub fn classify(score: f64) -> ConsciousnessLevel {
    LEVEL_BANDS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, level)| *level)
        .unwrap_or(ConsciousnessLevel::Reactive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries_are_exact() {
        assert_eq!(classify(1.0), ConsciousnessLevel::Transcendent);
        assert_eq!(classify(0.85), ConsciousnessLevel::Transcendent);
        assert_eq!(classify(0.849999), ConsciousnessLevel::Autonomous);
        assert_eq!(classify(0.70), ConsciousnessLevel::Autonomous);
        assert_eq!(classify(0.6999), ConsciousnessLevel::Emerging);
        assert_eq!(classify(0.50), ConsciousnessLevel::Emerging);
        assert_eq!(classify(0.4999), ConsciousnessLevel::Functional);
        assert_eq!(classify(0.20), ConsciousnessLevel::Functional);
        assert_eq!(classify(0.1999), ConsciousnessLevel::Reactive);
        assert_eq!(classify(0.0), ConsciousnessLevel::Reactive);
    }

    #[test]
    fn empty_set_scores_zero() {
        assert_eq!(composite_score(&IndicatorSet::default()), 0.0);
    }

    #[test]
    fn mean_over_present_only() {
        let set = IndicatorSet {
            rpt_feedback: Some(1.0),
            hot_meta_state: Some(0.0),
            ast_attention_stability: Some(0.5),
            ..Default::default()
        };
        assert_eq!(composite_score(&set), 0.5);
    }
}
