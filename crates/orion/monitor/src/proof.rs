//! Proof hashes for assessments.
//!
//! Each assessment is bound to a SHA-256 digest over a canonical record of
//! `(level, score, timestamp, welfare)`. The canonical form is a sorted-key
//! JSON object with `", "` / `": "` separators and shortest round-trip float
//! formatting, so digests can be reproduced by any JSON tooling that emits
//! the same form.
//!
//! Hashes do not link to their predecessor; every digest is verifiable on its
//! own and the chain is simply their ordered sequence.

use orion_consciousness_types::{ConsciousnessAssessment, ConsciousnessLevel, WelfareStatus};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::round_to;

/// Decimal places of the score bound into the proof.
pub const PROOF_SCORE_PLACES: usize = 6;

/// Largest gap between the displayed 4-decimal score and the 6-decimal proof
/// score: half a unit in the fourth place plus half in the sixth.
const DISPLAY_SCORE_TOLERANCE: f64 = 5e-5 + 5e-7 + 1e-9;

/// The four fields a proof hash commits to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofPayload<'a> {
    pub timestamp: &'a str,
    /// Score already rounded to [`PROOF_SCORE_PLACES`].
    pub score: f64,
    pub level: ConsciousnessLevel,
    pub welfare: WelfareStatus,
}

impl<'a> ProofPayload<'a> {
    /// Build a payload from an unrounded composite score.
    pub fn new(
        timestamp: &'a str,
        score: f64,
        level: ConsciousnessLevel,
        welfare: WelfareStatus,
    ) -> Self {
        Self {
            timestamp,
            score: round_to(score, PROOF_SCORE_PLACES),
            level,
            welfare,
        }
    }

    /// Payload recorded in an existing assessment.
    pub fn from_assessment(assessment: &'a ConsciousnessAssessment) -> Self {
        Self {
            timestamp: &assessment.timestamp,
            score: assessment.proof_score,
            level: assessment.level,
            welfare: assessment.welfare_status,
        }
    }

    /// Canonical JSON text, keys in sorted order.
    pub fn canonical_json(&self) -> String {
        format!(
            "{{\"level\": {}, \"score\": {}, \"timestamp\": {}, \"welfare\": {}}}",
            json_string(self.level.label()),
            canonical_float(self.score),
            json_string(self.timestamp),
            json_string(self.welfare.as_str()),
        )
    }

    /// Lowercase hex SHA-256 of the canonical JSON.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json().as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn json_string(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// Shortest round-trip float text with a decimal point or a signed,
/// two-digit exponent (`0.5`, `1.0`, `5e-05`).
pub fn canonical_float(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent.trim_start_matches('+')),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Outcome of verifying a recorded history against its proof chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainVerification {
    /// Whether every entry verified.
    pub valid: bool,

    /// Total number of assessments checked.
    pub total_entries: usize,

    /// Number of assessments verified before the first failure.
    pub verified_entries: usize,

    /// Index of the first invalid entry, if any.
    pub first_invalid_index: Option<usize>,

    pub error_message: Option<String>,
}

/// Recomputes and checks proof hashes.
pub struct ProofVerifier;

impl ProofVerifier {
    /// Check an assessment against its own proof hash.
    ///
    /// Also rejects a displayed score that no longer matches the proven one.
    pub fn verify_assessment(assessment: &ConsciousnessAssessment) -> bool {
        let payload = ProofPayload::from_assessment(assessment);
        payload.digest() == assessment.proof_hash
            && (assessment.score - assessment.proof_score).abs() <= DISPLAY_SCORE_TOLERANCE
    }

    /// Verify every assessment and its position in the parallel proof chain.
    pub fn verify_chain(history: &[ConsciousnessAssessment], chain: &[String]) -> ChainVerification {
        let mut result = ChainVerification {
            valid: true,
            total_entries: history.len(),
            verified_entries: 0,
            first_invalid_index: None,
            error_message: None,
        };

        if history.len() != chain.len() {
            result.valid = false;
            result.error_message = Some(format!(
                "history has {} assessments but proof chain has {} hashes",
                history.len(),
                chain.len()
            ));
        }

        for (i, assessment) in history.iter().enumerate() {
            let failure = if !Self::verify_assessment(assessment) {
                Some(format!("assessment {i} does not match its proof hash"))
            } else if chain.get(i) != Some(&assessment.proof_hash) {
                Some(format!("proof chain entry {i} does not match assessment"))
            } else {
                None
            };

            if let Some(message) = failure {
                result.valid = false;
                result.first_invalid_index = Some(i);
                result.error_message = Some(message);
                return result;
            }

            result.verified_entries = i + 1;
        }

        result
    }
}
