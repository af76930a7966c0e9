use chrono::{DateTime, SecondsFormat, Utc};
use orion_consciousness_types::{ConsciousnessAssessment, RobotState};
use tracing::{debug, info, instrument, warn};

use crate::buffer::StateBuffer;
use crate::config::MonitorConfig;
use crate::error::{MonitorError, MonitorResult};
use crate::indicators::IndicatorSet;
use crate::proof::{ChainVerification, ProofPayload, ProofVerifier};
use crate::report::MonitorReport;
use crate::round_to;
use crate::scoring::{classify, composite_score};
use crate::welfare::WelfareDetector;

/// Decimal places of displayed scores and indicators.
const DISPLAY_PLACES: usize = 4;

/// Assessment engine for one robot.
///
/// Owns the bounded state buffer, the append-only assessment history and the
/// proof chain running parallel to it. All mutation takes `&mut self`; hosts
/// sharing a monitor across threads must serialize access themselves.
#[derive(Debug)]
pub struct ConsciousnessMonitor {
    config: MonitorConfig,
    welfare: WelfareDetector,
    buffer: StateBuffer,
    history: Vec<ConsciousnessAssessment>,
    proof_chain: Vec<String>,
}

impl ConsciousnessMonitor {
    pub fn new(config: MonitorConfig) -> MonitorResult<Self> {
        config.validate()?;
        Ok(Self {
            welfare: WelfareDetector::new(config.welfare.clone()),
            buffer: StateBuffer::new(config.buffer_capacity),
            history: Vec::new(),
            proof_chain: Vec::new(),
            config,
        })
    }

    /// Monitor with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            welfare: WelfareDetector::default(),
            buffer: StateBuffer::default(),
            history: Vec::new(),
            proof_chain: Vec::new(),
            config: MonitorConfig::default(),
        }
    }

    /// Record a state observation without assessing it.
    pub fn update_state(&mut self, state: RobotState) -> MonitorResult<()> {
        validate_state(&state)?;
        self.buffer.push(state);
        Ok(())
    }

    /// Assess `state` at the current time.
    pub fn assess(&mut self, state: RobotState) -> MonitorResult<ConsciousnessAssessment> {
        self.assess_at(state, Utc::now())
    }

    /// Assess `state` with an explicit timestamp.
    #[instrument(skip_all, fields(assessment = self.history.len()))]
    pub fn assess_at(
        &mut self,
        state: RobotState,
        at: DateTime<Utc>,
    ) -> MonitorResult<ConsciousnessAssessment> {
        validate_state(&state)?;
        let timestamp = at.to_rfc3339_opts(SecondsFormat::Micros, false);

        self.buffer.push(state.clone());

        let prior_scores: Vec<f64> = self.history.iter().map(|a| a.score).collect();
        let indicators = IndicatorSet::compute(&state, &self.buffer, &prior_scores);
        debug!(indicators = indicators.len(), "computed indicators");

        let score = composite_score(&indicators);
        let level = classify(score);
        let verdict = self.welfare.detect(&state, score, &prior_scores);
        if !verdict.concerns.is_empty() {
            warn!(
                status = %verdict.status,
                concerns = ?verdict.concerns,
                "welfare concerns raised"
            );
        }

        let payload = ProofPayload::new(&timestamp, score, level, verdict.status);
        let proof_score = payload.score;
        let proof_hash = payload.digest();

        let assessment = ConsciousnessAssessment {
            timestamp,
            level,
            score: round_to(score, DISPLAY_PLACES),
            proof_score,
            indicators: indicators.to_rounded_map(DISPLAY_PLACES),
            welfare_status: verdict.status,
            welfare_concerns: verdict.concerns,
            proof_hash: proof_hash.clone(),
        };

        self.proof_chain.push(proof_hash);
        self.history.push(assessment.clone());

        if self.config.proof_chain {
            info!(
                level = %assessment.level,
                score = assessment.score,
                welfare = %assessment.welfare_status,
                proof = %assessment.proof_hash,
                "assessment recorded"
            );
        } else {
            info!(
                level = %assessment.level,
                score = assessment.score,
                welfare = %assessment.welfare_status,
                "assessment recorded"
            );
        }

        Ok(assessment)
    }

    /// Summary of every assessment so far.
    pub fn get_report(&self) -> MonitorReport {
        MonitorReport::from_history(&self.history, &self.proof_chain)
    }

    /// Recompute every proof hash and check it against the chain.
    pub fn verify_proof_chain(&self) -> ChainVerification {
        ProofVerifier::verify_chain(&self.history, &self.proof_chain)
    }

    pub fn history(&self) -> &[ConsciousnessAssessment] {
        &self.history
    }

    pub fn latest(&self) -> Option<&ConsciousnessAssessment> {
        self.history.last()
    }

    pub fn proof_chain(&self) -> &[String] {
        &self.proof_chain
    }

    pub fn buffer(&self) -> &StateBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}

impl Default for ConsciousnessMonitor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_state(state: &RobotState) -> MonitorResult<()> {
    match state.first_non_finite() {
        Some(field) => {
            warn!(%field, "rejected state with non-finite value");
            Err(MonitorError::InvalidInput(format!("{field} is not finite")))
        }
        None => Ok(()),
    }
}
