#![deny(unsafe_code)]
//! # orion-consciousness-monitor
//!
//! Deterministic consciousness assessment over robot telemetry.
//!
//! Each call to [`ConsciousnessMonitor::assess`]:
//! - pushes the state into a bounded [`StateBuffer`]
//! - computes the heuristic [`IndicatorSet`] (GWT, IIT, RPT, HOT, AST and
//!   behavioral consistency)
//! - averages them into a composite score and classifies its level
//! - runs the [`WelfareDetector`] rules
//! - binds the result to a SHA-256 proof hash and appends it to the
//!   append-only history and proof chain
//!
//! The engine scores numeric telemetry; it makes no claim about the theories
//! its indicators are named after.

pub mod buffer;
pub mod config;
pub mod error;
pub mod indicators;
pub mod monitor;
pub mod proof;
pub mod report;
pub mod scoring;
pub mod welfare;

pub use buffer::StateBuffer;
pub use config::{MonitorConfig, Theory, WelfareThresholds};
pub use error::{MonitorError, MonitorResult};
pub use indicators::IndicatorSet;
pub use monitor::ConsciousnessMonitor;
pub use proof::{ChainVerification, ProofPayload, ProofVerifier};
pub use report::{MonitorReport, ReportSummary};
pub use welfare::{WelfareDetector, WelfareVerdict};

pub use orion_consciousness_types::{
    ConsciousnessAssessment, ConsciousnessLevel, Indicator, RobotState, WelfareConcern,
    WelfareStatus,
};

/// Round to `places` decimals, resolving ties on the exact binary value.
///
/// Goes through decimal formatting so the result matches a correctly rounded
/// decimal rather than `(x * 10^n).round() / 10^n`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
