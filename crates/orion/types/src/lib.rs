#![deny(unsafe_code)]
//! # orion-consciousness-types
//!
//! Shared vocabulary for the Orion consciousness monitor:
//! - [`RobotState`]: one telemetry snapshot fed into the monitor
//! - [`ConsciousnessAssessment`]: the immutable result of one assessment cycle
//! - the closed sets of [`Indicator`]s, [`ConsciousnessLevel`]s,
//!   [`WelfareStatus`]es and [`WelfareConcern`]s

pub mod assessment;
pub mod state;

pub use assessment::{
    ConsciousnessAssessment, ConsciousnessLevel, Indicator, WelfareConcern, WelfareStatus,
};
pub use state::RobotState;
