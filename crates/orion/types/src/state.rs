//! Robot state snapshots.
//!
//! A [`RobotState`] is one observation of the platform, produced by whatever
//! telemetry adapter sits in front of the monitor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One observation of the robot platform at an instant.
///
/// Ranges are nominal only. The monitor never rejects an in-range-but-odd
/// value; it clamps its outputs instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotState {
    /// Raw sensor readings keyed by sensor name.
    pub sensor_readings: BTreeMap<String, f64>,

    /// Joint positions, indexed by joint.
    pub joint_positions: Vec<f64>,

    /// Scalar platform velocity.
    pub velocity: f64,

    /// Battery charge as a fraction (nominally 0.0-1.0).
    pub battery_level: f64,

    /// Error counter (cumulative or windowed, caller's choice).
    pub error_count: u64,

    /// Elapsed time since start.
    pub uptime_seconds: f64,

    /// Task completion rate as a fraction (nominally 0.0-1.0).
    pub task_completion_rate: f64,

    /// Sensor health fractions keyed by sensor name (nominally 0.0-1.0).
    pub sensor_health: BTreeMap<String, f64>,
}

impl Default for RobotState {
    fn default() -> Self {
        Self {
            sensor_readings: BTreeMap::new(),
            joint_positions: Vec::new(),
            velocity: 0.0,
            battery_level: 1.0,
            error_count: 0,
            uptime_seconds: 0.0,
            task_completion_rate: 0.0,
            sensor_health: BTreeMap::new(),
        }
    }
}

impl RobotState {
    /// Create a state with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw sensor reading.
    pub fn with_reading(mut self, sensor: impl Into<String>, value: f64) -> Self {
        self.sensor_readings.insert(sensor.into(), value);
        self
    }

    /// Add a sensor health fraction.
    pub fn with_sensor_health(mut self, sensor: impl Into<String>, health: f64) -> Self {
        self.sensor_health.insert(sensor.into(), health);
        self
    }

    pub fn with_joint_positions(mut self, positions: Vec<f64>) -> Self {
        self.joint_positions = positions;
        self
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_battery_level(mut self, level: f64) -> Self {
        self.battery_level = level;
        self
    }

    pub fn with_error_count(mut self, count: u64) -> Self {
        self.error_count = count;
        self
    }

    pub fn with_uptime_seconds(mut self, seconds: f64) -> Self {
        self.uptime_seconds = seconds;
        self
    }

    pub fn with_task_completion_rate(mut self, rate: f64) -> Self {
        self.task_completion_rate = rate;
        self
    }

    /// Name of the first numeric field holding a non-finite value, if any.
    ///
    /// Map entries are reported as `field[key]`, joints as `joint_positions[i]`.
    pub fn first_non_finite(&self) -> Option<String> {
        let scalars = [
            ("velocity", self.velocity),
            ("battery_level", self.battery_level),
            ("uptime_seconds", self.uptime_seconds),
            ("task_completion_rate", self.task_completion_rate),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Some((*name).to_string());
        }

        if let Some((i, _)) = self
            .joint_positions
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Some(format!("joint_positions[{i}]"));
        }

        for (field, map) in [
            ("sensor_readings", &self.sensor_readings),
            ("sensor_health", &self.sensor_health),
        ] {
            if let Some((key, _)) = map.iter().find(|(_, v)| !v.is_finite()) {
                return Some(format!("{field}[{key}]"));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_idle_platform() {
        let state = RobotState::default();
        assert!(state.sensor_readings.is_empty());
        assert!(state.sensor_health.is_empty());
        assert_eq!(state.battery_level, 1.0);
        assert_eq!(state.error_count, 0);
        assert_eq!(state.task_completion_rate, 0.0);
    }

    #[test]
    fn builder_populates_maps() {
        let state = RobotState::new()
            .with_reading("lidar", 0.9)
            .with_reading("imu", 0.95)
            .with_sensor_health("lidar", 1.0)
            .with_velocity(2.5);
        assert_eq!(state.sensor_readings.len(), 2);
        assert_eq!(state.sensor_health["lidar"], 1.0);
        assert_eq!(state.velocity, 2.5);
    }

    #[test]
    fn finite_state_has_no_offender() {
        let state = RobotState::new().with_reading("a", 1.0).with_joint_positions(vec![0.1, 0.2]);
        assert!(state.first_non_finite().is_none());
    }

    #[test]
    fn reports_non_finite_fields() {
        let state = RobotState::new().with_velocity(f64::NAN);
        assert_eq!(state.first_non_finite().as_deref(), Some("velocity"));

        let state = RobotState::new().with_joint_positions(vec![0.0, f64::INFINITY]);
        assert_eq!(state.first_non_finite().as_deref(), Some("joint_positions[1]"));

        let state = RobotState::new().with_sensor_health("camera", f64::NEG_INFINITY);
        assert_eq!(state.first_non_finite().as_deref(), Some("sensor_health[camera]"));
    }

    #[test]
    fn deserializes_partial_json() {
        let state: RobotState =
            serde_json::from_str(r#"{"velocity": 3.0, "sensor_readings": {"gps": 0.9}}"#).unwrap();
        assert_eq!(state.velocity, 3.0);
        assert_eq!(state.battery_level, 1.0);
        assert_eq!(state.sensor_readings["gps"], 0.9);
    }
}
