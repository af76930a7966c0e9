use std::collections::VecDeque;

use orion_consciousness_types::RobotState;
use tracing::debug;

/// Bounded FIFO of the most recent robot states.
///
/// Once full, each push evicts the oldest state.
#[derive(Debug, Clone)]
pub struct StateBuffer {
    states: VecDeque<RobotState>,
    capacity: usize,
}

impl StateBuffer {
    /// Create an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            states: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a state, evicting the oldest when over capacity.
    pub fn push(&mut self, state: RobotState) {
        self.states.push_back(state);
        if self.states.len() > self.capacity {
            self.states.pop_front();
            debug!(capacity = self.capacity, "evicted oldest buffered state");
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently pushed state.
    pub fn latest(&self) -> Option<&RobotState> {
        self.states.back()
    }

    /// State pushed just before the latest one.
    pub fn previous(&self) -> Option<&RobotState> {
        self.states.len().checked_sub(2).and_then(|i| self.states.get(i))
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &RobotState> {
        self.states.iter()
    }
}

impl Default for StateBuffer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BUFFER_CAPACITY)
    }
}
