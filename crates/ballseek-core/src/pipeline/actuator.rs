use std::collections::VecDeque;

use tracing::info;

use crate::consts::DEFAULT_ACTUATOR_HISTORY;
use crate::error::Result;
use crate::steering::SteeringCommand;

/// Consumer of steering commands, e.g. a motor driver.
pub trait Actuator {
    fn apply(&mut self, command: &SteeringCommand) -> Result<()>;
}

/// Actuator that only logs commands and remembers the most recent ones.
#[derive(Debug)]
pub struct LogActuator {
    history: usize,
    issued: VecDeque<SteeringCommand>,
    total: usize,
}

impl Default for LogActuator {
    fn default() -> Self {
        Self::with_history(DEFAULT_ACTUATOR_HISTORY)
    }
}

impl LogActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `history` commands; older ones are dropped first.
    pub fn with_history(history: usize) -> Self {
        Self {
            history,
            issued: VecDeque::with_capacity(history),
            total: 0,
        }
    }

    /// Retained commands, oldest first.
    pub fn issued(&self) -> &VecDeque<SteeringCommand> {
        &self.issued
    }

    /// Commands applied over the actuator's lifetime, including dropped ones.
    pub fn total_issued(&self) -> usize {
        self.total
    }
}

impl Actuator for LogActuator {
    fn apply(&mut self, command: &SteeringCommand) -> Result<()> {
        info!(
            direction = %command.direction,
            angle = command.angle,
            "{command}"
        );
        self.total += 1;
        if self.history == 0 {
            return Ok(());
        }
        if self.issued.len() == self.history {
            self.issued.pop_front();
        }
        self.issued.push_back(*command);
        Ok(())
    }
}
