use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DEADBAND, DEFAULT_MAX_ANGLE};
use crate::error::{BallseekError, Result};

/// Which way to turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteeringDirection {
    Left,
    Right,
    Center,
}

impl std::fmt::Display for SteeringDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Center => write!(f, "center"),
        }
    }
}

/// A turn request for the actuator. `angle` is a magnitude in
/// `[0, max_angle]`; the sign lives in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteeringCommand {
    pub direction: SteeringDirection,
    pub angle: f64,
}

impl SteeringCommand {
    pub fn center() -> Self {
        Self {
            direction: SteeringDirection::Center,
            angle: 0.0,
        }
    }
}

impl std::fmt::Display for SteeringCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            SteeringDirection::Center => write!(f, "stay center"),
            dir => write!(f, "motor turns {} to the {}", self.angle, dir),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Largest turn angle, reached at offset +/-1.
    pub max_angle: f64,
    /// Offsets with magnitude at or below this keep the rudder centered.
    pub deadband: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_angle: DEFAULT_MAX_ANGLE,
            deadband: DEFAULT_DEADBAND,
        }
    }
}

impl SteeringConfig {
    pub fn new(max_angle: f64, deadband: f64) -> Result<Self> {
        let config = Self {
            max_angle,
            deadband,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("max_angle", self.max_angle), ("deadband", self.deadband)] {
            if !value.is_finite() || value < 0.0 {
                return Err(BallseekError::InvalidSteering(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn steer(&self, offset: f64) -> SteeringCommand {
        compute_steering(offset, self.max_angle, self.deadband)
    }
}

/// Map a normalized offset to a steering command.
///
/// Above `deadband` turns right, below `-deadband` turns left, anything else
/// (including NaN) stays centered. The angle is `|offset| * max_angle`,
/// capped at `max_angle`.
///
/// Unvalidated parameters are pinned rather than trusted: a negative or NaN
/// `max_angle` yields angle 0, a negative or NaN `deadband` acts as 0.
pub fn compute_steering(offset: f64, max_angle: f64, deadband: f64) -> SteeringCommand {
    let max_angle = max_angle.max(0.0);
    let deadband = deadband.max(0.0);
    let direction = if offset > deadband {
        SteeringDirection::Right
    } else if offset < -deadband {
        SteeringDirection::Left
    } else {
        return SteeringCommand::center();
    };

    SteeringCommand {
        direction,
        angle: (offset.abs() * max_angle).min(max_angle),
    }
}
