//! The acceleration action.
//!
//! Changes the acting ship's speed at the start of its move. The first
//! point per turn is free; every further point of change burns coal.

use serde::{Deserialize, Serialize};

use crate::board::{MAX_SPEED, MIN_SPEED};
use crate::game::GameState;

/// Rejections of an acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccelerationProblem {
    #[error("acceleration of zero is not an action")]
    ZeroAcc,

    #[error("acceleration would exceed the maximum speed")]
    AboveMaxSpeed,

    #[error("deceleration would fall below the minimum speed")]
    BelowMinSpeed,

    #[error("not enough coal to pay for the acceleration")]
    InsufficientCoal,

    #[error("ships on a sandbank cannot accelerate")]
    OnSandbank,

    #[error("acceleration is only allowed as the first action of a move")]
    NotFirstAction,
}

/// Speeds the acting ship up or down by `acc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accelerate {
    pub acc: i32,
}

impl Accelerate {
    pub const fn new(acc: i32) -> Self {
        Self { acc }
    }

    /// Validates and applies the acceleration to the acting ship.
    pub fn perform(&self, state: &mut GameState) -> Result<(), AccelerationProblem> {
        let team = state.current_team();
        if self.acc == 0 {
            return Err(AccelerationProblem::ZeroAcc);
        }
        let ship = state.ship(team);
        let new_speed = ship.speed + self.acc;
        if new_speed > MAX_SPEED {
            return Err(AccelerationProblem::AboveMaxSpeed);
        }
        if new_speed < MIN_SPEED {
            return Err(AccelerationProblem::BelowMinSpeed);
        }
        if state.board.is_sandbank(ship.position) {
            return Err(AccelerationProblem::OnSandbank);
        }
        let ship = state.ship_mut(team);
        ship.accelerate_by(self.acc)?;
        ship.movement += self.acc;
        Ok(())
    }
}
