//! The rotation action.
//!
//! Rotates the acting ship toward a new heading. One turn step per move
//! is free; every further step burns coal. Sandbanks pin the rudder.

use serde::{Deserialize, Serialize};

use crate::board::CubeDirection;
use crate::game::GameState;

/// Rejections of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TurnProblem {
    #[error("ships on a sandbank cannot rotate")]
    RotationOnSandbankNotAllowed,

    #[error("rotation requires a mapped board field")]
    RotationOnNonExistingField,

    #[error("not enough coal to pay for the rotation")]
    NotEnoughCoalForRotation,
}

/// Rotates the acting ship to face `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub direction: CubeDirection,
}

impl Turn {
    pub const fn new(direction: CubeDirection) -> Self {
        Self { direction }
    }

    /// Validates and applies the rotation to the acting ship.
    pub fn perform(&self, state: &mut GameState) -> Result<(), TurnProblem> {
        let team = state.current_team();
        let ship = state.ship(team);
        if state.board.is_sandbank(ship.position) {
            return Err(TurnProblem::RotationOnSandbankNotAllowed);
        }
        if state.board.get(ship.position).is_none() {
            return Err(TurnProblem::RotationOnNonExistingField);
        }
        let turns = ship.direction.turn_count_to(self.direction);
        let used_free = ship.free_turns.min(turns.abs());
        let coal_cost = turns.abs() - used_free;
        if coal_cost > ship.coal {
            return Err(TurnProblem::NotEnoughCoalForRotation);
        }
        let ship = state.ship_mut(team);
        ship.direction = self.direction;
        ship.free_turns -= used_free;
        ship.coal -= coal_cost;
        Ok(())
    }
}
