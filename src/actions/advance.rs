//! The advance action.
//!
//! Moves the acting ship along its heading. Every step costs one
//! movement point, plus one when the entered field's current opposes
//! the motion. The shared advance-limit scan below also drives the move
//! generator.

use serde::{Deserialize, Serialize};

use crate::board::{CubeCoordinates, CubeDirection, FieldType, Team, MAX_SPEED, MIN_SPEED};
use crate::game::GameState;

/// Rejections of an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AdvanceProblem {
    #[error("not enough movement points for the advance")]
    MovementPointsMissing,

    #[error("advance onto the opponent leaves no movement point for the mandatory push")]
    InsufficientPush,

    #[error("advance distance is not allowed from this field")]
    InvalidDistance,

    #[error("the opponent's ship blocks the path")]
    ShipAlreadyInTarget,

    #[error("the path is blocked")]
    FieldIsBlocked,

    #[error("a sandbank ends the move")]
    MoveEndOnSandbank,
}

/// How far a ship can advance from a given start, and why no further.
///
/// `costs[i]` is the cumulative movement cost of advancing `i + 1`
/// fields; `problem` is the reason the scan stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceInfo {
    pub costs: Vec<i32>,
    pub problem: AdvanceProblem,
}

impl AdvanceInfo {
    /// Number of fields that can be advanced.
    pub fn distance(&self) -> i32 {
        self.costs.len() as i32
    }

    /// Cumulative movement cost of advancing `distance` fields.
    pub fn cost_until(&self, distance: i32) -> i32 {
        self.costs[distance as usize - 1]
    }
}

/// Walks fields from `start` in `direction`, accumulating step costs
/// until the movement budget, the board, the opponent, or a sandbank
/// cuts the path.
pub fn check_advance_limit(
    state: &GameState,
    team: Team,
    start: CubeCoordinates,
    direction: CubeDirection,
    max_movement: i32,
) -> AdvanceInfo {
    let opponent = state.ship(team.opponent()).position;
    let mut costs = Vec::new();
    let mut position = start;
    let mut total = 0;

    loop {
        position = position + direction.vector();
        let field = match state.board.get(position) {
            Some(field) if field.is_passable() => field,
            _ => return AdvanceInfo { costs, problem: AdvanceProblem::FieldIsBlocked },
        };

        let mut step = 1;
        if state.board.get_field_current_direction(position) == Some(direction.opposite()) {
            step += 1;
        }
        if total + step > max_movement {
            return AdvanceInfo { costs, problem: AdvanceProblem::MovementPointsMissing };
        }
        total += step;

        if position == opponent {
            // The opponent's cell is reachable, but only together with
            // the movement point the mandatory push will cost.
            if total + 1 <= max_movement {
                costs.push(total);
                return AdvanceInfo { costs, problem: AdvanceProblem::ShipAlreadyInTarget };
            }
            return AdvanceInfo { costs, problem: AdvanceProblem::InsufficientPush };
        }

        costs.push(total);

        if field.field_type == FieldType::Sandbank {
            return AdvanceInfo { costs, problem: AdvanceProblem::MoveEndOnSandbank };
        }
    }
}

/// Moves the acting ship `distance` fields along its heading; negative
/// distances reverse off a sandbank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Advance {
    pub distance: i32,
}

impl Advance {
    pub const fn new(distance: i32) -> Self {
        Self { distance }
    }

    /// Validates and applies the advance to the acting ship.
    pub fn perform(&self, state: &mut GameState) -> Result<(), AdvanceProblem> {
        let team = state.current_team();
        let ship = state.ship(team);
        let on_sandbank = state.board.is_sandbank(ship.position);
        let allowed = if on_sandbank {
            matches!(self.distance, -1 | 1 | 2)
        } else {
            (1..=MAX_SPEED).contains(&self.distance)
        };
        if !allowed {
            return Err(AdvanceProblem::InvalidDistance);
        }

        let direction = if self.distance < 0 {
            ship.direction.opposite()
        } else {
            ship.direction
        };
        let info = check_advance_limit(state, team, ship.position, direction, ship.movement);
        let steps = self.distance.abs();
        if steps > info.distance() {
            return Err(info.problem);
        }

        let cost = info.cost_until(steps);
        let target = ship.position + direction.vector() * steps;
        let ends_on_sandbank = state.board.is_sandbank(target);
        let ship = state.ship_mut(team);
        ship.position = target;
        ship.movement -= cost;
        if ends_on_sandbank {
            ship.speed = MIN_SPEED;
            ship.movement = 0;
        }
        Ok(())
    }
}
