//! Ship actors.
//!
//! Each team steers one ship. The ship carries its steady-state
//! attributes (position, heading, speed, coal, passengers) and the
//! per-turn bookkeeping that the move pipeline resets between turns.

use serde::{Deserialize, Serialize};

use crate::actions::accelerate::AccelerationProblem;

use super::coords::{CubeCoordinates, CubeDirection};
use super::river::Board;

/// Lowest steady-state speed.
pub const MIN_SPEED: i32 = 1;

/// Highest steady-state speed.
pub const MAX_SPEED: i32 = 6;

/// Coal each ship starts the game with.
pub const START_COAL: i32 = 6;

/// Free accelerations granted per turn.
pub const FREE_ACC: i32 = 1;

/// Free rotations granted per turn.
pub const FREE_TURNS: i32 = 1;

/// The two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// One team's paddle steamer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ship {
    pub team: Team,
    pub position: CubeCoordinates,
    pub direction: CubeDirection,
    pub speed: i32,
    pub coal: i32,
    pub passengers: i32,
    pub free_turns: i32,
    pub points: i32,
    pub free_acc: i32,
    /// Movement points left in the current turn.
    pub movement: i32,
}

impl Ship {
    /// A fresh ship at the given position, heading right at minimum
    /// speed with full coal.
    pub fn new(team: Team, position: CubeCoordinates) -> Self {
        Self {
            team,
            position,
            direction: CubeDirection::Right,
            speed: MIN_SPEED,
            coal: START_COAL,
            passengers: 0,
            free_turns: FREE_TURNS,
            points: 0,
            free_acc: FREE_ACC,
            movement: MIN_SPEED,
        }
    }

    /// Upper bound on additional acceleration this turn.
    pub fn max_acc(&self) -> i32 {
        (MAX_SPEED - self.speed).min(self.speed - MIN_SPEED + self.coal + self.free_acc)
    }

    /// Whether the ship may rotate, which a sandbank forbids.
    pub fn can_turn(&self, board: &Board) -> bool {
        !board.is_sandbank(self.position)
    }

    /// Applies a speed change, consuming the free acceleration before
    /// coal. Leaves the movement bookkeeping untouched.
    pub fn accelerate_by(&mut self, diff: i32) -> Result<(), AccelerationProblem> {
        if diff == 0 {
            return Err(AccelerationProblem::ZeroAcc);
        }
        let new_speed = self.speed + diff;
        if new_speed > MAX_SPEED {
            return Err(AccelerationProblem::AboveMaxSpeed);
        }
        if new_speed < MIN_SPEED {
            return Err(AccelerationProblem::BelowMinSpeed);
        }
        let used_free = self.free_acc.min(diff.abs());
        let coal_cost = diff.abs() - used_free;
        if coal_cost > self.coal {
            return Err(AccelerationProblem::InsufficientCoal);
        }
        self.speed = new_speed;
        self.free_acc -= used_free;
        self.coal -= coal_cost;
        Ok(())
    }

    /// Restores the invariants an externally populated ship must hold:
    /// movement matches speed, bookkeeping counters stay in range.
    pub fn normalize(&mut self) {
        self.movement = self.speed;
        self.free_acc = self.free_acc.clamp(0, FREE_ACC);
        self.free_turns = self.free_turns.clamp(0, 2);
    }
}
