//! The push action.
//!
//! When both ships share a field, the acting ship must shove the
//! opponent one hex aside before its move can end. A push costs one
//! movement point and may not go against the pusher's own heading.

use serde::{Deserialize, Serialize};

use crate::board::{CubeDirection, FieldType, MIN_SPEED};
use crate::game::GameState;

/// Rejections of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PushProblem {
    #[error("no movement points left for the push")]
    MovementPointsMissing,

    #[error("pushing requires an opponent on the same field")]
    SameFieldPush,

    #[error("push target is not a mapped board field")]
    InvalidFieldPush,

    #[error("push target is blocked")]
    BlockedFieldPush,

    #[error("ships on a sandbank cannot push")]
    SandbankPush,

    #[error("pushing backward against the own heading is not allowed")]
    BackwardPushingRestricted,
}

/// Shoves the co-located opponent one hex in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Push {
    pub direction: CubeDirection,
}

impl Push {
    pub const fn new(direction: CubeDirection) -> Self {
        Self { direction }
    }

    /// Validates and applies the push, displacing the opponent.
    pub fn perform(&self, state: &mut GameState) -> Result<(), PushProblem> {
        let team = state.current_team();
        let pusher = state.ship(team);
        let other = state.ship(team.opponent());
        if pusher.position != other.position {
            return Err(PushProblem::SameFieldPush);
        }
        if pusher.movement < 1 {
            return Err(PushProblem::MovementPointsMissing);
        }
        if self.direction == pusher.direction.opposite() {
            return Err(PushProblem::BackwardPushingRestricted);
        }
        if state.board.is_sandbank(pusher.position) {
            return Err(PushProblem::SandbankPush);
        }
        let target = pusher.position + self.direction.vector();
        let field = state.board.get(target).ok_or(PushProblem::InvalidFieldPush)?;
        if !field.is_passable() {
            return Err(PushProblem::BlockedFieldPush);
        }

        let shoved = state.ship_mut(team.opponent());
        shoved.position = target;
        if field.field_type == FieldType::Sandbank {
            shoved.speed = MIN_SPEED;
            shoved.free_turns = 1;
        }
        state.ship_mut(team).movement -= 1;
        Ok(())
    }
}
