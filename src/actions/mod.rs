//! Action semantics for a single move.
//!
//! A move is an ordered sequence of actions: an optional acceleration,
//! rotations, advances, and pushes. Each action validates its own
//! preconditions against the game state and applies its effect,
//! reporting a typed problem on rejection.

pub mod accelerate;
pub mod advance;
pub mod push;
pub mod turn;

use serde::{Deserialize, Serialize};

use crate::game::GameState;

pub use accelerate::{Accelerate, AccelerationProblem};
pub use advance::{check_advance_limit, Advance, AdvanceInfo, AdvanceProblem};
pub use push::{Push, PushProblem};
pub use turn::{Turn, TurnProblem};

/// A single action within a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Accelerate(Accelerate),
    Advance(Advance),
    Push(Push),
    Turn(Turn),
}

/// A rejection from any of the four action families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ActionProblem {
    #[error(transparent)]
    Acceleration(#[from] AccelerationProblem),

    #[error(transparent)]
    Advance(#[from] AdvanceProblem),

    #[error(transparent)]
    Push(#[from] PushProblem),

    #[error(transparent)]
    Turn(#[from] TurnProblem),
}

impl Action {
    /// Validates and applies this action, mutating the state in place.
    ///
    /// `GameState::perform_move` provides the functional facade; callers
    /// wanting to keep the prior state clone before applying.
    pub fn perform(&self, state: &mut GameState) -> Result<(), ActionProblem> {
        match self {
            Action::Accelerate(accelerate) => accelerate.perform(state)?,
            Action::Advance(advance) => advance.perform(state)?,
            Action::Push(push) => push.perform(state)?,
            Action::Turn(turn) => turn.perform(state)?,
        }
        Ok(())
    }
}

/// An ordered action sequence constituting one player's turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub actions: Vec<Action>,
}

impl Move {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}
