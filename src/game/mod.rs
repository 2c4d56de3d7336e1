//! Game state and move execution.
//!
//! Holds the full snapshot of a game and runs the move pipeline: action
//! application, passenger pickup, scoring, and turn advancement.

pub mod state;

pub use state::{
    GameState, TeamPoints, FINISH_POINTS, MAX_PASSENGERS, POINTS_PER_PASSENGER,
    POINTS_PER_SEGMENT, TURN_LIMIT,
};
