//! Board representation and actor types.
//!
//! Contains the core data structures for hex coordinates, terrain
//! fields, river segments, the segmented board, and the player ships.

pub mod coords;
pub mod field;
pub mod river;
pub mod segment;
pub mod ship;

pub use coords::{CartesianCoordinate, CubeCoordinates, CubeDirection};
pub use field::{Field, FieldType, Passenger};
pub use river::Board;
pub use segment::{Segment, SEGMENT_HEIGHT, SEGMENT_WIDTH};
pub use ship::{Ship, Team, FREE_ACC, FREE_TURNS, MAX_SPEED, MIN_SPEED, START_COAL};
