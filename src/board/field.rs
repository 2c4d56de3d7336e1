//! Terrain cells.
//!
//! A field is one hex of the river: open water, an island, a shore with
//! waiting passengers, a goal field, or a sandbank.

use serde::{Deserialize, Serialize};

use super::coords::CubeDirection;

/// The terrain variant of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Water,
    Island,
    Passenger,
    Goal,
    Sandbank,
}

/// Passengers waiting on a shore field.
///
/// The dock faces `direction`; a ship can only take a passenger aboard
/// from the neighboring field in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger {
    pub direction: CubeDirection,
    pub count: i32,
}

/// One hex of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub field_type: FieldType,
    pub passenger: Option<Passenger>,
}

impl Field {
    pub const fn new(field_type: FieldType, passenger: Option<Passenger>) -> Self {
        Self { field_type, passenger }
    }

    /// A plain water field.
    pub const fn water() -> Self {
        Self::new(FieldType::Water, None)
    }

    /// Whether a ship may occupy this field.
    pub fn is_empty(&self) -> bool {
        matches!(
            self.field_type,
            FieldType::Water | FieldType::Sandbank | FieldType::Goal
        )
    }

    /// Whether a ship may travel across or onto this field. Only
    /// islands and the board edge block a path; passenger shores are
    /// open water with a dock.
    pub fn is_passable(&self) -> bool {
        self.field_type != FieldType::Island
    }
}
