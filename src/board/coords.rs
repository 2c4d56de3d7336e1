//! Hex coordinate algebra.
//!
//! The river is embedded in a cube-coordinate hex plane. Segment-local
//! field grids are addressed with offset (cartesian) coordinates and
//! converted to cube coordinates for all geometry.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position on the hex plane in cube coordinates.
///
/// Only `q` and `r` are stored; the third component is derived so that
/// `q + r + s == 0` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeCoordinates {
    pub q: i32,
    pub r: i32,
}

impl CubeCoordinates {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived third cube component.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Rotates around the origin by `turns` 60-degree steps, positive
    /// being clockwise. One step maps `(q, r, s)` to `(-r, -s, -q)`.
    pub fn rotated_by(&self, turns: i32) -> Self {
        let mut coords = *self;
        for _ in 0..turns.rem_euclid(6) {
            coords = Self::new(-coords.r, -coords.s());
        }
        coords
    }

    /// Manhattan-hex distance to another position.
    pub fn distance_to(&self, other: CubeCoordinates) -> i32 {
        let diff = *self - other;
        (diff.q.abs() + diff.r.abs() + diff.s().abs()) / 2
    }

    /// Converts to the offset coordinate used for segment grids.
    pub const fn to_cartesian(&self) -> CartesianCoordinate {
        CartesianCoordinate::new(self.q + (self.r - (self.r & 1)) / 2, self.r)
    }
}

impl Add for CubeCoordinates {
    type Output = CubeCoordinates;

    fn add(self, rhs: CubeCoordinates) -> CubeCoordinates {
        CubeCoordinates::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for CubeCoordinates {
    type Output = CubeCoordinates;

    fn sub(self, rhs: CubeCoordinates) -> CubeCoordinates {
        CubeCoordinates::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for CubeCoordinates {
    type Output = CubeCoordinates;

    fn neg(self) -> CubeCoordinates {
        CubeCoordinates::new(-self.q, -self.r)
    }
}

impl Mul<i32> for CubeCoordinates {
    type Output = CubeCoordinates;

    fn mul(self, rhs: i32) -> CubeCoordinates {
        CubeCoordinates::new(self.q * rhs, self.r * rhs)
    }
}

/// An offset coordinate addressing a cell of a segment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    pub x: i32,
    pub y: i32,
}

impl CartesianCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts back to cube coordinates.
    pub const fn to_cube(&self) -> CubeCoordinates {
        CubeCoordinates::new(self.x - (self.y - (self.y & 1)) / 2, self.y)
    }

    /// Packs into a row-major index of the 4x5 segment grid, or `None`
    /// when either component is out of range.
    pub fn to_index(&self) -> Option<usize> {
        if self.x >= 0 && self.x < 4 && self.y >= 0 && self.y < 5 {
            Some((self.y * 4 + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of `to_index`.
    pub const fn from_index(index: usize) -> Self {
        Self::new((index % 4) as i32, (index / 4) as i32)
    }
}

/// The six hex directions in clockwise order, starting at `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeDirection {
    Right = 0,
    DownRight = 1,
    DownLeft = 2,
    Left = 3,
    UpLeft = 4,
    UpRight = 5,
}

impl CubeDirection {
    /// All directions in ordinal order.
    pub const VALUES: [CubeDirection; 6] = [
        CubeDirection::Right,
        CubeDirection::DownRight,
        CubeDirection::DownLeft,
        CubeDirection::Left,
        CubeDirection::UpLeft,
        CubeDirection::UpRight,
    ];

    /// The unit cube vector of this direction.
    pub const fn vector(self) -> CubeCoordinates {
        match self {
            CubeDirection::Right => CubeCoordinates::new(1, 0),
            CubeDirection::DownRight => CubeCoordinates::new(0, 1),
            CubeDirection::DownLeft => CubeCoordinates::new(-1, 1),
            CubeDirection::Left => CubeCoordinates::new(-1, 0),
            CubeDirection::UpLeft => CubeCoordinates::new(0, -1),
            CubeDirection::UpRight => CubeCoordinates::new(1, -1),
        }
    }

    const fn from_ordinal(ordinal: i32) -> CubeDirection {
        match ordinal.rem_euclid(6) {
            0 => CubeDirection::Right,
            1 => CubeDirection::DownRight,
            2 => CubeDirection::DownLeft,
            3 => CubeDirection::Left,
            4 => CubeDirection::UpLeft,
            _ => CubeDirection::UpRight,
        }
    }

    /// Rotates by `turns` 60-degree steps, positive being clockwise.
    pub const fn rotated_by(self, turns: i32) -> CubeDirection {
        Self::from_ordinal(self as i32 + turns)
    }

    /// The reverse direction.
    pub const fn opposite(self) -> CubeDirection {
        self.rotated_by(3)
    }

    /// Signed minimal number of 60-degree turns to reach `target`,
    /// in `[-3, 3]`. The three-turn tie resolves counterclockwise.
    pub const fn turn_count_to(self, target: CubeDirection) -> i32 {
        let diff = (target as i32 - self as i32).rem_euclid(6);
        if diff <= 2 {
            diff
        } else {
            diff - 6
        }
    }

    /// This direction flanked by its counterclockwise and clockwise
    /// neighbors.
    pub const fn with_neighbors(self) -> [CubeDirection; 3] {
        [self.rotated_by(-1), self, self.rotated_by(1)]
    }
}
