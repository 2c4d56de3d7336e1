//! River segments.
//!
//! A segment is an oriented 4x5 patch of fields anchored at a center
//! coordinate. The board chains segments; each one maps its local grid
//! into the global hex plane by a rotation from the canonical `Right`
//! orientation and a translation to its center.

use serde::{Deserialize, Serialize};

use super::coords::{CartesianCoordinate, CubeCoordinates, CubeDirection};
use super::field::{Field, FieldType};

/// Fields per segment along its direction axis.
pub const SEGMENT_WIDTH: usize = 4;

/// Fields per segment across its direction axis.
pub const SEGMENT_HEIGHT: usize = 5;

/// The grid cell the segment center occupies, in local cartesian terms.
const CENTER: CartesianCoordinate = CartesianCoordinate::new(1, 2);

/// An oriented 4x5 patch of the river.
///
/// `fields` is column-major: `fields[x][y]` with `x` advancing along the
/// segment direction and `y` across it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub direction: CubeDirection,
    pub center: CubeCoordinates,
    pub fields: Vec<Vec<Field>>,
}

impl Segment {
    pub fn new(direction: CubeDirection, center: CubeCoordinates, fields: Vec<Vec<Field>>) -> Self {
        debug_assert_eq!(fields.len(), SEGMENT_WIDTH);
        debug_assert!(fields.iter().all(|column| column.len() == SEGMENT_HEIGHT));
        Self { direction, center, fields }
    }

    /// A segment of open water.
    pub fn water(direction: CubeDirection, center: CubeCoordinates) -> Self {
        Self::new(
            direction,
            center,
            vec![vec![Field::water(); SEGMENT_HEIGHT]; SEGMENT_WIDTH],
        )
    }

    /// The forward edge midpoint, where the next segment attaches.
    pub fn tip(&self) -> CubeCoordinates {
        self.center + self.direction.vector() * 2
    }

    /// Maps a segment-local cube coordinate (origin at the center,
    /// aligned with `Right`) into the global plane.
    pub fn local_to_global(&self, local: CubeCoordinates) -> CubeCoordinates {
        local.rotated_by(CubeDirection::Right.turn_count_to(self.direction)) + self.center
    }

    /// Inverse of `local_to_global`.
    pub fn global_to_local(&self, global: CubeCoordinates) -> CubeCoordinates {
        (global - self.center).rotated_by(self.direction.turn_count_to(CubeDirection::Right))
    }

    /// Grid position of a local cube coordinate, if inside the patch.
    fn array_position(local: CubeCoordinates) -> Option<(usize, usize)> {
        let cart = (local + CENTER.to_cube()).to_cartesian();
        cart.to_index().map(|_| (cart.x as usize, cart.y as usize))
    }

    /// Whether the global coordinate falls on this segment.
    pub fn contains(&self, coords: CubeCoordinates) -> bool {
        self.get(coords).is_some()
    }

    /// The field at a global coordinate, if this segment maps it.
    pub fn get(&self, coords: CubeCoordinates) -> Option<Field> {
        let (x, y) = Self::array_position(self.global_to_local(coords))?;
        Some(self.fields[x][y])
    }

    /// Mutable access to the field at a global coordinate.
    pub fn get_mut(&mut self, coords: CubeCoordinates) -> Option<&mut Field> {
        let (x, y) = Self::array_position(self.global_to_local(coords))?;
        Some(&mut self.fields[x][y])
    }

    /// Column index of a global coordinate along the segment direction,
    /// 0 at the rear edge through 3 at the tip.
    pub fn projection(&self, coords: CubeCoordinates) -> Option<i32> {
        let (x, _) = Self::array_position(self.global_to_local(coords))?;
        Some(x as i32)
    }

    /// Global coordinate of a grid cell, if the indices are in range.
    pub fn coordinate_at(&self, x: usize, y: usize) -> Option<CubeCoordinates> {
        let cart = CartesianCoordinate::new(x as i32, y as i32);
        cart.to_index()?;
        Some(self.local_to_global(cart.to_cube() - CENTER.to_cube()))
    }

    /// Whether the global coordinate is a sandbank of this segment.
    pub fn is_sandbank(&self, coords: CubeCoordinates) -> bool {
        self.get(coords)
            .map(|field| field.field_type == FieldType::Sandbank)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> Segment {
        Segment::water(CubeDirection::Right, CubeCoordinates::new(0, 0))
    }

    #[test]
    fn center_and_tip() {
        let segment = canonical();
        assert!(segment.contains(CubeCoordinates::new(0, 0)));
        assert_eq!(segment.tip(), CubeCoordinates::new(2, 0));
        assert!(segment.contains(segment.tip()));
        assert!(!segment.contains(CubeCoordinates::new(3, 0)));
    }

    #[test]
    fn midline_spans_four_columns() {
        let segment = canonical();
        for q in -1..=2 {
            assert!(segment.contains(CubeCoordinates::new(q, 0)), "q={}", q);
        }
        assert!(!segment.contains(CubeCoordinates::new(-2, 0)));
    }

    #[test]
    fn contains_exactly_twenty_fields() {
        let segment = canonical();
        let mut count = 0;
        for q in -4..=4 {
            for r in -4..=4 {
                if segment.contains(CubeCoordinates::new(q, r)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, SEGMENT_WIDTH * SEGMENT_HEIGHT);
    }

    #[test]
    fn local_global_roundtrip() {
        for direction in CubeDirection::VALUES {
            let segment = Segment::water(direction, CubeCoordinates::new(3, -2));
            for x in 0..SEGMENT_WIDTH {
                for y in 0..SEGMENT_HEIGHT {
                    let global = segment.coordinate_at(x, y).unwrap();
                    let local = segment.global_to_local(global);
                    assert_eq!(segment.local_to_global(local), global);
                    assert!(segment.contains(global));
                }
            }
        }
    }

    #[test]
    fn rotated_segment_maps_its_tip() {
        let segment = Segment::water(CubeDirection::DownRight, CubeCoordinates::new(0, 0));
        assert_eq!(segment.tip(), CubeCoordinates::new(0, 2));
        assert!(segment.contains(segment.tip()));
        assert!(!segment.contains(CubeCoordinates::new(-3, 0)));
        assert!(!segment.contains(CubeCoordinates::new(0, -2)));
    }

    #[test]
    fn get_reads_the_grid() {
        let mut segment = canonical();
        segment.fields[2][2] = Field::new(FieldType::Island, None);
        // Column 2 of the midline row is one step right of the center.
        assert_eq!(
            segment.get(CubeCoordinates::new(1, 0)).unwrap().field_type,
            FieldType::Island
        );
        assert_eq!(
            segment.get(CubeCoordinates::new(0, 0)).unwrap().field_type,
            FieldType::Water
        );
    }

    #[test]
    fn projection_runs_rear_to_tip() {
        let segment = canonical();
        assert_eq!(segment.projection(CubeCoordinates::new(-1, 0)), Some(0));
        assert_eq!(segment.projection(CubeCoordinates::new(0, 0)), Some(1));
        assert_eq!(segment.projection(CubeCoordinates::new(2, 0)), Some(3));
        assert_eq!(segment.projection(CubeCoordinates::new(9, 9)), None);
    }

    #[test]
    fn coordinate_at_inverts_get() {
        let segment = Segment::water(CubeDirection::UpLeft, CubeCoordinates::new(-2, 4));
        let coords = segment.coordinate_at(3, 1).unwrap();
        let local = segment.global_to_local(coords);
        assert_eq!(Segment::array_position(local), Some((3, 1)));
        assert!(segment.coordinate_at(4, 0).is_none());
        assert!(segment.coordinate_at(0, 5).is_none());
    }
}
