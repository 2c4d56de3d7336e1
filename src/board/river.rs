//! The segmented river board.
//!
//! An ordered chain of segments, head first. Field lookup scans the
//! chain in order, so every global coordinate maps to at most one
//! segment. The board also answers neighborhood, current, and
//! nearest-field queries for the rules layer.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::coords::{CubeCoordinates, CubeDirection};
use super::field::{Field, FieldType};
use super::segment::Segment;

/// The river: a chain of segments and the direction in which the next
/// not-yet-revealed segment will attach.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub segments: Vec<Segment>,
    pub next_direction: CubeDirection,
}

impl Board {
    pub fn new(segments: Vec<Segment>, next_direction: CubeDirection) -> Self {
        Self { segments, next_direction }
    }

    /// The field at a global coordinate, scanning segments in order.
    pub fn get(&self, coords: CubeCoordinates) -> Option<Field> {
        self.segments.iter().find_map(|segment| segment.get(coords))
    }

    /// Mutable access to the field at a global coordinate, for board
    /// setup and passenger bookkeeping.
    pub fn get_mut(&mut self, coords: CubeCoordinates) -> Option<&mut Field> {
        self.segments
            .iter_mut()
            .find_map(|segment| segment.get_mut(coords))
    }

    /// The owning segment and its chain index.
    pub fn segment_with_index_at(&self, coords: CubeCoordinates) -> Option<(usize, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, segment)| segment.contains(coords))
    }

    /// Chain index of the owning segment.
    pub fn segment_index(&self, coords: CubeCoordinates) -> Option<usize> {
        self.segment_with_index_at(coords).map(|(index, _)| index)
    }

    /// The owning segment.
    pub fn find_segment(&self, coords: CubeCoordinates) -> Option<&Segment> {
        self.segment_with_index_at(coords).map(|(_, segment)| segment)
    }

    /// How many segments apart two coordinates lie.
    pub fn segment_distance(&self, a: CubeCoordinates, b: CubeCoordinates) -> Option<i32> {
        let first = self.segment_index(a)? as i32;
        let second = self.segment_index(b)? as i32;
        Some((first - second).abs())
    }

    /// The field one step from `coords` in `direction`.
    pub fn get_field_in_direction(
        &self,
        direction: CubeDirection,
        coords: CubeCoordinates,
    ) -> Option<Field> {
        self.get(coords + direction.vector())
    }

    /// Neighboring fields in direction-ordinal order.
    pub fn neighboring_fields(&self, coords: CubeCoordinates) -> Vec<Option<Field>> {
        CubeDirection::VALUES
            .iter()
            .map(|&direction| self.get_field_in_direction(direction, coords))
            .collect()
    }

    /// Neighboring coordinates in direction-ordinal order, present only
    /// where the board maps a field.
    pub fn neighboring_coordinates(&self, coords: CubeCoordinates) -> Vec<Option<CubeCoordinates>> {
        CubeDirection::VALUES
            .iter()
            .map(|&direction| {
                let neighbor = coords + direction.vector();
                self.get(neighbor).map(|_| neighbor)
            })
            .collect()
    }

    /// Global coordinate of a grid cell of a segment.
    pub fn get_coordinate_by_index(
        &self,
        segment_index: usize,
        x: usize,
        y: usize,
    ) -> Option<CubeCoordinates> {
        self.segments.get(segment_index)?.coordinate_at(x, y)
    }

    /// The four cells of a segment that carry current: one behind the
    /// center, the center, and two ahead bending toward the following
    /// segment (or `next_direction` for the last segment in the chain).
    fn stream_cells(&self, segment_index: usize) -> [CubeCoordinates; 4] {
        let segment = &self.segments[segment_index];
        let bend = self
            .segments
            .get(segment_index + 1)
            .map(|next| next.direction)
            .unwrap_or(self.next_direction)
            .vector();
        [
            segment.center - segment.direction.vector(),
            segment.center,
            segment.center + bend,
            segment.center + bend * 2,
        ]
    }

    /// Whether the field at `coords` carries current.
    pub fn does_field_have_stream(&self, coords: CubeCoordinates) -> bool {
        self.get_field_current_direction(coords).is_some()
    }

    /// The drift direction at `coords`: the owning segment's direction
    /// when the field carries current.
    pub fn get_field_current_direction(&self, coords: CubeCoordinates) -> Option<CubeDirection> {
        let (index, segment) = self.segment_with_index_at(coords)?;
        if self.stream_cells(index).contains(&coords) {
            Some(segment.direction)
        } else {
            None
        }
    }

    /// Whether the field at `coords` is a sandbank.
    pub fn is_sandbank(&self, coords: CubeCoordinates) -> bool {
        self.get(coords)
            .map(|field| field.field_type == FieldType::Sandbank)
            .unwrap_or(false)
    }

    /// Breadth-first search for the nearest fields of a type.
    ///
    /// Returns every coordinate tied at the minimum distance, in
    /// discovery order, or an empty vec when the board holds no such
    /// field reachable from `start`.
    pub fn find_nearest_field_types(
        &self,
        start: CubeCoordinates,
        field_type: FieldType,
    ) -> Vec<CubeCoordinates> {
        let mut nearest = Vec::new();
        let mut found_distance = i32::MAX;
        let mut visited: HashSet<CubeCoordinates> = HashSet::new();
        let mut queue: VecDeque<(CubeCoordinates, i32)> = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((coords, distance)) = queue.pop_front() {
            if distance > found_distance {
                break;
            }
            if let Some(field) = self.get(coords) {
                if field.field_type == field_type {
                    nearest.push(coords);
                    found_distance = distance;
                }
            }
            for neighbor in self.neighboring_coordinates(coords).into_iter().flatten() {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }

        nearest
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for y in 0..segment.fields[0].len() {
                for column in &segment.fields {
                    let symbol = match column[y].field_type {
                        FieldType::Water => 'W',
                        FieldType::Island => 'I',
                        FieldType::Passenger => 'P',
                        FieldType::Goal => 'G',
                        FieldType::Sandbank => 'S',
                    };
                    write!(f, "{}", symbol)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_water_board(direction: CubeDirection, next: CubeDirection) -> Board {
        Board::new(
            vec![Segment::water(direction, CubeCoordinates::new(0, 0))],
            next,
        )
    }

    /// Water frame around a sandbank block in columns 0-2, rows 1-3.
    fn sandbank_board() -> Board {
        let mut segment = Segment::water(CubeDirection::Right, CubeCoordinates::new(0, 0));
        for x in 0..3 {
            for y in 1..4 {
                segment.fields[x][y] = Field::new(FieldType::Sandbank, None);
            }
        }
        Board::new(vec![segment], CubeDirection::Right)
    }

    #[test]
    fn get_scans_segments_in_order() {
        let board = single_water_board(CubeDirection::Right, CubeDirection::Right);
        assert!(board.get(CubeCoordinates::new(0, 0)).is_some());
        assert!(board.get(CubeCoordinates::new(2, 0)).is_some());
        assert!(board.get(CubeCoordinates::new(5, 5)).is_none());
    }

    #[test]
    fn segment_index_and_distance() {
        let first = Segment::water(CubeDirection::Right, CubeCoordinates::new(0, 0));
        let second = Segment::water(CubeDirection::Right, CubeCoordinates::new(4, 0));
        let board = Board::new(vec![first, second], CubeDirection::Right);

        assert_eq!(board.segment_index(CubeCoordinates::new(0, 0)), Some(0));
        assert_eq!(board.segment_index(CubeCoordinates::new(4, 0)), Some(1));
        assert_eq!(
            board.segment_distance(CubeCoordinates::new(-1, 0), CubeCoordinates::new(6, 0)),
            Some(1)
        );
        assert_eq!(
            board.segment_distance(CubeCoordinates::new(0, 0), CubeCoordinates::new(1, 0)),
            Some(0)
        );
        assert!(board
            .segment_distance(CubeCoordinates::new(0, 0), CubeCoordinates::new(20, 0))
            .is_none());
    }

    #[test]
    fn neighboring_fields_follow_direction_order() {
        let board = single_water_board(CubeDirection::Right, CubeDirection::Right);
        let neighbors = board.neighboring_fields(CubeCoordinates::new(-1, 0));
        assert_eq!(neighbors.len(), 6);
        // Left of the rear column lies off the board.
        assert!(neighbors[0].is_some());
        assert!(neighbors[3].is_none());
    }

    #[test]
    fn stream_follows_the_bend_toward_next_direction() {
        let board = single_water_board(CubeDirection::Right, CubeDirection::DownRight);

        assert!(board.does_field_have_stream(CubeCoordinates::new(-1, 0)));
        assert!(board.does_field_have_stream(CubeCoordinates::new(0, 0)));
        assert!(board.does_field_have_stream(CubeCoordinates::new(0, 1)));
        assert!(board.does_field_have_stream(CubeCoordinates::new(0, 2)));
        // The straight-ahead cells are bypassed by the bend.
        assert!(!board.does_field_have_stream(CubeCoordinates::new(1, 0)));
        assert!(!board.does_field_have_stream(CubeCoordinates::new(-1, 1)));
        assert!(!board.does_field_have_stream(CubeCoordinates::new(1, 1)));
    }

    #[test]
    fn stream_on_rotated_segment() {
        let board = single_water_board(CubeDirection::DownRight, CubeDirection::DownRight);

        assert!(board.does_field_have_stream(CubeCoordinates::new(0, -1)));
        assert!(board.does_field_have_stream(CubeCoordinates::new(0, 0)));
        assert!(board.does_field_have_stream(CubeCoordinates::new(0, 1)));
        assert!(!board.does_field_have_stream(CubeCoordinates::new(-1, 1)));
        assert!(!board.does_field_have_stream(CubeCoordinates::new(1, 1)));
    }

    #[test]
    fn current_direction_is_the_owning_segments() {
        let board = single_water_board(CubeDirection::Right, CubeDirection::DownRight);
        assert_eq!(
            board.get_field_current_direction(CubeCoordinates::new(0, 1)),
            Some(CubeDirection::Right)
        );
        assert_eq!(
            board.get_field_current_direction(CubeCoordinates::new(1, 0)),
            None
        );
    }

    #[test]
    fn nearest_field_finds_the_standing_cell() {
        let board = sandbank_board();
        assert_eq!(
            board.find_nearest_field_types(CubeCoordinates::new(0, 0), FieldType::Sandbank),
            vec![CubeCoordinates::new(0, 0)]
        );
    }

    #[test]
    fn nearest_field_returns_all_ties_in_discovery_order() {
        let mut board = sandbank_board();
        board.segments[0].fields[1][2] = Field::water();

        assert_eq!(
            board.find_nearest_field_types(CubeCoordinates::new(0, 0), FieldType::Sandbank),
            vec![
                CubeCoordinates::new(1, 0),
                CubeCoordinates::new(0, 1),
                CubeCoordinates::new(-1, 1),
                CubeCoordinates::new(-1, 0),
                CubeCoordinates::new(0, -1),
                CubeCoordinates::new(1, -1),
            ]
        );
        assert_eq!(
            board.find_nearest_field_types(CubeCoordinates::new(2, 0), FieldType::Sandbank),
            vec![
                CubeCoordinates::new(1, 1),
                CubeCoordinates::new(1, 0),
                CubeCoordinates::new(2, -1),
            ]
        );
        assert_eq!(
            board.find_nearest_field_types(CubeCoordinates::new(1, 0), FieldType::Water),
            vec![CubeCoordinates::new(2, 0), CubeCoordinates::new(0, 0)]
        );
    }

    #[test]
    fn nearest_field_is_empty_when_type_absent() {
        let board = sandbank_board();
        assert!(board
            .find_nearest_field_types(CubeCoordinates::new(0, 0), FieldType::Goal)
            .is_empty());
    }

    #[test]
    fn display_renders_one_char_per_field() {
        let board = sandbank_board();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 4));
        assert_eq!(lines[0], "WWWW");
        assert_eq!(lines[2], "SSSW");
    }
}
