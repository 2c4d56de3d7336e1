//! Game state and the move execution pipeline.
//!
//! A `GameState` is a value: `perform_move` returns a fresh state and
//! never exposes a partially applied one. Turn ownership alternates
//! each move, with the ship further down the river moving first at
//! every round boundary.

use serde::{Deserialize, Serialize};

use crate::actions::{AccelerationProblem, Action, ActionProblem, AdvanceProblem, Move};
use crate::board::{Board, CubeDirection, FieldType, Ship, Team, FREE_ACC, FREE_TURNS};
use crate::movegen;

/// Advance points per fully passed segment.
pub const POINTS_PER_SEGMENT: i32 = 5;

/// Points per passenger aboard.
pub const POINTS_PER_PASSENGER: i32 = 5;

/// Bonus for crossing the goal line.
pub const FINISH_POINTS: i32 = 6;

/// Passengers a ship can carry.
pub const MAX_PASSENGERS: i32 = 2;

/// The game ends after this many turns (two ships, fifteen rounds).
pub const TURN_LIMIT: i32 = 30;

/// Point readout of one team, split by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPoints {
    pub ship_points: i32,
    pub coal_points: i32,
    pub finish_points: i32,
}

impl TeamPoints {
    pub fn total(&self) -> i32 {
        self.ship_points + self.coal_points + self.finish_points
    }
}

/// Complete game snapshot: board, both ships, and turn ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// 0-based move counter; two turns make a round.
    pub turn: i32,
    pub team_one: Ship,
    pub team_two: Ship,
    current_team: Team,
    pub last_move: Option<Move>,
    /// History of every performed move, in turn order.
    pub moves: Vec<Move>,
}

impl GameState {
    pub fn new(board: Board, turn: i32, team_one: Ship, team_two: Ship) -> Self {
        let mut state = Self {
            board,
            turn,
            team_one,
            team_two,
            current_team: Team::One,
            last_move: None,
            moves: Vec::new(),
        };
        state.current_team = state.team_from_turn();
        state
    }

    /// The team whose ship lies further down the river moves first in
    /// each round; its opponent follows.
    fn team_from_turn(&self) -> Team {
        let ahead = self.determine_ahead_team();
        if self.turn % 2 == 0 {
            ahead
        } else {
            ahead.opponent()
        }
    }

    /// The team to act. Fixed for the duration of a move.
    pub fn current_team(&self) -> Team {
        self.current_team
    }

    pub fn ship(&self, team: Team) -> &Ship {
        match team {
            Team::One => &self.team_one,
            Team::Two => &self.team_two,
        }
    }

    pub fn ship_mut(&mut self, team: Team) -> &mut Ship {
        match team {
            Team::One => &mut self.team_one,
            Team::Two => &mut self.team_two,
        }
    }

    /// The acting ship.
    pub fn current_ship(&self) -> &Ship {
        self.ship(self.current_team)
    }

    /// The waiting ship.
    pub fn other_ship(&self) -> &Ship {
        self.ship(self.current_team.opponent())
    }

    /// Whether both ships share a field, obliging the acting ship to
    /// push before its move can end.
    pub fn must_push(&self) -> bool {
        self.team_one.position == self.team_two.position
    }

    /// The team whose ship is further down the river: more segments
    /// passed, then the deeper column within the segment. Ties go to
    /// team one.
    pub fn determine_ahead_team(&self) -> Team {
        if self.ship_advance_points(&self.team_two) > self.ship_advance_points(&self.team_one) {
            Team::Two
        } else {
            Team::One
        }
    }

    /// Progress of a ship along the river, five points per segment plus
    /// the column index within its segment.
    pub fn ship_advance_points(&self, ship: &Ship) -> i32 {
        self.board
            .segment_with_index_at(ship.position)
            .and_then(|(index, segment)| {
                let projection = segment.projection(ship.position)?;
                Some(index as i32 * POINTS_PER_SEGMENT + projection)
            })
            .unwrap_or(0)
    }

    fn reached_goal(&self, ship: &Ship) -> bool {
        ship.speed == 1
            && ship.passengers >= 2
            && self
                .board
                .get(ship.position)
                .map(|field| field.field_type == FieldType::Goal)
                .unwrap_or(false)
    }

    /// The split point readout of a team.
    pub fn calculate_points(&self, team: Team) -> TeamPoints {
        let ship = self.ship(team);
        TeamPoints {
            ship_points: self.ship_advance_points(ship) + ship.passengers * POINTS_PER_PASSENGER,
            coal_points: ship.coal,
            finish_points: if self.reached_goal(ship) { FINISH_POINTS } else { 0 },
        }
    }

    /// Applies a full move, returning the successor state or the first
    /// problem. The original state is left untouched.
    pub fn perform_move(&self, performed: &Move) -> Result<GameState, ActionProblem> {
        let mut state = self.clone();
        let team = state.current_team;
        let mut sandbank_locked = false;

        for (index, action) in performed.actions.iter().enumerate() {
            if index > 0 && matches!(action, Action::Accelerate(_)) {
                return Err(AccelerationProblem::NotFirstAction.into());
            }
            if state.must_push() && !matches!(action, Action::Push(_)) {
                return Err(AdvanceProblem::InsufficientPush.into());
            }
            if sandbank_locked && matches!(action, Action::Advance(_)) {
                return Err(AdvanceProblem::MoveEndOnSandbank.into());
            }
            action.perform(&mut state)?;
            if matches!(action, Action::Advance(_)) {
                sandbank_locked = state.board.is_sandbank(state.ship(team).position);
            }
        }

        if state.must_push() {
            return Err(AdvanceProblem::InsufficientPush.into());
        }
        if state.ship(team).movement != 0 {
            return Err(AdvanceProblem::MovementPointsMissing.into());
        }

        state.pickup_passenger(team);
        state.team_one.points = state.calculate_points(Team::One).total();
        state.team_two.points = state.calculate_points(Team::Two).total();
        state.moves.push(performed.clone());
        state.last_move = Some(performed.clone());
        state.advance_turn();
        Ok(state)
    }

    /// Takes a passenger aboard when the ship lies still next to a dock
    /// facing it and has room left. Mutates only this board snapshot.
    fn pickup_passenger(&mut self, team: Team) -> bool {
        let ship = *self.ship(team);
        if ship.speed > 1 || ship.passengers >= MAX_PASSENGERS {
            return false;
        }
        for direction in CubeDirection::VALUES {
            let shore = ship.position + direction.vector();
            let Some(field) = self.board.get(shore) else { continue };
            let Some(passenger) = field.passenger else { continue };
            if passenger.count > 0 && shore + passenger.direction.vector() == ship.position {
                if let Some(field) = self.board.get_mut(shore) {
                    if let Some(passenger) = field.passenger.as_mut() {
                        passenger.count -= 1;
                    }
                }
                self.ship_mut(team).passengers += 1;
                return true;
            }
        }
        false
    }

    /// Flips turn ownership and prepares the now-current ship: per-turn
    /// bookkeeping resets, then the river current carries it one field
    /// downstream unless the target is unmapped, blocked, or occupied.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.current_team = self.team_from_turn();
        let team = self.current_team;

        let ship = self.ship_mut(team);
        ship.free_acc = FREE_ACC;
        ship.free_turns = FREE_TURNS;
        ship.movement = ship.speed;

        let position = self.ship(team).position;
        if let Some(direction) = self.board.get_field_current_direction(position) {
            let target = position + direction.vector();
            let passable = self
                .board
                .get(target)
                .map(|field| field.is_passable())
                .unwrap_or(false);
            if passable && target != self.ship(team.opponent()).position {
                self.ship_mut(team).position = target;
            }
        }
    }

    /// Whether the game has ended: a ship finished, the turn limit is
    /// reached, or the acting ship has no legal move left.
    pub fn is_over(&self) -> bool {
        if self.reached_goal(&self.team_one) || self.reached_goal(&self.team_two) {
            return true;
        }
        if self.turn >= TURN_LIMIT {
            return true;
        }
        movegen::get_simple_moves(self, self.current_ship().coal).is_empty()
    }

    /// Whether the team wins the finished game, comparing points, then
    /// passengers, then coal.
    pub fn is_winner(&self, team: Team) -> bool {
        let own = self.calculate_points(team).total();
        let other = self.calculate_points(team.opponent()).total();
        if own != other {
            return own > other;
        }
        let own_ship = self.ship(team);
        let other_ship = self.ship(team.opponent());
        if own_ship.passengers != other_ship.passengers {
            return own_ship.passengers > other_ship.passengers;
        }
        own_ship.coal > other_ship.coal
    }

    /// All legal moves of at most `rank` actions spending at most
    /// `max_coal` coal.
    pub fn get_actions(&self, rank: usize, max_coal: i32) -> Vec<Move> {
        movegen::get_actions(self, rank, max_coal)
    }

    /// All legal moves of the common four-action shape.
    pub fn get_simple_moves(&self, max_coal: i32) -> Vec<Move> {
        movegen::get_simple_moves(self, max_coal)
    }
}
