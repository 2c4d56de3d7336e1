//! Legal move generation.
//!
//! Enumerates every legal move for the acting ship: accelerations
//! crossed with rotation prefixes crossed with advance sequences, each
//! candidate verified by replaying it on a scratch state. Every emitted
//! move therefore succeeds when handed to `GameState::perform_move`.

use rand::Rng;

use crate::actions::{Accelerate, Action, Advance, Move, Push, Turn};
use crate::board::{CubeDirection, Team, MAX_SPEED, MIN_SPEED};
use crate::game::GameState;

/// All legal moves of the common four-action shape (acceleration,
/// rotation, advance, push) spending at most `max_coal` coal.
pub fn get_simple_moves(state: &GameState, max_coal: i32) -> Vec<Move> {
    get_actions(state, 4, max_coal)
}

/// All legal moves of at most `rank` actions spending at most
/// `max_coal` coal.
///
/// Output order is stable: accelerations ascending, rotation prefixes
/// by turn count, advances by distance, pushes by direction ordinal.
pub fn get_actions(state: &GameState, rank: usize, max_coal: i32) -> Vec<Move> {
    let mut moves = Vec::new();
    if rank == 0 {
        return moves;
    }
    let team = state.current_team();
    let ship = state.ship(team);
    let coal_budget = max_coal.clamp(0, ship.coal);
    let on_sandbank = state.board.is_sandbank(ship.position);

    // A sandbank pins speed and rudder; otherwise enumerate every speed
    // change the speed window and the coal budget allow, 0 meaning the
    // speed is kept without an action.
    let accelerations: Vec<i32> = if on_sandbank {
        vec![0]
    } else {
        let up = (MAX_SPEED - ship.speed).min(ship.free_acc + coal_budget);
        let down = (ship.speed - MIN_SPEED).min(ship.free_acc + coal_budget);
        (-down..=up).collect()
    };

    for &acc in &accelerations {
        let mut accelerated = state.clone();
        let mut prefix: Vec<Action> = Vec::new();
        if acc != 0 {
            let action = Action::Accelerate(Accelerate::new(acc));
            if action.perform(&mut accelerated).is_err() {
                continue;
            }
            prefix.push(action);
        }
        if ship.coal - accelerated.ship(team).coal > max_coal {
            continue;
        }

        // -3..=2 covers each of the six headings exactly once.
        for turn_count in -3..=2 {
            if on_sandbank && turn_count != 0 {
                continue;
            }
            let mut turned = accelerated.clone();
            let mut actions = prefix.clone();
            if turn_count != 0 {
                let heading = turned.ship(team).direction.rotated_by(turn_count);
                let action = Action::Turn(Turn::new(heading));
                if action.perform(&mut turned).is_err() {
                    continue;
                }
                actions.push(action);
            }
            if ship.coal - turned.ship(team).coal > max_coal {
                continue;
            }
            if actions.len() < rank {
                expand_advances(&turned, team, &actions, rank - actions.len(), &mut moves);
            }
        }
    }
    moves
}

/// Appends every advance continuation that exactly consumes the
/// remaining movement, branching into pushes on opponent contact.
fn expand_advances(
    state: &GameState,
    team: Team,
    prefix: &[Action],
    budget: usize,
    out: &mut Vec<Move>,
) {
    if budget == 0 || state.ship(team).movement <= 0 {
        return;
    }
    let candidates: Vec<i32> = if state.board.is_sandbank(state.ship(team).position) {
        vec![-1, 1, 2]
    } else {
        (1..=state.ship(team).movement).collect()
    };

    for distance in candidates {
        let action = Action::Advance(Advance::new(distance));
        let mut advanced = state.clone();
        if action.perform(&mut advanced).is_err() {
            continue;
        }
        let mut actions = prefix.to_vec();
        actions.push(action);
        if advanced.must_push() {
            if budget >= 2 {
                expand_pushes(&advanced, team, &actions, budget - 1, out);
            }
        } else if advanced.ship(team).movement == 0 {
            out.push(Move::new(actions));
        }
        // A stop on open water with movement left never completes the
        // move; shorter speeds are covered by other accelerations.
    }
}

/// Appends every legal push, continuing the advance when movement and
/// the action budget remain.
fn expand_pushes(
    state: &GameState,
    team: Team,
    prefix: &[Action],
    budget: usize,
    out: &mut Vec<Move>,
) {
    for direction in CubeDirection::VALUES {
        let action = Action::Push(Push::new(direction));
        let mut pushed = state.clone();
        if action.perform(&mut pushed).is_err() {
            continue;
        }
        let mut actions = prefix.to_vec();
        actions.push(action);
        if pushed.ship(team).movement == 0 {
            out.push(Move::new(actions));
        } else {
            expand_advances(&pushed, team, &actions, budget - 1, out);
        }
    }
}

/// Picks a uniformly random legal move, or `None` when the acting ship
/// has none.
pub fn random_move(state: &GameState, max_coal: i32, rng: &mut impl Rng) -> Option<Move> {
    let moves = get_simple_moves(state, max_coal);
    if moves.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..moves.len());
    Some(moves[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, CubeCoordinates, Field, FieldType, Segment, Ship};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn water_board() -> Board {
        Board::new(
            vec![Segment::water(CubeDirection::Right, CubeCoordinates::new(0, 0))],
            CubeDirection::Right,
        )
    }

    fn canonical_state() -> GameState {
        let one = Ship::new(Team::One, CubeCoordinates::new(0, -1));
        let two = Ship::new(Team::Two, CubeCoordinates::new(-1, 1));
        GameState::new(water_board(), 0, one, two)
    }

    fn assert_all_replayable(state: &GameState, moves: &[Move]) {
        for candidate in moves {
            assert!(
                state.perform_move(candidate).is_ok(),
                "generated move failed to replay: {:?}",
                candidate
            );
        }
    }

    #[test]
    fn every_generated_move_replays() {
        let state = canonical_state();
        let moves = get_simple_moves(&state, 1);
        assert!(!moves.is_empty());
        assert_all_replayable(&state, &moves);
    }

    #[test]
    fn output_contains_no_duplicates() {
        let state = canonical_state();
        let moves = get_simple_moves(&state, 2);
        let distinct: HashSet<_> = moves.iter().cloned().collect();
        assert_eq!(distinct.len(), moves.len());
    }

    #[test]
    fn canonical_start_contains_the_expected_shapes() {
        let state = canonical_state();
        let moves = get_simple_moves(&state, 1);

        let plain = Move::new(vec![Action::Advance(Advance::new(1))]);
        assert!(moves.contains(&plain));

        let accelerated = Move::new(vec![
            Action::Accelerate(Accelerate::new(1)),
            Action::Advance(Advance::new(2)),
        ]);
        assert!(moves.contains(&accelerated));

        let turned = Move::new(vec![
            Action::Turn(Turn::new(CubeDirection::DownRight)),
            Action::Advance(Advance::new(1)),
        ]);
        assert!(moves.contains(&turned));

        // No move decelerates below the minimum speed.
        assert!(moves.iter().all(|m| {
            m.actions
                .iter()
                .all(|a| !matches!(a, Action::Accelerate(acc) if acc.acc < 0))
        }));
    }

    #[test]
    fn coal_budget_limits_the_enumeration() {
        let state = canonical_state();
        let frugal = get_simple_moves(&state, 0);
        assert!(!frugal.is_empty());
        assert_all_replayable(&state, &frugal);
        // Without coal, at most one free acceleration step and one free
        // turn step are available.
        for candidate in &frugal {
            for action in &candidate.actions {
                if let Action::Accelerate(acc) = action {
                    assert_eq!(acc.acc.abs(), 1);
                }
            }
        }
        let rich = get_simple_moves(&state, 2);
        assert!(rich.len() > frugal.len());
    }

    #[test]
    fn contact_generates_advance_push_moves() {
        let one = Ship::new(Team::One, CubeCoordinates::new(0, -1));
        let two = Ship::new(Team::Two, CubeCoordinates::new(2, -1));
        let mut state = GameState::new(water_board(), 1, one, two);
        let team = state.current_team();
        state.ship_mut(team).speed = 3;
        state.ship_mut(team).movement = 3;

        let moves = get_simple_moves(&state, 1);
        assert_all_replayable(&state, &moves);
        let with_push: Vec<&Move> = moves
            .iter()
            .filter(|m| m.actions.iter().any(|a| matches!(a, Action::Push(_))))
            .collect();
        assert!(!with_push.is_empty());
        // Every contact move reaches the opponent before pushing.
        for candidate in &with_push {
            assert!(candidate
                .actions
                .iter()
                .any(|a| matches!(a, Action::Advance(adv) if adv.distance == 2)));
        }
    }

    #[test]
    fn sandbank_limits_moves_to_single_steps() {
        let mut state = canonical_state();
        let team = state.current_team();
        let position = state.ship(team).position;
        *state.board.get_mut(position).unwrap() = Field::new(FieldType::Sandbank, None);

        let moves = get_simple_moves(&state, 6);
        assert_all_replayable(&state, &moves);
        assert!(!moves.is_empty());
        for candidate in &moves {
            assert_eq!(candidate.actions.len(), 1);
            assert!(matches!(
                candidate.actions[0],
                Action::Advance(adv) if adv.distance == 1 || adv.distance == -1
            ));
        }
    }

    #[test]
    fn trapped_ship_has_no_moves() {
        let mut state = canonical_state();
        let team = state.current_team();
        let position = state.ship(team).position;
        for direction in CubeDirection::VALUES {
            if let Some(field) = state.board.get_mut(position + direction.vector()) {
                *field = Field::new(FieldType::Island, None);
            }
        }
        assert!(get_simple_moves(&state, 6).is_empty());
    }

    #[test]
    fn rank_limits_the_action_count() {
        let state = canonical_state();
        for rank in 1..=4 {
            let moves = get_actions(&state, rank, 2);
            assert!(moves.iter().all(|m| m.actions.len() <= rank));
        }
        assert!(get_actions(&state, 0, 2).is_empty());
    }

    #[test]
    fn random_move_is_seed_deterministic() {
        let state = canonical_state();
        let first = random_move(&state, 2, &mut StdRng::seed_from_u64(7));
        let second = random_move(&state, 2, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn random_move_is_none_when_trapped() {
        let mut state = canonical_state();
        let team = state.current_team();
        let position = state.ship(team).position;
        for direction in CubeDirection::VALUES {
            if let Some(field) = state.board.get_mut(position + direction.vector()) {
                *field = Field::new(FieldType::Island, None);
            }
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_move(&state, 6, &mut rng).is_none());
    }
}
