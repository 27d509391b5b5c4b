//! Heuristic evaluation. All variants score from the root player's
//! perspective regardless of who is to move at the node being evaluated;
//! minimizing layers minimize the root player's own score. This asymmetry is
//! deliberate and load-bearing.

use crate::engine::{Evaluator, GameState};
use crate::logic::board::{Coordinate, Player};

/// Weight on the root player's own move count in the mobility margin.
/// Limiting the opponent is valuable, but keeping options open is worth more.
pub const OWN_MOVE_WEIGHT: f64 = 3.0;

/// Squared Euclidean distance between the players, with the four grid
/// corners forced to `-inf` (corner cells are mobility traps).
#[derive(Debug, Clone, Copy)]
pub struct DistanceEvaluator;

/// `3 x own_moves - opponent_moves`.
#[derive(Debug, Clone, Copy)]
pub struct MobilityEvaluator;

/// Phase-aware blend of the other two: mobility dominates early, positional
/// separation dominates late, same corner penalty as the distance variant.
#[derive(Debug, Clone, Copy)]
pub struct BlendedEvaluator;

fn squared_distance(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => {
            let dr = f64::from(a.row) - f64::from(b.row);
            let dc = f64::from(a.col) - f64::from(b.col);
            dr.mul_add(dr, dc * dc)
        }
        // Before both opening placements there is no separation to measure.
        _ => 0.0,
    }
}

fn in_corner<S: GameState>(state: &S, player: Player) -> bool {
    state.player_location(player).is_some_and(|loc| {
        (loc.row == 0 || loc.row == state.height() - 1)
            && (loc.col == 0 || loc.col == state.width() - 1)
    })
}

#[allow(clippy::cast_precision_loss)]
fn mobility_margin<S: GameState>(state: &S, player: Player) -> f64 {
    let own = state.legal_moves_for(player).len() as f64;
    let opp = state.legal_moves_for(player.opposite()).len() as f64;
    OWN_MOVE_WEIGHT.mul_add(own, -opp)
}

impl<S: GameState> Evaluator<S> for DistanceEvaluator {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }
        if in_corner(state, player) {
            return f64::NEG_INFINITY;
        }
        squared_distance(
            state.player_location(player),
            state.player_location(player.opposite()),
        )
    }
}

impl<S: GameState> Evaluator<S> for MobilityEvaluator {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }
        mobility_margin(state, player)
    }
}

impl<S: GameState> Evaluator<S> for BlendedEvaluator {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }
        if in_corner(state, player) {
            return f64::NEG_INFINITY;
        }

        let open = f64::from(state.open_cell_count());
        let total = f64::from(state.total_cell_count());
        let distance = squared_distance(
            state.player_location(player),
            state.player_location(player.opposite()),
        );
        (total - open).mul_add(mobility_margin(state, player), open * distance)
    }
}
