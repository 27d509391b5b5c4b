//! Root move-selection fallback shared by every search variant.

use crate::engine::move_list::MoveList;
use crate::engine::Move;

/// Applies the root tie-break rule after enumeration: if no candidate ever
/// strictly improved on the `-inf` baseline (every reachable value was also
/// `-inf`) but legal moves exist, the first enumerated legal move is chosen
/// instead of the sentinel. With no legal moves at all the sentinel stands
/// and the caller treats the turn as forfeited.
#[must_use]
pub fn resolve_root_move(best_move: Move, legal_moves: &MoveList) -> Move {
    if best_move.is_none() {
        legal_moves.first().unwrap_or(Move::NONE)
    } else {
        best_move
    }
}
