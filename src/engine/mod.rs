use crate::engine::move_list::MoveList;
use crate::logic::board::{Coordinate, Player};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod deadline;
pub mod eval;
pub mod move_list;
pub mod policy;
pub mod search;

/// A move is the destination cell of the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// Sentinel for "no legal move". Returning it from a search forfeits the
    /// turn; the driver must treat it as a terminal condition, not a crash.
    pub const NONE: Self = Self { row: -1, col: -1 };

    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    #[must_use]
    pub const fn coordinate(self) -> Coordinate {
        Coordinate {
            row: self.row,
            col: self.col,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deepest fully completed pass. Zero when the budget expired before any
    /// pass finished.
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

/// Milliseconds left in the current turn, supplied fresh by the caller per
/// search call. Monotonically non-increasing and cheap to poll; the engine
/// queries it on every node expansion.
pub type RemainingTime<'a> = &'a dyn Fn() -> f64;

/// Capability set the search engine requires from a board state. States are
/// immutable snapshots: `forecast` yields a new state and leaves the receiver
/// untouched, so the engine only ever holds transient references during one
/// search call.
pub trait GameState {
    fn to_move(&self) -> Player;

    /// Finite and deterministic for a fixed state.
    fn legal_moves_for(&self, player: Player) -> MoveList;

    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.to_move())
    }

    fn forecast(&self, mv: Move) -> Self
    where
        Self: Sized;

    /// Terminal tests, mutually exclusive per player per state.
    fn is_winner(&self, player: Player) -> bool;
    fn is_loser(&self, player: Player) -> bool;

    /// `None` until the player has made an opening placement.
    fn player_location(&self, player: Player) -> Option<Coordinate>;

    fn open_cell_count(&self) -> u32;

    fn width(&self) -> i8;
    fn height(&self) -> i8;

    fn total_cell_count(&self) -> u32 {
        u32::from(self.width().unsigned_abs()) * u32::from(self.height().unsigned_abs())
    }
}

/// Heuristic score of `state` from `player`'s perspective. Must return
/// `f64::NEG_INFINITY` iff `player` has lost and `f64::INFINITY` iff `player`
/// has won; every other state maps to a finite score. Pure, no shared state.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

pub trait Searcher<S: GameState> {
    fn search(&mut self, state: &S, remaining_time: RemainingTime<'_>) -> (Move, SearchStats);

    /// Per-turn driver surface: the selected move, or [`Move::NONE`] when no
    /// legal move exists or the budget expired before any result.
    fn select_move(&mut self, state: &S, remaining_time: RemainingTime<'_>) -> Move {
        self.search(state, remaining_time).0
    }
}
