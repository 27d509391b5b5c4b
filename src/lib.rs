//! Core engine for an Isolation-style pursuit game on a fixed grid: heuristic
//! evaluators, depth-limited minimax, and iterative-deepening alpha-beta
//! search under a hard per-turn time budget.
//!
//! The search engine consumes board state through the [`GameState`] trait and
//! never owns or mutates it; `logic::board` provides the bundled reference
//! implementation used by the tests and by embedding drivers.

pub mod engine;
pub mod logic;

pub use engine::config::EngineConfig;
pub use engine::deadline::Deadline;
pub use engine::eval::{BlendedEvaluator, DistanceEvaluator, MobilityEvaluator};
pub use engine::move_list::MoveList;
pub use engine::search::{AlphaBetaEngine, MinimaxEngine};
pub use engine::{Evaluator, GameState, Move, RemainingTime, SearchStats, Searcher};
pub use logic::board::{Board, Coordinate, Player};
