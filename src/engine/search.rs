//! Adversarial search. Both engines share the evaluation contract and the
//! root tie-break rule: a candidate replaces the incumbent only on a strictly
//! greater value, so the first move achieving the maximum wins ties in
//! enumeration order. Alpha-beta pruning reduces nodes visited but never
//! changes the selected move for a given depth and evaluator.
//!
//! Cancellation is a synchronous signal, not an error: a deadline hit makes
//! the active frame return `None`, every caller propagates it with `?`, and
//! only the top-level `search` driver turns it into "the last good result".

use crate::engine::config::EngineConfig;
use crate::engine::deadline::Deadline;
use crate::engine::policy::resolve_root_move;
use crate::engine::{Evaluator, GameState, Move, RemainingTime, SearchStats, Searcher};
use crate::logic::board::Player;
use std::time::Instant;

/// Fixed-depth minimax, no pruning.
pub struct MinimaxEngine<E> {
    config: EngineConfig,
    evaluator: E,
    nodes_searched: u32,
}

impl<E> MinimaxEngine<E> {
    pub const fn new(config: EngineConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    /// One exhaustive pass at `depth` plies. `None` means the deadline fired
    /// somewhere below and the pass produced nothing usable.
    pub fn minimax<S>(&mut self, state: &S, depth: u8, deadline: &Deadline<'_>) -> Option<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes_searched += 1;
        if deadline.expired() {
            return None;
        }

        let root = state.to_move();
        let legal_moves = state.legal_moves();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = Move::NONE;

        for mv in &legal_moves {
            let value = self.value(
                &state.forecast(*mv),
                root,
                depth.saturating_sub(1),
                false,
                deadline,
            )?;
            if value > best_value {
                best_value = value;
                best_move = *mv;
            }
        }

        Some(resolve_root_move(best_move, &legal_moves))
    }

    /// Alternating max/min expansion. `root` stays fixed to the original
    /// mover of the whole search call, so minimizing layers minimize the root
    /// player's own score rather than maximizing an opponent-relative one.
    fn value<S>(
        &mut self,
        state: &S,
        root: Player,
        depth: u8,
        maximizing: bool,
        deadline: &Deadline<'_>,
    ) -> Option<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes_searched += 1;
        if deadline.expired() {
            return None;
        }

        let legal_moves = state.legal_moves();
        if depth == 0 || legal_moves.is_empty() {
            return Some(self.evaluator.evaluate(state, root));
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &legal_moves {
                best = best.max(self.value(&state.forecast(*mv), root, depth - 1, false, deadline)?);
            }
            Some(best)
        } else {
            let mut best = f64::INFINITY;
            for mv in &legal_moves {
                best = best.min(self.value(&state.forecast(*mv), root, depth - 1, true, deadline)?);
            }
            Some(best)
        }
    }
}

impl<S, E> Searcher<S> for MinimaxEngine<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn search(&mut self, state: &S, remaining_time: RemainingTime<'_>) -> (Move, SearchStats) {
        self.nodes_searched = 0;
        let start = Instant::now();
        let deadline = Deadline::new(remaining_time, self.config.timer_threshold_ms);

        let (best_move, depth) = match self.minimax(state, self.config.search_depth, &deadline) {
            Some(mv) => (mv, self.config.search_depth),
            None => (Move::NONE, 0),
        };

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: elapsed_ms(start),
        };
        (best_move, stats)
    }
}

/// Iterative-deepening alpha-beta.
pub struct AlphaBetaEngine<E> {
    config: EngineConfig,
    evaluator: E,
    nodes_searched: u32,
}

impl<E> AlphaBetaEngine<E> {
    pub const fn new(config: EngineConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    /// One full alpha-beta pass at `depth` plies. A `None` discards the
    /// pass's partial progress entirely; results are committed per depth,
    /// never per move.
    pub fn alphabeta<S>(&mut self, state: &S, depth: u8, deadline: &Deadline<'_>) -> Option<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes_searched += 1;
        if deadline.expired() {
            return None;
        }

        let root = state.to_move();
        let legal_moves = state.legal_moves();
        let beta = f64::INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = Move::NONE;

        for mv in &legal_moves {
            let value = self.min_value(
                &state.forecast(*mv),
                root,
                depth.saturating_sub(1),
                alpha,
                beta,
                deadline,
            )?;
            if value > best_value {
                best_value = value;
                best_move = *mv;
            }
            if best_value >= beta {
                break;
            }
            alpha = alpha.max(best_value);
        }

        Some(resolve_root_move(best_move, &legal_moves))
    }

    fn max_value<S>(
        &mut self,
        state: &S,
        root: Player,
        depth: u8,
        mut alpha: f64,
        beta: f64,
        deadline: &Deadline<'_>,
    ) -> Option<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes_searched += 1;
        if deadline.expired() {
            return None;
        }

        let legal_moves = state.legal_moves();
        if depth == 0 || legal_moves.is_empty() {
            return Some(self.evaluator.evaluate(state, root));
        }

        let mut best = f64::NEG_INFINITY;
        for mv in &legal_moves {
            best = best.max(self.min_value(
                &state.forecast(*mv),
                root,
                depth - 1,
                alpha,
                beta,
                deadline,
            )?);
            if best >= beta {
                return Some(best);
            }
            alpha = alpha.max(best);
        }
        Some(best)
    }

    fn min_value<S>(
        &mut self,
        state: &S,
        root: Player,
        depth: u8,
        alpha: f64,
        mut beta: f64,
        deadline: &Deadline<'_>,
    ) -> Option<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes_searched += 1;
        if deadline.expired() {
            return None;
        }

        let legal_moves = state.legal_moves();
        if depth == 0 || legal_moves.is_empty() {
            return Some(self.evaluator.evaluate(state, root));
        }

        let mut best = f64::INFINITY;
        for mv in &legal_moves {
            best = best.min(self.max_value(
                &state.forecast(*mv),
                root,
                depth - 1,
                alpha,
                beta,
                deadline,
            )?);
            if best <= alpha {
                return Some(best);
            }
            beta = beta.min(best);
        }
        Some(best)
    }
}

impl<S, E> Searcher<S> for AlphaBetaEngine<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn search(&mut self, state: &S, remaining_time: RemainingTime<'_>) -> (Move, SearchStats) {
        self.nodes_searched = 0;
        let start = Instant::now();
        let deadline = Deadline::new(remaining_time, self.config.timer_threshold_ms);

        let mut best_move = Move::NONE;
        let mut completed_depth = 0;

        if !state.legal_moves().is_empty() {
            for depth in 1..=self.config.max_depth {
                if deadline.expired() {
                    break;
                }
                match self.alphabeta(state, depth, &deadline) {
                    Some(mv) => {
                        best_move = mv;
                        completed_depth = depth;
                        log::debug!("depth {depth} complete: best {mv:?}");
                    }
                    None => {
                        log::trace!("cancelled during depth {depth}, keeping depth {completed_depth} result");
                        break;
                    }
                }
            }
        }

        let stats = SearchStats {
            depth: completed_depth,
            nodes: self.nodes_searched,
            time_ms: elapsed_ms(start),
        };
        (best_move, stats)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
