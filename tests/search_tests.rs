use isolation_core::{
    AlphaBetaEngine, BlendedEvaluator, Board, Coordinate, Deadline, EngineConfig, GameState,
    MinimaxEngine, MobilityEvaluator, Move, Player, Searcher,
};
use std::cell::Cell;
use std::time::Instant;

fn mid_game_board() -> Board {
    let mut board = Board::new();
    board.place(Player::One, Coordinate::new(3, 3));
    board.place(Player::Two, Coordinate::new(5, 5));
    board.block(Coordinate::new(2, 2));
    board.block(Coordinate::new(4, 1));
    board
}

fn trapped_board() -> Board {
    // Player one at the corner with both exits blocked.
    let mut board = Board::new();
    board.place(Player::One, Coordinate::new(0, 0));
    board.place(Player::Two, Coordinate::new(3, 3));
    board.block(Coordinate::new(1, 2));
    board.block(Coordinate::new(2, 1));
    board
}

#[test]
fn test_minimax_selects_legal_move() {
    let board = mid_game_board();
    let mut engine = MinimaxEngine::new(EngineConfig::default(), MobilityEvaluator);
    let remaining = || 1000.0;

    let mv = engine.select_move(&board, &remaining);
    assert!(board.legal_moves().contains(mv));
}

#[test]
fn test_alphabeta_selects_legal_move() {
    let board = mid_game_board();
    let mut engine = AlphaBetaEngine::new(EngineConfig::default(), BlendedEvaluator);
    let start = Instant::now();
    let budget = move || 200.0 - start.elapsed().as_secs_f64() * 1000.0;

    let mv = engine.select_move(&board, &budget);
    assert!(board.legal_moves().contains(mv));
}

#[test]
fn test_no_legal_moves_yields_sentinel() {
    let board = trapped_board();
    assert!(board.legal_moves().is_empty());
    let remaining = || 1000.0;

    let mut minimax = MinimaxEngine::new(EngineConfig::default(), MobilityEvaluator);
    assert_eq!(minimax.select_move(&board, &remaining), Move::NONE);

    let mut alphabeta = AlphaBetaEngine::new(EngineConfig::default(), MobilityEvaluator);
    assert_eq!(alphabeta.select_move(&board, &remaining), Move::NONE);
}

#[test]
fn test_exhausted_budget_yields_sentinel() {
    let board = mid_game_board();
    let remaining = || 0.0;

    let mut minimax = MinimaxEngine::new(EngineConfig::default(), MobilityEvaluator);
    let (mv, stats) = minimax.search(&board, &remaining);
    assert_eq!(mv, Move::NONE);
    assert_eq!(stats.depth, 0);

    let mut alphabeta = AlphaBetaEngine::new(EngineConfig::default(), MobilityEvaluator);
    let (mv, stats) = alphabeta.search(&board, &remaining);
    assert_eq!(mv, Move::NONE);
    assert_eq!(stats.depth, 0);
}

#[test]
fn test_iterative_deepening_commits_last_completed_depth() {
    let board = mid_game_board();
    let config = EngineConfig {
        max_depth: 3,
        ..EngineConfig::default()
    };
    let remaining = || f64::INFINITY;

    let mut engine = AlphaBetaEngine::new(config.clone(), MobilityEvaluator);
    let (mv, stats) = engine.search(&board, &remaining);
    assert_eq!(stats.depth, 3);

    // The committed result is exactly the deepest completed fixed-depth pass.
    let mut single_pass = AlphaBetaEngine::new(config, MobilityEvaluator);
    let deadline = Deadline::new(&remaining, 10.0);
    assert_eq!(single_pass.alphabeta(&board, 3, &deadline), Some(mv));
}

#[test]
fn test_cancelled_pass_keeps_previous_depth_result() {
    let board = mid_game_board();

    // Reference run: two completed depths with an untouched budget, counting
    // how many times the deadline gets polled along the way.
    let warm_polls = Cell::new(0u32);
    let warm_budget = || {
        warm_polls.set(warm_polls.get() + 1);
        f64::INFINITY
    };
    let config = EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    };
    let mut warm_engine = AlphaBetaEngine::new(config, MobilityEvaluator);
    let (depth_two_move, warm_stats) = warm_engine.search(&board, &warm_budget);
    assert_eq!(warm_stats.depth, 2);

    // Same search, deeper cap, but the budget collapses a few node
    // expansions into the depth-3 pass. The partial pass must be discarded
    // wholesale and the depth-2 result returned.
    let cutoff = warm_polls.get() + 5;
    let polls = Cell::new(0u32);
    let budget = || {
        polls.set(polls.get() + 1);
        if polls.get() > cutoff {
            0.0
        } else {
            1000.0
        }
    };
    let config = EngineConfig {
        max_depth: 3,
        ..EngineConfig::default()
    };
    let mut engine = AlphaBetaEngine::new(config, MobilityEvaluator);
    let (mv, stats) = engine.search(&board, &budget);

    assert!(polls.get() > cutoff, "budget never collapsed mid-pass");
    assert_eq!(mv, depth_two_move);
    assert_eq!(stats.depth, 2);
}

#[test]
fn test_iterative_deepening_stats() {
    let board = mid_game_board();
    let config = EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    };
    let remaining = || f64::INFINITY;

    let mut engine = AlphaBetaEngine::new(config, BlendedEvaluator);
    let (mv, stats) = engine.search(&board, &remaining);
    assert!(board.legal_moves().contains(mv));
    assert!(stats.nodes > 0);
    assert_eq!(stats.depth, 2);
}

#[test]
fn test_search_from_opening_placement() {
    // No placements yet: every open cell is a legal opening move.
    let board = Board::new();
    let remaining = || 500.0;
    let config = EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    };

    let mut engine = AlphaBetaEngine::new(config, MobilityEvaluator);
    let mv = engine.select_move(&board, &remaining);
    assert!(board.legal_moves().contains(mv));
}
