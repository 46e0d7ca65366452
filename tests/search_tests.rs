//! Search Integration Tests
//!
//! Drives [`SearchEngine`] through the public API at every difficulty.

use chess_engine::{
    evaluate, parse_coordinate_move, Board, Color, Difficulty, Game, Move, PieceKind,
    SearchEngine, Square,
};
use duelchess::{GameSession, Settings};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn all_difficulties() -> [Difficulty; 4] {
    [
        Difficulty::Random,
        Difficulty::Greedy,
        Difficulty::FixedDepth(2),
        Difficulty::IterativeDeepening {
            max_depth: 2,
            time_budget_ms: 10_000,
        },
    ]
}

/// Knight on c3 can take an undefended queen on d5
fn hanging_queen() -> Game {
    let board = Board::from_pieces(&[
        (PieceKind::King, Color::White, (7, 4)),
        (PieceKind::Knight, Color::White, (5, 2)),
        (PieceKind::Pawn, Color::White, (6, 0)),
        (PieceKind::Queen, Color::Black, (3, 3)),
        (PieceKind::King, Color::Black, (0, 4)),
    ]);
    Game::from_board(board, Color::White)
}

#[test]
fn test_every_level_returns_a_legal_move() {
    let mut game = Game::new();
    for text in ["d2d4", "d7d5", "c2c4"] {
        let (mv, _) = parse_coordinate_move(text).unwrap();
        game.try_commit_move(mv.from, mv.to, None).unwrap();
    }

    for difficulty in all_difficulties() {
        let mut engine = SearchEngine::with_seed(Color::Black, difficulty, 17);
        let mv = engine.best_move(&mut game).unwrap();
        assert!(
            game.legal_moves(Color::Black).contains(&mv),
            "{difficulty:?} chose illegal {mv}"
        );
    }
}

#[test]
fn test_search_does_not_touch_history() {
    let mut game = Game::new();
    let before_board = game.board().clone();
    let before_key = game.position_key();
    let before_eval = evaluate(&game, Color::White);

    for difficulty in all_difficulties() {
        let mut engine = SearchEngine::with_seed(Color::White, difficulty, 2);
        engine.best_move(&mut game).unwrap();
    }

    assert_eq!(game.board(), &before_board);
    assert_eq!(game.position_key(), before_key);
    assert_eq!(game.position_count(), 1);
    assert_eq!(game.halfmove_clock(), 0);
    assert_eq!(game.last_move(), None);
    assert_eq!(evaluate(&game, Color::White), before_eval);
}

#[test]
fn test_searching_levels_win_the_queen() {
    let expected = Move::new(sq("c3"), sq("d5"));
    for difficulty in [
        Difficulty::Greedy,
        Difficulty::FixedDepth(2),
        Difficulty::FixedDepth(3),
        Difficulty::IterativeDeepening {
            max_depth: 3,
            time_budget_ms: 30_000,
        },
    ] {
        let mut game = hanging_queen();
        let mut engine = SearchEngine::with_seed(Color::White, difficulty, 8);
        assert_eq!(engine.best_move(&mut game), Some(expected), "{difficulty:?}");
    }
}

#[test]
fn test_short_budget_still_answers() {
    let mut game = Game::new();
    let difficulty = Difficulty::IterativeDeepening {
        max_depth: 16,
        time_budget_ms: 50,
    };
    let mut engine = SearchEngine::with_seed(Color::White, difficulty, 4);
    let mv = engine.best_move(&mut game).unwrap();

    assert!(game.legal_moves(Color::White).contains(&mv));
    assert!(engine.stats().depth_completed < 16);
}

#[test]
fn test_seeded_selfplay_is_reproducible() {
    fn run() -> Vec<String> {
        let settings = Settings {
            difficulty: Difficulty::Random,
            ai_color: Color::White,
            rng_seed: Some(123),
            ..Settings::default()
        };
        let mut session = GameSession::new(&settings);
        let mut black = SearchEngine::with_seed(Color::Black, Difficulty::Random, 124);
        for _ in 0..20 {
            if session.is_over() {
                break;
            }
            if session.is_ai_turn() {
                session.play_ai().unwrap();
            } else {
                session.play_engine(&mut black).unwrap();
            }
        }
        session.move_log().to_vec()
    }

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}
