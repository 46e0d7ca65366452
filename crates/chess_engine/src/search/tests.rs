use super::alphabeta::{search_root, SearchContext};
use super::*;
use crate::board::Board;
use crate::notation::parse_coordinate_move;
use crate::rules::Game;
use crate::types::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board_from(pieces: &[(PieceKind, Color, (u8, u8))]) -> Board {
    Board::from_pieces(pieces)
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let (mv, promotion) = parse_coordinate_move(text).unwrap();
        game.try_commit_move(mv.from, mv.to, promotion).unwrap();
    }
}

fn root_score(game: &mut Game, depth: u8, prune: bool) -> (Move, i32, u64) {
    let mut ctx = SearchContext::new(game.side_to_move(), None);
    ctx.prune = prune;
    let result = search_root(game, &mut ctx, depth).unwrap();
    (result.best_move, result.score, ctx.nodes)
}

// ---------------------------------------------------------------------------
// Alpha-beta soundness
// ---------------------------------------------------------------------------

#[test]
fn test_pruning_matches_full_minimax_in_opening() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6"]);

    let (pruned_move, pruned_score, pruned_nodes) = root_score(&mut game, 2, true);
    let (full_move, full_score, full_nodes) = root_score(&mut game, 2, false);

    assert_eq!(pruned_score, full_score);
    assert_eq!(pruned_move, full_move);
    assert!(pruned_nodes <= full_nodes);
}

#[test]
fn test_pruning_matches_full_minimax_in_endgame() {
    let board = board_from(&[
        (PieceKind::King, Color::White, (7, 6)),
        (PieceKind::Rook, Color::White, (7, 0)),
        (PieceKind::Pawn, Color::White, (6, 5)),
        (PieceKind::Pawn, Color::White, (6, 6)),
        (PieceKind::King, Color::Black, (0, 6)),
        (PieceKind::Knight, Color::Black, (2, 2)),
        (PieceKind::Pawn, Color::Black, (1, 6)),
    ]);
    let mut game = Game::from_board(board, Color::White);

    let (pruned_move, pruned_score, pruned_nodes) = root_score(&mut game, 3, true);
    let (full_move, full_score, full_nodes) = root_score(&mut game, 3, false);

    assert_eq!(pruned_score, full_score);
    assert_eq!(pruned_move, full_move);
    assert!(pruned_nodes < full_nodes, "pruning should skip work");
}

#[test]
fn test_search_leaves_game_untouched() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "d7d5"]);
    let board = game.board().clone();
    let last = game.last_move();
    let key = game.position_key();

    let mut engine = SearchEngine::with_seed(Color::White, Difficulty::FixedDepth(2), 7);
    engine.best_move(&mut game).unwrap();

    assert_eq!(game.board(), &board);
    assert_eq!(game.last_move(), last);
    assert_eq!(game.position_key(), key);
    assert_eq!(game.position_count(), 1);
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[test]
fn test_random_is_reproducible_with_seed() {
    let mut game = Game::new();
    let mut a = SearchEngine::with_seed(Color::White, Difficulty::Random, 42);
    let mut b = SearchEngine::with_seed(Color::White, Difficulty::Random, 42);

    for _ in 0..5 {
        let mv = a.best_move(&mut game).unwrap();
        assert_eq!(b.best_move(&mut game), Some(mv));
        assert!(game.legal_moves(Color::White).contains(&mv));
    }
}

#[test]
fn test_greedy_takes_biggest_capture() {
    let board = board_from(&[
        (PieceKind::King, Color::White, (7, 7)),
        (PieceKind::Knight, Color::White, (4, 4)),
        (PieceKind::Pawn, Color::Black, (2, 5)),
        (PieceKind::Rook, Color::Black, (2, 3)),
        (PieceKind::Bishop, Color::Black, (3, 2)),
        (PieceKind::King, Color::Black, (0, 0)),
    ]);
    let mut game = Game::from_board(board, Color::White);
    let mut engine = SearchEngine::with_seed(Color::White, Difficulty::Greedy, 1);
    assert_eq!(engine.best_move(&mut game), Some(Move::new(sq("e4"), sq("d6"))));
}

#[test]
fn test_greedy_without_captures_plays_first_move() {
    let mut game = Game::new();
    let first = game.legal_moves(Color::White)[0];
    let mut engine = SearchEngine::with_seed(Color::White, Difficulty::Greedy, 1);
    assert_eq!(engine.best_move(&mut game), Some(first));
}

#[test]
fn test_fixed_depth_saves_attacked_queen() {
    let board = board_from(&[
        (PieceKind::King, Color::White, (7, 4)),
        (PieceKind::Queen, Color::White, (4, 4)),
        (PieceKind::Pawn, Color::Black, (3, 3)),
        (PieceKind::King, Color::Black, (0, 0)),
    ]);
    let mut game = Game::from_board(board, Color::White);
    let mut engine = SearchEngine::with_seed(Color::White, Difficulty::FixedDepth(2), 1);
    let mv = engine.best_move(&mut game).unwrap();

    let mut after = game.clone();
    after.commit_move(mv.from, mv.to, None).unwrap();
    let queen_lost = after
        .legal_moves(Color::Black)
        .iter()
        .any(|reply| after.board().get(reply.to).map(|p| p.kind) == Some(PieceKind::Queen));
    assert!(!queen_lost, "{mv} leaves the queen en prise");
    assert_eq!(engine.stats().depth_completed, 2);
    assert!(engine.stats().nodes > 0);
}

#[test]
fn test_iterative_deepening_reports_depth() {
    let mut game = Game::new();
    let difficulty = Difficulty::IterativeDeepening {
        max_depth: 2,
        time_budget_ms: 60_000,
    };
    let mut engine = SearchEngine::with_seed(Color::White, difficulty, 3);
    let mv = engine.best_move(&mut game).unwrap();

    assert!(game.legal_moves(Color::White).contains(&mv));
    assert_eq!(engine.stats().depth_completed, 2);
    assert_eq!(engine.last_move(), Some(mv));
}

#[test]
fn test_no_move_when_checkmated() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.is_game_over(Color::White));

    for difficulty in [Difficulty::Random, Difficulty::Greedy, Difficulty::FixedDepth(2)] {
        let mut engine = SearchEngine::with_seed(Color::White, difficulty, 5);
        assert_eq!(engine.best_move(&mut game), None);
        assert_eq!(engine.last_move(), None);
    }
}

#[test]
fn test_move_still_offered_once_fifty_move_rule_applies() {
    let board = board_from(&[
        (PieceKind::King, Color::White, (7, 4)),
        (PieceKind::Rook, Color::White, (7, 0)),
        (PieceKind::King, Color::Black, (0, 4)),
        (PieceKind::Rook, Color::Black, (0, 7)),
    ]);
    let mut game = Game::from_board(board, Color::White);
    game.record.halfmove_clock = 100;
    assert!(game.draw_by_rule().is_some());

    for difficulty in [
        Difficulty::Random,
        Difficulty::Greedy,
        Difficulty::FixedDepth(2),
        Difficulty::IterativeDeepening {
            max_depth: 2,
            time_budget_ms: 10_000,
        },
    ] {
        let mut engine = SearchEngine::with_seed(Color::White, difficulty, 3);
        let mv = engine
            .best_move(&mut game)
            .unwrap_or_else(|| panic!("{difficulty:?} offered no move"));
        assert!(game.legal_moves(Color::White).contains(&mv), "{difficulty:?}");
    }
}

#[test]
fn test_difficulty_levels() {
    assert_eq!(
        Difficulty::from_level("easy", TimeControl::Standard),
        Some(Difficulty::Random)
    );
    assert_eq!(
        Difficulty::from_level("Medium", TimeControl::Standard),
        Some(Difficulty::FixedDepth(2))
    );
    assert_eq!(
        Difficulty::from_level("hard", TimeControl::Blitz),
        Some(Difficulty::IterativeDeepening {
            max_depth: 3,
            time_budget_ms: 1000
        })
    );
    assert_eq!(
        Difficulty::default(),
        Difficulty::IterativeDeepening {
            max_depth: 4,
            time_budget_ms: 2000
        }
    );
    assert_eq!(Difficulty::from_level("grandmaster", TimeControl::Standard), None);
}
