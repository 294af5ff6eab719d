use crate::board::Board;
use crate::config::{Settings, SettingsError};
use crate::constants::{Color, Kind, Square};
use crate::engine::Engine;
use crate::evaluate::evaluate;
use crate::game::{Game, GameStatus, MoveError};
use crate::r#move::{Move, Position};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn white_man() -> Square {
    Square::Piece(Color::White, Kind::Man)
}

fn black_man() -> Square {
    Square::Piece(Color::Black, Kind::Man)
}

/// 8x8 board, no backward capture, White to move unless overridden.
fn bare_settings() -> Settings {
    Settings::english()
}

fn custom_game(settings: Settings, pieces: &[(Position, Square)], to_move: Color) -> Game {
    let mut board = Board::empty(settings.width, settings.height);
    for &(p, sq) in pieces {
        board.set(p, sq);
    }
    Game::with_position(settings, board, to_move).unwrap()
}

#[test]
fn test_starting_position_layout() {
    let game = Game::new(Settings::international()).unwrap();
    let board = game.board();

    assert_eq!(board.count_of(Color::White), 20);
    assert_eq!(board.count_of(Color::Black), 20);
    // Men sit on squares where x % 2 != y % 2, White on the low ranks.
    assert_eq!(board.get(pos(0, 3)), white_man());
    assert_eq!(board.get(pos(1, 0)), white_man());
    assert_eq!(board.get(pos(0, 0)), Square::Empty);
    assert_eq!(board.get(pos(1, 6)), black_man());
    assert_eq!(board.get(pos(0, 6)), Square::Empty);
    assert_eq!(board.get(pos(0, 4)), Square::Empty);
}

#[test]
fn test_opening_quiet_moves() {
    let mut game = Game::new(Settings::international()).unwrap();
    let moves = game.legal_moves();

    // Only the five men on rank 4 can step; the edge man has a single
    // destination, the rest two each.
    assert_eq!(moves.len(), 9);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
    assert!(moves.iter().all(|mv| mv.origin.y == 3 && mv.dest.y == 4));
}

#[test]
fn test_simple_advance_passes_turn() {
    let mut game = Game::new(Settings::international()).unwrap();
    game.play(&Move::quiet(pos(0, 3), pos(1, 4))).unwrap();

    assert_eq!(game.board().get(pos(0, 3)), Square::Empty);
    assert_eq!(game.board().get(pos(1, 4)), white_man());
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_make_cancel_round_trip_on_opening() {
    let mut game = Game::new(Settings::international()).unwrap();
    let before_board = game.board().clone();
    let before_player = game.current_player();

    for mv in game.legal_moves() {
        game.make_move(&mv);
        game.cancel_move(&mv);
        assert_eq!(game.board(), &before_board, "board changed by {mv}");
        assert_eq!(game.current_player(), before_player);
    }
}

#[test]
fn test_mandatory_capture_excludes_quiet_moves() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(2, 2), white_man()),
            (pos(3, 3), black_man()),
            // This man has quiet moves available, which must not be offered.
            (pos(0, 0), white_man()),
        ],
        Color::White,
    );
    let moves = game.legal_moves();

    assert_eq!(moves.len(), 1);
    let capture = &moves[0];
    assert_eq!(capture.origin, pos(2, 2));
    assert_eq!(capture.dest, pos(4, 4));
    assert_eq!(capture.takes, vec![pos(3, 3)]);
    assert_eq!(capture.taken_pieces, vec![black_man()]);
}

#[test]
fn test_capture_chain_of_two() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(1, 0), white_man()),
            (pos(2, 1), black_man()),
            (pos(2, 3), black_man()),
        ],
        Color::White,
    );
    let moves = game.legal_moves();

    assert_eq!(moves.len(), 1);
    let chain = &moves[0];
    assert_eq!(chain.origin, pos(1, 0));
    assert_eq!(chain.dest, pos(1, 4));
    assert_eq!(chain.takes, vec![pos(2, 1), pos(2, 3)]);
    assert_eq!(chain.taken_pieces, vec![black_man(), black_man()]);
    // The single jump that stops halfway is never offered.
    assert!(moves.iter().all(|mv| mv.takes.len() == 2));
}

#[test]
fn test_longest_chain_enforced_across_pieces() {
    let mut game = custom_game(
        bare_settings(),
        &[
            // This piece can chain two captures...
            (pos(1, 0), white_man()),
            (pos(2, 1), black_man()),
            (pos(2, 3), black_man()),
            // ...while this one only has a single jump.
            (pos(5, 0), white_man()),
            (pos(6, 1), black_man()),
        ],
        Color::White,
    );
    let moves = game.legal_moves();

    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.takes.len() == 2));
    assert!(moves.iter().all(|mv| mv.origin == pos(1, 0)));
}

#[test]
fn test_chain_never_jumps_a_square_twice() {
    // Four black men around a white king form a full cycle back to the
    // origin square; each victim must be jumped exactly once.
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(2, 0), Square::Piece(Color::White, Kind::King)),
            (pos(1, 1), black_man()),
            (pos(3, 1), black_man()),
            (pos(1, 3), black_man()),
            (pos(3, 3), black_man()),
        ],
        Color::White,
    );
    let moves = game.legal_moves();

    assert_eq!(moves.len(), 2);
    for mv in &moves {
        assert_eq!(mv.takes.len(), 4);
        assert_eq!(mv.dest, pos(2, 0));
        for (i, take) in mv.takes.iter().enumerate() {
            assert!(
                !mv.takes[i + 1..].contains(take),
                "square {take} jumped twice in {mv}"
            );
        }
    }
}

#[test]
fn test_round_trip_after_capture_chain() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(2, 0), Square::Piece(Color::White, Kind::King)),
            (pos(1, 1), black_man()),
            (pos(3, 1), black_man()),
            (pos(1, 3), black_man()),
            (pos(3, 3), black_man()),
        ],
        Color::White,
    );
    let before_board = game.board().clone();
    let mv = game.legal_moves().into_iter().next().unwrap();

    game.make_move(&mv);
    assert_eq!(game.board().count_of(Color::Black), 0);
    assert_eq!(game.current_player(), Color::Black);

    game.cancel_move(&mv);
    assert_eq!(game.board(), &before_board);
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_man_moves_forward_only() {
    let mut game = custom_game(bare_settings(), &[(pos(4, 4), white_man())], Color::White);
    let mut dests: Vec<Position> = game.legal_moves().iter().map(|mv| mv.dest).collect();
    dests.sort_by_key(|p| p.x);
    assert_eq!(dests, vec![pos(3, 5), pos(5, 5)]);
}

#[test]
fn test_backward_capture_toggle() {
    let pieces = [(pos(4, 4), white_man()), (pos(3, 3), black_man())];

    // Forward-only rules: the man behind cannot be taken, so the position
    // has quiet moves only.
    let mut game = custom_game(bare_settings(), &pieces, Color::White);
    assert!(game.legal_moves().iter().all(|mv| !mv.is_capture()));

    // With backward capture enabled the jump becomes mandatory.
    let settings = Settings {
        backward_capture: true,
        ..bare_settings()
    };
    let mut game = custom_game(settings, &pieces, Color::White);
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].dest, pos(2, 2));
    assert_eq!(moves[0].takes, vec![pos(3, 3)]);
}

#[test]
fn test_king_moves_all_four_diagonals() {
    let mut game = custom_game(
        bare_settings(),
        &[(pos(4, 4), Square::Piece(Color::White, Kind::King))],
        Color::White,
    );
    let mut dests: Vec<Position> = game.legal_moves().iter().map(|mv| mv.dest).collect();
    dests.sort_by_key(|p| (p.y, p.x));
    assert_eq!(dests, vec![pos(3, 3), pos(5, 3), pos(3, 5), pos(5, 5)]);
}

#[test]
fn test_king_captures_backward_regardless_of_toggle() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(4, 4), Square::Piece(Color::White, Kind::King)),
            (pos(3, 3), black_man()),
        ],
        Color::White,
    );
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].dest, pos(2, 2));
}

#[test]
fn test_flying_king_generates_no_moves() {
    let mut game = custom_game(
        bare_settings(),
        &[(pos(4, 4), Square::Piece(Color::White, Kind::FlyingKing))],
        Color::White,
    );
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.status(), GameStatus::Won(Color::Black));
}

#[test]
fn test_status_reports_win_for_opponent() {
    // Black is out of pieces, so Black to move has lost.
    let mut game = custom_game(bare_settings(), &[(pos(2, 2), white_man())], Color::Black);
    assert_eq!(game.status(), GameStatus::Won(Color::White));

    let mut fresh = Game::new(Settings::international()).unwrap();
    assert_eq!(fresh.status(), GameStatus::InProgress);
}

#[test]
fn test_play_rejects_move_not_in_legal_set() {
    let mut game = Game::new(Settings::international()).unwrap();
    let board_before = game.board().clone();

    let bogus = Move::quiet(pos(0, 0), pos(5, 5));
    assert!(matches!(game.play(&bogus), Err(MoveError::NotLegal(_))));
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_settings_validation() {
    let too_many_rows = Settings {
        rows_per_side: 5,
        ..Settings::international()
    };
    assert_eq!(
        too_many_rows.validate(),
        Err(SettingsError::TooManyRows {
            rows: 5,
            height: 10
        })
    );

    let tiny = Settings {
        width: 3,
        height: 3,
        ..Settings::international()
    };
    assert!(matches!(
        Game::new(tiny),
        Err(SettingsError::BadDimensions { .. })
    ));
}

#[test]
fn test_position_board_mismatch_rejected() {
    let board = Board::empty(8, 8);
    let result = Game::with_position(Settings::international(), board, Color::White);
    assert!(matches!(result, Err(SettingsError::BoardMismatch { .. })));
}

#[test]
fn test_evaluation_is_material_balance() {
    let game = Game::new(Settings::international()).unwrap();
    assert_eq!(evaluate(game.board(), Color::White), 0);
    assert_eq!(evaluate(game.board(), Color::Black), 0);

    let mut board = game.board().clone();
    board.set(pos(1, 6), Square::Empty);
    assert_eq!(evaluate(&board, Color::White), 1);
    assert_eq!(evaluate(&board, Color::Black), -1);
}

#[test]
fn test_search_returns_forced_capture() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(2, 2), white_man()),
            (pos(3, 3), black_man()),
            (pos(0, 0), white_man()),
        ],
        Color::White,
    );
    let mut engine = Engine::new(1);
    let (best, score) = engine.search(&mut game);

    let best = best.expect("a capture is available");
    assert_eq!(best.takes, vec![pos(3, 3)]);
    // At the leaf Black is two men down with none left: -2 from Black's
    // perspective, +2 once negated back to the root.
    assert_eq!(score, 2);
}

#[test]
fn test_search_with_no_moves_returns_leaf_eval() {
    let mut game = custom_game(
        bare_settings(),
        &[
            (pos(4, 4), Square::Piece(Color::White, Kind::FlyingKing)),
            (pos(1, 1), black_man()),
        ],
        Color::White,
    );
    let mut engine = Engine::new(1);
    assert_eq!(engine.search(&mut game), (None, 0));
}

#[test]
fn test_search_leaves_state_untouched() {
    let mut game = Game::new(Settings::international()).unwrap();
    let before_board = game.board().clone();
    let before_player = game.current_player();

    let mut engine = Engine::new(3);
    let (best, _) = engine.search(&mut game);
    assert!(best.is_some());
    assert!(engine.nodes_searched > 0);
    assert_eq!(game.board(), &before_board);
    assert_eq!(game.current_player(), before_player);
}

#[test]
fn test_square_glyph_round_trip() {
    for sq in [
        Square::Empty,
        white_man(),
        black_man(),
        Square::Piece(Color::White, Kind::King),
        Square::Piece(Color::Black, Kind::FlyingKing),
    ] {
        assert_eq!(Square::from_char(sq.to_char()), Some(sq));
    }
    assert_eq!(Square::from_char('?'), None);
}
