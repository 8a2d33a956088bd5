//! Integration tests for the game engine

use classic_tetris::core::{get_shape, Board, GameConfig, GameState, Piece, Shape};
use classic_tetris::types::{GameAction, Phase, PieceKind};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig::default(), seed);
    assert!(state.start());
    state
}

fn o_piece(x: i32, y: i32) -> Piece {
    Piece::new(x, y, get_shape(PieceKind::O), PieceKind::O.tag())
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(GameConfig::default(), 12345);
    assert_eq!(state.phase(), Phase::NotStarted);
    assert!(state.current().is_none());

    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.current().is_some());

    state.apply_action(GameAction::Pause);
    assert_eq!(state.phase(), Phase::Paused);
    state.apply_action(GameAction::Pause);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_o_piece_soft_drops_to_floor() {
    let mut state = started(1);
    state.set_current_piece(o_piece(4, 0));

    let mut drops = 0;
    while state.current().map(|p| p.y) != Some(18) {
        assert!(state.soft_drop());
        drops += 1;
    }
    assert_eq!(drops, 18);

    // One more soft drop locks it.
    state.soft_drop();
    let board = state.board();
    for y in 18..20 {
        for x in 4..6 {
            assert_eq!(board.get(x, y), Some(4), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_single_line_clear_scores_forty_times_level() {
    let mut state = started(2);
    let mut board = Board::new(10, 20);
    for x in 1..10 {
        board.set(x, 19, 3);
    }
    board.set(5, 18, 6);
    assert!(state.set_board(board));

    // Vertical I whose blocks occupy board column 0.
    let vertical_i = get_shape(PieceKind::I).rotated();
    state.set_current_piece(Piece::new(-2, 0, vertical_i, 1));
    state.hard_drop();

    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 40);

    let board = state.board();
    // Old row 19 is gone; the row above slid down and the top is empty.
    assert_eq!(board.get(5, 19), Some(6));
    assert!(board.rows().next().unwrap().iter().all(|&c| c == 0));
    for y in 17..20 {
        assert_eq!(board.get(0, y), Some(1));
    }
    assert_eq!(board.get(0, 16), Some(0));
}

#[test]
fn test_tetris_at_level_two() {
    let mut state = started(3);

    // Reach level 2 with ten single clears.
    for _ in 0..10 {
        let mut board = Board::new(10, 20);
        for x in 1..10 {
            board.set(x, 19, 2);
        }
        state.set_board(board);
        state.set_current_piece(Piece::new(0, 0, Shape::from_rows(&[&[1]]).unwrap(), 1));
        state.hard_drop();
    }
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 2);
    assert_eq!(state.score(), 9 * 40 + 40);
    assert_eq!(state.drop_interval_ms(), 950);

    let mut board = Board::new(10, 20);
    for y in 16..20 {
        for x in 1..10 {
            board.set(x, y, 2);
        }
    }
    state.set_board(board);
    state.set_current_piece(Piece::new(-2, 0, get_shape(PieceKind::I).rotated(), 1));
    state.hard_drop();

    assert_eq!(state.lines(), 14);
    assert_eq!(state.score(), 400 + 1200 * 2);
}

#[test]
fn test_blocked_spawn_ends_game_without_touching_board() {
    let mut state = started(4);
    let mut board = Board::new(10, 20);
    for y in 0..20 {
        for x in 3..10 {
            board.set(x, y, 5);
        }
    }
    state.set_board(board.clone());
    state.set_current_piece(o_piece(0, 0));

    state.hard_drop();

    let expected = board.merged_with(&o_piece(0, 18));
    assert_eq!(state.phase(), Phase::Over);
    assert!(state.current().is_none());
    assert_eq!(state.board(), &expected);

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Start,
    ] {
        assert!(!state.apply_action(action), "{:?} after game over", action);
    }
    assert!(!state.tick(10_000));
    assert_eq!(state.board(), &expected);
    assert_eq!(state.phase(), Phase::Over);
}

#[test]
fn test_hard_drop_lands_on_stack() {
    let mut state = started(5);
    let mut board = Board::new(10, 20);
    board.set(4, 10, 7);
    state.set_board(board);
    state.set_current_piece(o_piece(4, 0));

    state.hard_drop();
    assert_eq!(state.board().get(4, 9), Some(4));
    assert_eq!(state.board().get(5, 8), Some(4));
    assert_eq!(state.drop_accumulator_ms(), 0);
}

#[test]
fn test_score_lines_level_never_decrease() {
    let mut state = started(777);
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveLeft,
    ];

    let mut last = (0, 0, 1);
    for i in 0..400 {
        if state.phase() == Phase::Over {
            break;
        }
        for _ in 0..(i % 4) {
            state.apply_action(script[i % script.len()]);
        }
        state.tick(400);
        state.apply_action(GameAction::HardDrop);

        let now = (state.score(), state.lines(), state.level());
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        last = now;
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut state = started(seed);
        for i in 0..30 {
            if i % 3 == 0 {
                state.apply_action(GameAction::Rotate);
            }
            state.apply_action(GameAction::HardDrop);
        }
        state.snapshot()
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn test_gravity_through_tick() {
    let mut state = started(6);
    state.set_current_piece(o_piece(4, 0));

    for _ in 0..10 {
        state.tick(100);
    }
    // 1000ms accumulated: not yet strictly more than the interval.
    assert_eq!(state.current().unwrap().y, 0);
    state.tick(16);
    assert_eq!(state.current().unwrap().y, 1);
}

#[test]
fn test_pause_blocks_gravity_and_resume_starts_fresh() {
    let mut state = started(7);
    state.set_current_piece(o_piece(4, 0));
    state.tick(900);
    state.toggle_pause();
    state.tick(5000);
    state.toggle_pause();

    // The 900ms from before the pause were discarded.
    state.tick(900);
    assert_eq!(state.current().unwrap().y, 0);
    state.tick(200);
    assert_eq!(state.current().unwrap().y, 1);
}

#[test]
fn test_snapshot_reflects_state() {
    let state = started(8);
    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::Running);
    assert!(snap.playable());
    assert_eq!(snap.current.as_ref(), state.current());
    assert_eq!(&snap.next, state.next());
    assert_eq!((snap.score, snap.level, snap.lines), (0, 1, 0));
    assert_eq!(snap.drop_interval_ms, 1000);
}

#[test]
fn test_custom_board_size() {
    let mut state = GameState::new(GameConfig::new(6, 12), 9);
    state.start();
    assert_eq!(state.board().width(), 6);
    assert_eq!(state.board().height(), 12);
    let piece = state.current().unwrap();
    assert_eq!(piece.x, 3 - piece.shape.width() as i32 / 2);
}
