//! History log round-trips, failure modes, and replay stepping.

use std::fs;

use rust_2048::{Board, Direction, HistoryError, HistorySession, Replay};

fn sample_boards() -> Vec<Board> {
    vec![
        Board::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 2],
            [4, 8, 16, 32],
        ]),
        Board::from_rows([
            [2, 2, 2, 2],
            [32, 64, 128, 256],
            [512, 1024, 2048, 2],
            [4, 8, 16, 32],
        ]),
        Board::from_rows([
            [2, 2, 2, 2],
            [32, 64, 128, 256],
            [512, 1024, 2048, 2],
            [4, 4, 4, 4],
        ]),
    ]
}

// =============================================================================
// Round-Trip
// =============================================================================

#[test]
fn test_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let boards = sample_boards();
    let moves = [Direction::Up, Direction::Down];

    let mut session = HistorySession::open_write(&path).unwrap();
    for (i, board) in boards.iter().enumerate() {
        session.record_snapshot(board).unwrap();
        if i < moves.len() {
            session.record_move(moves[i]).unwrap();
        }
    }
    assert_eq!(session.snapshot_count(), 3);
    assert_eq!(session.move_count(), 2);
    session.close().unwrap();

    let session = HistorySession::open_read(&path).unwrap();
    assert_eq!(session.snapshot_count(), 3);
    assert_eq!(session.moves(), &moves[..]);
    for (i, board) in boards.iter().enumerate() {
        assert_eq!(session.load_snapshot(i).unwrap().as_ref(), Some(board));
    }
    // Past the end is the recoverable sentinel, not an error.
    assert!(session.load_snapshot(boards.len()).unwrap().is_none());
}

#[test]
fn test_file_has_snapshots_plus_one_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    let mut session = HistorySession::open_write(&path).unwrap();
    for board in sample_boards() {
        session.record_snapshot(&board).unwrap();
    }
    session.record_move(Direction::Left).unwrap();
    session.record_move(Direction::Right).unwrap();
    session.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "LR");
    assert_eq!(
        lines[0],
        "2 4 8 16 32 64 128 256 512 1024 2048 2 4 8 16 32"
    );
}

#[test]
fn test_drop_flushes_the_move_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    {
        let mut session = HistorySession::open_write(&path).unwrap();
        session.record_snapshot(&sample_boards()[0]).unwrap();
        session.record_move(Direction::Up).unwrap();
        // No close(): dropped on scope exit.
    }

    let session = HistorySession::open_read(&path).unwrap();
    assert_eq!(session.snapshot_count(), 1);
    assert_eq!(session.moves(), &[Direction::Up]);
}

#[test]
fn test_open_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    fs::write(&path, "stale contents\n").unwrap();

    let mut session = HistorySession::open_write(&path).unwrap();
    session.record_snapshot(&sample_boards()[0]).unwrap();
    session.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("stale"));
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn test_read_operations_rejected_in_write_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let session = HistorySession::open_write(&path).unwrap();

    assert!(matches!(
        session.load_snapshot(0),
        Err(HistoryError::ModeViolation { .. })
    ));
}

#[test]
fn test_write_operations_rejected_in_read_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let mut session = HistorySession::open_write(&path).unwrap();
    session.record_snapshot(&sample_boards()[0]).unwrap();
    session.close().unwrap();

    let mut session = HistorySession::open_read(&path).unwrap();
    assert!(matches!(
        session.record_snapshot(&sample_boards()[0]),
        Err(HistoryError::ModeViolation { .. })
    ));
    assert!(matches!(
        session.record_move(Direction::Up),
        Err(HistoryError::ModeViolation { .. })
    ));
}

#[test]
fn test_empty_log_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert!(matches!(
        HistorySession::open_read(&path),
        Err(HistoryError::CorruptLog { .. })
    ));
}

#[test]
fn test_bad_move_letter_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2 0 0 2\nUX\n").unwrap();

    assert!(matches!(
        HistorySession::open_read(&path),
        Err(HistoryError::CorruptLog { .. })
    ));
}

#[test]
fn test_bad_snapshot_line_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2 0 zero 2\nU\n").unwrap();

    let session = HistorySession::open_read(&path).unwrap();
    assert!(matches!(
        session.load_snapshot(0),
        Err(HistoryError::CorruptLog { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        HistorySession::open_read("/nonexistent/game.txt"),
        Err(HistoryError::Io { .. })
    ));
}

// =============================================================================
// Replay Cursor
// =============================================================================

fn recorded_log(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("replay.txt");
    let mut session = HistorySession::open_write(&path).unwrap();
    for board in sample_boards() {
        session.record_snapshot(&board).unwrap();
    }
    session.record_move(Direction::Up).unwrap();
    session.record_move(Direction::Right).unwrap();
    session.close().unwrap();
    path
}

#[test]
fn test_replay_steps_forward_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let boards = sample_boards();
    let mut replay = Replay::open(recorded_log(&dir)).unwrap();

    assert_eq!(replay.len(), 3);
    assert_eq!(replay.position(), 0);
    assert_eq!(replay.current().unwrap(), boards[0]);

    assert_eq!(replay.forward().unwrap(), Some(boards[1].clone()));
    assert_eq!(replay.forward().unwrap(), Some(boards[2].clone()));
    assert!(replay.at_end());
    assert_eq!(replay.forward().unwrap(), None);

    assert_eq!(replay.back().unwrap(), Some(boards[1].clone()));
    assert_eq!(replay.back().unwrap(), Some(boards[0].clone()));
    assert_eq!(replay.back().unwrap(), None);
}

#[test]
fn test_replay_seek_and_move_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let boards = sample_boards();
    let mut replay = Replay::open(recorded_log(&dir)).unwrap();

    assert_eq!(replay.seek(2).unwrap(), Some(boards[2].clone()));
    assert_eq!(replay.seek(9).unwrap(), None);
    assert_eq!(replay.position(), 2);

    assert_eq!(replay.move_into(0), None);
    assert_eq!(replay.move_into(1), Some(Direction::Up));
    assert_eq!(replay.move_into(2), Some(Direction::Right));
    assert_eq!(replay.move_into(3), None);
}

#[test]
fn test_list_logs_finds_only_txt_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "x\n").unwrap();
    fs::write(dir.path().join("a.txt"), "x\n").unwrap();
    fs::write(dir.path().join("notes.md"), "x\n").unwrap();

    let logs = rust_2048::list_logs(dir.path()).unwrap();
    let names: Vec<_> = logs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}
