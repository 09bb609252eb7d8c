//! Tests for a full play session over in-memory input and output.

use std::io::Cursor;
use tictactoe_cli::{PlaySession, Reply, Settings};
use tictactoe_engine::{GameStatus, Player};

fn run(script: &str) -> (PlaySession, String) {
    let mut session = PlaySession::new(Settings::default());
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_game_to_win() {
    let (session, out) = run("0 0\n1 1\n0 1\n1 0\n0 2\n");
    assert_eq!(session.engine().status().winner(), Some(Player::X));
    assert!(out.starts_with("Tic Tac Toe"));
    assert!(out.contains("Player O's turn"));
    assert!(out.trim_end().ends_with("Player X wins!"));
}

#[test]
fn test_moves_after_win_are_refused() {
    let (session, out) = run("0 0\n1 1\n0 1\n1 0\n0 2\n2 2\n");
    assert!(out.contains("Move not allowed: game is already over."));
    assert_eq!(session.engine().history().len(), 5);
}

#[test]
fn test_draw_then_reset() {
    let (session, out) = run("1\n2\n3\n5\n4\n6\n8\n7\n9\nreset\n");
    assert!(out.contains("It's a draw!"));
    assert_eq!(session.engine().status(), GameStatus::InProgress);
    assert!(session.engine().history().is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let (session, out) = run("center\nquit\n0 0\n");
    assert!(out.trim_end().ends_with("Bye."));
    assert_eq!(session.engine().history().len(), 1);
}

#[test]
fn test_unknown_command_hint() {
    let mut session = PlaySession::new(Settings::default());
    match session.handle_line("dance") {
        Reply::Continue(text) => {
            assert_eq!(text, "Unrecognized command: dance. Type 'help' for commands.")
        }
        Reply::Quit(_) => panic!("unknown command must not quit"),
    }
}
