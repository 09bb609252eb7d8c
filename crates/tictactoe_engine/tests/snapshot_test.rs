//! Tests for the serializable game snapshot.

use tictactoe_engine::{Cell, GameEngine, GameSnapshot, GameStatus, Player, Position};

#[test]
fn test_snapshot_of_won_game() {
    let game = GameEngine::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::TopRight,
    ])
    .unwrap();
    let snap = game.snapshot();

    assert_eq!(snap.turn(), None);
    assert_eq!(snap.current_player(), Player::X);
    assert_eq!(snap.status().winner(), Some(Player::X));
    assert_eq!(snap.winning_line(), game.winning_line());
    assert_eq!(
        snap.board()[1],
        [Cell::Occupied(Player::O), Cell::Occupied(Player::O), Cell::Empty]
    );
    assert_eq!(snap.moves().len(), 5);
}

#[test]
fn test_snapshot_json_shape() {
    let mut game = GameEngine::new();
    game.apply_move(1, 1).unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["board"][1][1], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["board"][0][0], serde_json::json!("Empty"));
    assert_eq!(json["turn"], serde_json::json!("O"));
    assert_eq!(json["status"], serde_json::json!("InProgress"));
    assert_eq!(json["winning_line"], serde_json::Value::Null);
    assert_eq!(json["moves"], serde_json::json!(["Center"]));
}

#[test]
fn test_snapshot_deserializes_back() {
    let game = GameEngine::replay(&[Position::Center, Position::TopLeft]).unwrap();
    let text = serde_json::to_string(&game.snapshot()).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, game.snapshot());
    assert_eq!(back.status(), GameStatus::InProgress);
}
