//! Tests for session lifecycle and the delayed-bot guard.

use tictactoe_duel::{GameMode, GameSession, GameStatus, MoveError, Player, Position};

#[test]
fn duel_mode_has_no_bot_seat() {
    let mut session = GameSession::new(GameMode::Duel);
    assert!(session.bot_ticket().is_none());

    session.human_move(Player::X, 4).unwrap();
    assert!(session.bot_ticket().is_none());
    session.human_move(Player::O, 0).unwrap();
    assert_eq!(session.game().state().current_player(), Player::X);
}

#[test]
fn single_mode_blocks_hand_moves_on_the_bot_seat() {
    let mut session = GameSession::new(GameMode::Single);
    session.human_move(Player::X, 4).unwrap();

    assert_eq!(
        session.human_move(Player::O, 0),
        Err(MoveError::WrongPlayer(Player::O))
    );
    assert_eq!(session.game().state().history().len(), 1);
}

#[test]
fn valid_bot_reply_is_applied() {
    let mut session = GameSession::new(GameMode::Single);
    session.human_move(Player::X, 4).unwrap();

    let ticket = session.bot_ticket().expect("bot to move");
    let applied = session.apply_bot_reply(ticket, Position::TopLeft).unwrap();

    assert!(applied);
    assert_eq!(session.game().state().current_player(), Player::X);
    assert_eq!(session.game().state().history().len(), 2);
}

#[test]
fn reply_after_restart_is_discarded() {
    let mut session = GameSession::new(GameMode::Single);
    session.human_move(Player::X, 4).unwrap();
    let ticket = session.bot_ticket().expect("bot to move");

    session.restart();
    let applied = session.apply_bot_reply(ticket, Position::TopLeft).unwrap();

    assert!(!applied);
    assert!(session.game().state().history().is_empty());
    assert_eq!(session.game().state().status(), &GameStatus::InProgress);
}

#[test]
fn reply_against_an_advanced_game_is_discarded() {
    let mut session = GameSession::new(GameMode::Single);
    session.human_move(Player::X, 4).unwrap();
    let ticket = session.bot_ticket().expect("bot to move");

    session.apply_bot_reply(ticket, Position::TopLeft).unwrap();
    session.human_move(Player::X, 8).unwrap();

    // Delivering the same ticket again must not move for the bot
    let applied = session
        .apply_bot_reply(ticket, Position::BottomCenter)
        .unwrap();
    assert!(!applied);
    assert_eq!(session.game().state().history().len(), 3);
}

#[test]
fn reply_after_the_game_ended_is_discarded() {
    let mut session = GameSession::new(GameMode::Duel);
    for (player, index) in [
        (Player::X, 0),
        (Player::O, 3),
        (Player::X, 1),
        (Player::O, 4),
        (Player::X, 2),
    ] {
        session.human_move(player, index).unwrap();
    }
    assert_eq!(session.game().state().status(), &GameStatus::Won(Player::X));

    // No ticket can be issued against a finished game
    assert!(session.bot_ticket().is_none());
}

#[test]
fn restart_replaces_a_finished_game() {
    let mut session = GameSession::new(GameMode::Duel);
    for (player, index) in [
        (Player::X, 0),
        (Player::O, 3),
        (Player::X, 1),
        (Player::O, 4),
        (Player::X, 2),
    ] {
        session.human_move(player, index).unwrap();
    }
    assert_eq!(session.human_move(Player::O, 5), Err(MoveError::GameOver));

    session.restart();
    assert_eq!(session.game().state().status(), &GameStatus::InProgress);
    assert_eq!(session.game().state().current_player(), Player::X);
    session.human_move(Player::X, 5).unwrap();
}
