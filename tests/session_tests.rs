//! Session integration tests: the engine as an opponent.

use tictactoe_engine::core::{EngineError, Grid, Mark};
use tictactoe_engine::rules::{evaluate, Outcome};
use tictactoe_engine::search::{SearchConfig, Strategy};
use tictactoe_engine::session::{GameSession, Mode, SessionConfig, Status};

fn fast_session(mode: Mode) -> GameSession {
    let config = SessionConfig::default()
        .with_mode(mode)
        .with_search(SearchConfig::default().with_strategy(Strategy::AlphaBeta));
    GameSession::new(config)
}

/// Try every human reply at every turn and check the engine never loses.
fn assert_computer_never_loses(session: &GameSession, computer: Mark) -> usize {
    match session.status() {
        Status::Won { mark, .. } => {
            assert_eq!(mark, computer, "engine lost:\n{}", session.grid());
            return 1;
        }
        Status::Drawn => return 1,
        Status::InProgress { .. } => {}
    }

    if session.is_computer_turn() {
        let mut next = session.clone();
        next.computer_move().unwrap();
        return assert_computer_never_loses(&next, computer);
    }

    session
        .grid()
        .empty_cells()
        .map(|index| {
            let mut next = session.clone();
            next.play(index).unwrap();
            assert_computer_never_loses(&next, computer)
        })
        .sum()
}

// =============================================================================
// Perfect Play Tests
// =============================================================================

#[test]
fn test_computer_as_second_player_never_loses() {
    let session = fast_session(Mode::VsComputer { computer: Mark::O });
    let games = assert_computer_never_loses(&session, Mark::O);
    assert!(games > 0);
}

#[test]
fn test_computer_as_first_player_never_loses() {
    let mut session = fast_session(Mode::VsComputer { computer: Mark::X });
    assert!(session.is_computer_turn());

    let opening = session.computer_move().unwrap();
    assert_eq!(opening, 0);

    let games = assert_computer_never_loses(&session, Mark::X);
    assert!(games > 0);
}

#[test]
fn test_computer_punishes_mistake() {
    let mut session = GameSession::vs_computer(Mark::O);
    session.play(0).unwrap();
    assert_eq!(session.computer_move().unwrap(), 4);
    session.play(8).unwrap();
    // Taking a corner here loses to a double threat; the first edge holds.
    assert_eq!(session.computer_move().unwrap(), 1);

    // X should block 7 but builds its own threat instead.
    session.play(5).unwrap();
    assert_eq!(session.computer_move().unwrap(), 7);
    assert_eq!(session.status(), Status::Won { mark: Mark::O, line: [1, 4, 7] });
    assert_eq!(session.play(2), Err(EngineError::GameOver));
}

// =============================================================================
// Turn Flow Tests
// =============================================================================

#[test]
fn test_two_player_game_to_completion() {
    let mut session = GameSession::two_player();
    assert!(!session.is_computer_turn());
    assert_eq!(session.computer_move(), Err(EngineError::NotComputerTurn));

    for index in [4, 0, 2, 6, 3, 5, 1, 7] {
        session.play(index).unwrap();
    }
    let status = session.play(8).unwrap();

    assert_eq!(status, Status::Drawn);
    assert_eq!(evaluate(session.grid()), Outcome::Draw);
    assert_eq!(session.history().len(), 9);
}

#[test]
fn test_switching_modes_resets_game() {
    let mut session = GameSession::vs_computer(Mark::O);
    session.start(Mode::TwoPlayer);
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }
    session.start(Mode::VsComputer { computer: Mark::O });
    assert_eq!(session.grid(), &Grid::new());

    session.play(0).unwrap();
    session.computer_move().unwrap();
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_custom_first_mark() {
    let config = SessionConfig::default()
        .with_mode(Mode::VsComputer { computer: Mark::O })
        .with_first(Mark::O);
    let mut session = GameSession::new(config);

    assert!(session.is_computer_turn());
    let index = session.computer_move().unwrap();
    assert_eq!(index, 0);
    assert_eq!(session.to_move(), Some(Mark::X));
}
