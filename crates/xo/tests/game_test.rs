//! Tests for the game session state machine.

use serde_json::json;
use xo::{
    Conclusion, ErrorCategory, Event, Game, GameState, InvalidMoveReason, LineKind, Mark, Move,
    Position, XoErrorKind,
};

fn play(game: &mut Game, moves: &[(usize, usize)]) -> Event {
    let mut last = None;
    for &(r, c) in moves {
        last = Some(game.moveto(r, c).expect("game is playing"));
    }
    last.expect("at least one move")
}

const X_WINS: [(usize, usize); 7] = [(2, 2), (1, 2), (2, 1), (2, 3), (1, 1), (3, 1), (3, 3)];
const SQUASH: [(usize, usize); 9] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (2, 3),
    (2, 1),
    (3, 1),
    (1, 3),
    (1, 2),
    (3, 2),
];

#[test]
fn test_init_state() {
    let game = Game::new();
    assert_eq!(game.state(), GameState::Init);
    assert!(game.board().is_none());
    assert_eq!(game.turn(), None);
    assert_eq!(game.next_turn(), None);
}

#[test]
fn test_init_rejects_moveto_and_restart() {
    let mut game = Game::new();

    let err = game.moveto(1, 1).unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::Init));
    assert_eq!(err.category(), ErrorCategory::IllegalState);
    assert!(err.to_string().starts_with("illegal state: init"));

    let err = game.restart().unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::Init));
}

#[test]
fn test_playing_state() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.board().unwrap().to_string(), ".........");
    assert_eq!(game.turn(), Some(Mark::X));
    assert_eq!(game.next_turn(), Some(Mark::O));
}

#[test]
fn test_playing_rejects_start_and_restart() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    let err = game.start(Mark::O).unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::Playing));

    let err = game.restart().unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::Playing));
}

#[test]
fn test_gameover_state() {
    let mut game = Game::new();
    game.start(Mark::O).unwrap();
    play(&mut game, &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 1)]);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.board().unwrap().to_string(), "ox.ox.o..");
    assert_eq!(game.turn(), Some(Mark::O));
    assert_eq!(game.next_turn(), Some(Mark::X));

    let stats = game.statistics();
    assert_eq!(stats.total(), &1);
    assert_eq!(stats.x_wins(), &0);
    assert_eq!(stats.o_wins(), &1);
    assert_eq!(stats.squashed(), &0);

    let err = game.start(Mark::X).unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::GameOver));
    let err = game.moveto(2, 2).unwrap_err();
    assert_eq!(err.kind(), &XoErrorKind::IllegalState(GameState::GameOver));
}

#[test]
fn test_out_of_bounds_moves() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    for (r, c) in [(0, 1), (4, 1), (1, 0), (1, 4)] {
        let event = game.moveto(r, c).unwrap();
        assert_eq!(
            event,
            Event::InvalidMove {
                reason: InvalidMoveReason::OutOfBounds
            }
        );
    }
    assert_eq!(game.board().unwrap().to_string(), ".........");
    assert_eq!(game.turn(), Some(Mark::X));
}

#[test]
fn test_occupied_move() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();
    game.moveto(1, 1).unwrap();

    let event = game.moveto(1, 1).unwrap();
    assert_eq!(
        event,
        Event::InvalidMove {
            reason: InvalidMoveReason::Occupied
        }
    );
    assert_eq!(game.board().unwrap().to_string(), "x........");
    assert_eq!(game.turn(), Some(Mark::O));
}

#[test]
fn test_next_turn() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    let event = game.moveto(1, 1).unwrap();
    assert_eq!(
        event,
        Event::NextTurn {
            last_move: Move::new(1, 1, Mark::X)
        }
    );
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.board().unwrap().to_string(), "x........");
    assert_eq!(game.turn(), Some(Mark::O));
    assert_eq!(game.next_turn(), Some(Mark::X));
}

#[test]
fn test_x_wins_on_diagonal() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    let event = play(&mut game, &X_WINS);
    let Event::GameOver {
        last_move,
        conclusion: Conclusion::Winner { details },
    } = &event
    else {
        panic!("expected a win, got {:?}", event);
    };
    assert_eq!(last_move, &Move::new(3, 3, Mark::X));
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].kind(), &LineKind::Diagonal);
    assert_eq!(details[0].index(), &1);
    assert_eq!(
        details[0].positions(),
        &[Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]
    );

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.board().unwrap().to_string(), "xo.xxoo.x");
    assert_eq!(game.turn(), Some(Mark::X));
    assert_eq!(game.next_turn(), Some(Mark::O));
    assert_eq!(game.statistics().total(), &1);
    assert_eq!(game.statistics().x_wins(), &1);
    assert_eq!(game.statistics().o_wins(), &0);
    assert_eq!(game.statistics().squashed(), &0);
}

#[test]
fn test_squashed() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    let event = play(&mut game, &SQUASH);
    assert_eq!(
        event,
        Event::GameOver {
            last_move: Move::new(3, 2, Mark::X),
            conclusion: Conclusion::Squashed,
        }
    );
    assert_eq!(game.board().unwrap().to_string(), "xoxxoooxx");
    assert_eq!(game.turn(), Some(Mark::X));
    assert_eq!(game.statistics().total(), &1);
    assert_eq!(game.statistics().squashed(), &1);
    assert_eq!(game.statistics().x_wins(), &0);
    assert_eq!(game.statistics().o_wins(), &0);
}

#[test]
fn test_restart_after_win_keeps_winner() {
    let mut game = Game::new();
    game.start(Mark::O).unwrap();
    play(&mut game, &[(1, 3), (1, 1), (2, 3), (2, 1), (3, 3)]);

    game.restart().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.board().unwrap().to_string(), ".........");
    assert_eq!(game.turn(), Some(Mark::O));
    assert_eq!(game.next_turn(), Some(Mark::X));
    assert_eq!(game.statistics().total(), &1);
    assert_eq!(game.statistics().o_wins(), &1);
}

#[test]
fn test_restart_after_squash_hands_off() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();
    play(&mut game, &SQUASH);

    game.restart().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.board().unwrap().to_string(), ".........");
    assert_eq!(game.turn(), Some(Mark::O));
    assert_eq!(game.statistics().squashed(), &1);
}

#[test]
fn test_statistics_accumulate_across_rounds() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();
    play(&mut game, &X_WINS);
    game.restart().unwrap();

    // x won, so x leads again
    assert_eq!(game.turn(), Some(Mark::X));
    play(&mut game, &SQUASH);
    game.restart().unwrap();

    assert_eq!(game.turn(), Some(Mark::O));
    let stats = game.statistics();
    assert_eq!(stats.total(), &2);
    assert_eq!(stats.wins(Mark::X), 1);
    assert_eq!(stats.squashed(), &1);
}

#[test]
fn test_event_json_shape() {
    let mut game = Game::new();
    game.start(Mark::X).unwrap();

    let invalid = game.moveto(0, 1).unwrap();
    assert_eq!(
        serde_json::to_value(&invalid).unwrap(),
        json!({ "name": "invalid-move", "reason": "out-of-bounds" })
    );

    let next = game.moveto(2, 2).unwrap();
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        json!({ "name": "next-turn", "last_move": { "row": 2, "col": 2, "mark": "x" } })
    );

    let won = play(&mut game, &X_WINS[1..]);
    assert_eq!(
        serde_json::to_value(&won).unwrap(),
        json!({
            "name": "gameover",
            "reason": "winner",
            "last_move": { "row": 3, "col": 3, "mark": "x" },
            "details": [{
                "where": "diagonal",
                "index": 1,
                "positions": [
                    { "row": 1, "col": 1 },
                    { "row": 2, "col": 2 },
                    { "row": 3, "col": 3 }
                ]
            }]
        })
    );
}
