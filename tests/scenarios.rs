use glam::Vec2;
use pong::consts::*;
use pong::platform::{Key, KeySnapshot};
use pong::sim::collision::resolve_paddle_hit;
use pong::sim::{
    GamePhase, GameState, Mode, Paddle, Score, Side, TickResult, ai, penetration, tick,
};
use proptest::prelude::*;

fn in_game(seed: u64, mode: Mode) -> GameState {
    let mut state = GameState::new(seed);
    state.mode = mode;
    state.phase = GamePhase::InGame;
    state
}

fn keys_from(bits: [bool; Key::COUNT]) -> KeySnapshot {
    let mut keys = KeySnapshot::new();
    for (key, down) in Key::ALL.into_iter().zip(bits) {
        keys.set(key, down);
    }
    keys.release(Key::Quit);
    keys
}

fn assert_point_reset(state: &GameState) {
    assert_eq!(state.left.y, GAME_HEIGHT / 2.0 - PADDLE_HALF_HEIGHT);
    assert_eq!(state.right.y, GAME_HEIGHT / 2.0 - PADDLE_HALF_HEIGHT);
    assert_eq!(state.ball.pos, Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0));
    assert_eq!(state.ball.vel.x.abs(), BALL_BASE_SPEED);
    assert_eq!(state.ball.vel.y.abs(), BALL_BASE_SPEED);
}

#[test]
fn test_ball_leaving_left_edge_scores_for_right() {
    let mut state = in_game(1, Mode::TwoPlayer);
    state.score = Score::new(2, 3);
    state.ball.pos = Vec2::new(0.0, GAME_HEIGHT / 2.0);
    state.ball.vel = Vec2::new(-BALL_BASE_SPEED, BALL_BASE_SPEED);

    assert_eq!(tick(&mut state, &KeySnapshot::new()), TickResult::Continue);

    assert_eq!(state.score, Score::new(2, 4));
    assert_eq!(state.phase, GamePhase::PointScored { timer: 0 });
}

#[test]
fn test_pause_ends_with_fresh_point() {
    let mut state = in_game(2, Mode::TwoPlayer);
    state.score = Score::new(1, 2);
    state.left.y = 20.0;
    state.ball.pos = Vec2::new(-3.0, 50.0);
    state.phase = GamePhase::PointScored {
        timer: INTERPOINT_DELAY - 1,
    };

    tick(&mut state, &KeySnapshot::new());

    assert_eq!(state.phase, GamePhase::InGame);
    assert_eq!(state.score, Score::new(1, 2));
    assert_point_reset(&state);
}

#[test]
fn test_pause_after_winning_point_shows_winner() {
    let mut state = in_game(3, Mode::SinglePlayer);
    state.score = Score::new(SCORE_TO_WIN, 2);
    state.phase = GamePhase::PointScored {
        timer: INTERPOINT_DELAY - 1,
    };

    tick(&mut state, &KeySnapshot::new());

    assert_eq!(state.phase, GamePhase::Winner { timer: 0 });
}

#[test]
fn test_winner_returns_to_menu_keeping_score() {
    let mut state = in_game(4, Mode::SinglePlayer);
    state.score = Score::new(SCORE_TO_WIN, 2);
    state.phase = GamePhase::Winner {
        timer: INTERGAME_DELAY - 1,
    };

    tick(&mut state, &KeySnapshot::new());

    assert_eq!(state.phase, GamePhase::Menu);
    assert_eq!(state.score, Score::new(SCORE_TO_WIN, 2));
}

#[test]
fn test_ai_steps_toward_approaching_ball() {
    let mut state = in_game(5, Mode::SinglePlayer);
    state.ball.pos = Vec2::new(200.0, 60.0);
    state.ball.vel = Vec2::new(BALL_BASE_SPEED, BALL_BASE_SPEED);
    let start = state.right.y;

    // Human keys for the right paddle are ignored against the computer
    tick(&mut state, &KeySnapshot::with(&[Key::RightDown]));

    assert_eq!(state.right.y, start - PADDLE_SPEED);
    assert!(state.right.y >= PADDLE_MIN_Y && state.right.y <= PADDLE_MAX_Y);
}

#[test]
fn test_ai_is_clamped_at_top() {
    let mut paddle = Paddle::new(Side::Right);
    paddle.y = PADDLE_MIN_Y + 1.0;
    let mut state = GameState::new(6);
    state.ball.pos = Vec2::new(250.0, 25.0);
    state.ball.vel = Vec2::new(BALL_BASE_SPEED, -BALL_BASE_SPEED);

    ai::drive(&mut paddle, &state.ball);

    assert_eq!(paddle.y, PADDLE_MIN_Y);
}

#[test]
fn test_face_hit_reverses_and_separates() {
    let paddle = Paddle::new(Side::Right);
    let mut state = GameState::new(7);
    state.ball.pos = Vec2::new(297.0, 115.0);
    state.ball.vel = Vec2::new(2.0, -1.5);

    let pen = penetration(&state.ball, &paddle);
    assert!(pen.is_hit());
    assert!(pen.x < pen.y);

    resolve_paddle_hit(&mut state.ball, &paddle, pen);

    assert_eq!(state.ball.vel, Vec2::new(-2.0, -1.5));
    assert_eq!(state.ball.pos, Vec2::new(297.0 - pen.x, 115.0));
    assert_eq!(penetration(&state.ball, &paddle).x, 0.0);
}

#[test]
fn test_full_two_player_game_flow() {
    let mut state = GameState::new(11);
    tick(&mut state, &KeySnapshot::with(&[Key::TwoPlayers]));
    assert_eq!(state.phase, GamePhase::InGame);
    assert_eq!(state.mode, Mode::TwoPlayer);

    // Nobody touches the keys; the ball still finds the goals
    let idle = KeySnapshot::new();
    let mut frames = 0;
    while state.phase != GamePhase::Menu {
        tick(&mut state, &idle);
        frames += 1;
        assert!(frames < 200_000, "game never finished");
    }
    assert!(state.score.winner().is_some());
}

proptest! {
    #[test]
    fn prop_human_paddle_stays_in_bounds(
        y in PADDLE_MIN_Y..=PADDLE_MAX_Y,
        moves in prop::collection::vec((any::<bool>(), any::<bool>()), 1..200),
    ) {
        let mut paddle = Paddle::new(Side::Left);
        paddle.y = y;
        for (up, down) in moves {
            paddle.apply_input(up, down);
            prop_assert!(paddle.y >= PADDLE_MIN_Y && paddle.y <= PADDLE_MAX_Y);
        }
    }

    #[test]
    fn prop_ai_paddle_stays_in_bounds(
        y in PADDLE_MIN_Y..=PADDLE_MAX_Y,
        ball_x in 0.0f32..GAME_WIDTH,
        ball_y in 0.0f32..GAME_HEIGHT,
        vx in -4.0f32..4.0,
    ) {
        let mut paddle = Paddle::new(Side::Right);
        paddle.y = y;
        let mut state = GameState::new(0);
        state.ball.pos = Vec2::new(ball_x, ball_y);
        state.ball.vel.x = vx;
        for _ in 0..100 {
            ai::drive(&mut paddle, &state.ball);
            prop_assert!(paddle.y >= PADDLE_MIN_Y && paddle.y <= PADDLE_MAX_Y);
        }
    }

    #[test]
    fn prop_ball_never_slows_within_a_point(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<[bool; Key::COUNT]>(), 1..400),
    ) {
        let mut state = in_game(seed, Mode::SinglePlayer);
        let mut speed = state.ball.speed();
        for bits in inputs {
            tick(&mut state, &keys_from(bits));
            if state.phase != GamePhase::InGame {
                break;
            }
            let now = state.ball.speed();
            prop_assert!(now >= speed - 1e-4);
            speed = now;
        }
    }

    #[test]
    fn prop_reset_point_is_idempotent(seed in any::<u64>(), frames in 0usize..300) {
        let mut state = in_game(seed, Mode::SinglePlayer);
        for _ in 0..frames {
            tick(&mut state, &KeySnapshot::new());
        }
        state.reset_point();
        assert_point_reset(&state);
        state.reset_point();
        assert_point_reset(&state);
    }

    #[test]
    fn prop_timed_phases_only_advance_timer(
        seed in any::<u64>(),
        timer in 0..INTERPOINT_DELAY - 1,
        winner in any::<bool>(),
        bits in any::<[bool; Key::COUNT]>(),
    ) {
        let mut state = in_game(seed, Mode::TwoPlayer);
        state.score = Score::new(2, 3);
        state.phase = if winner {
            GamePhase::Winner { timer }
        } else {
            GamePhase::PointScored { timer }
        };

        let mut expected = state.clone();
        expected.phase = if winner {
            GamePhase::Winner { timer: timer + 1 }
        } else {
            GamePhase::PointScored { timer: timer + 1 }
        };

        tick(&mut state, &keys_from(bits));

        prop_assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::to_value(&expected).unwrap()
        );
    }
}
