//! Fixed-rate simulation tick
//!
//! One call advances the game by exactly one frame. All phase timers count
//! these frames, so a run is reproducible regardless of wall-clock speed.

use super::ai;
use super::collision::step_ball;
use super::state::{GamePhase, GameState, Mode};
use crate::consts::*;
use crate::platform::{Key, KeySnapshot};

/// What the loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    /// The quit key was held; no phase logic ran this frame
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, keys: &KeySnapshot) -> TickResult {
    if keys.is_down(Key::Quit) {
        log::info!("Quit requested");
        return TickResult::Quit;
    }

    match state.phase {
        GamePhase::Menu => update_menu(state, keys),
        GamePhase::InGame => update_game(state, keys),
        GamePhase::PointScored { timer } => update_point_scored(state, timer + 1),
        GamePhase::Winner { timer } => update_winner(state, timer + 1),
    }

    TickResult::Continue
}

/// Advance up to `frames` frames with the same keys held, stopping early on quit
pub fn tick_frames(state: &mut GameState, keys: &KeySnapshot, frames: u32) -> TickResult {
    for _ in 0..frames {
        if tick(state, keys) == TickResult::Quit {
            return TickResult::Quit;
        }
    }
    TickResult::Continue
}

fn update_menu(state: &mut GameState, keys: &KeySnapshot) {
    let mode = if keys.is_down(Key::OnePlayer) {
        Mode::SinglePlayer
    } else if keys.is_down(Key::TwoPlayers) {
        Mode::TwoPlayer
    } else {
        return;
    };

    state.mode = mode;
    state.reset_game();
    state.phase = GamePhase::InGame;
    log::info!("New game started ({:?})", mode);
}

fn update_game(state: &mut GameState, keys: &KeySnapshot) {
    state
        .left
        .apply_input(keys.is_down(Key::LeftUp), keys.is_down(Key::LeftDown));

    match state.mode {
        Mode::TwoPlayer => state
            .right
            .apply_input(keys.is_down(Key::RightUp), keys.is_down(Key::RightDown)),
        Mode::SinglePlayer => ai::drive(&mut state.right, &state.ball),
    }

    let report = step_ball(state);

    if let Some(side) = report.paddle_hit {
        log::debug!(
            "{} paddle hit, ball speed now {:.3}",
            side.as_str(),
            state.ball.speed()
        );
    }
    if let Some(side) = report.scored {
        log::info!(
            "{} player scores ({} - {})",
            side.as_str(),
            state.score.left,
            state.score.right
        );
    }
}

fn update_point_scored(state: &mut GameState, timer: u32) {
    if timer < INTERPOINT_DELAY {
        state.phase = GamePhase::PointScored { timer };
        return;
    }

    if let Some(winner) = state.score.winner() {
        log::info!(
            "{} player wins {} - {}",
            winner.as_str(),
            state.score.left,
            state.score.right
        );
        state.phase = GamePhase::Winner { timer: 0 };
    } else {
        state.reset_point();
        state.phase = GamePhase::InGame;
    }
}

fn update_winner(state: &mut GameState, timer: u32) {
    if timer < INTERGAME_DELAY {
        state.phase = GamePhase::Winner { timer };
        return;
    }

    log::info!("Returning to menu");
    state.phase = GamePhase::Menu;
}
