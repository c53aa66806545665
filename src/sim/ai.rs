//! Opponent controller for single-player games
//!
//! Deliberately simple: follow the ball while it approaches, drift back to
//! the middle while it moves away. No trajectory prediction.

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Top edge the AI paddle is heading for this frame
pub fn target_y(ball: &Ball) -> f32 {
    if ball.vel.x > 0.0 {
        ball.pos.y - PADDLE_HALF_HEIGHT
    } else {
        GAME_HEIGHT / 2.0 - PADDLE_HALF_HEIGHT
    }
}

/// Move the paddle one fixed step toward its target
pub fn drive(paddle: &mut Paddle, ball: &Ball) {
    let target = target_y(ball);

    if paddle.y > target && paddle.can_move_up() {
        paddle.y -= PADDLE_SPEED;
    } else if paddle.y < target && paddle.can_move_down() {
        paddle.y += PADDLE_SPEED;
    }
    paddle.clamp();
}
