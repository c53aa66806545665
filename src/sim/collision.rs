//! Collision detection and response
//!
//! The ball is treated as a square of side `2 * radius` and each paddle as an
//! axis-aligned rectangle. Overlap depth on each axis decides whether the ball
//! hit a paddle and which face it struck; there is no swept test and no
//! circle geometry. Corner hits are occasionally classified as the wrong
//! face, which is part of how the game plays.

use super::state::{Ball, GamePhase, GameState, Paddle, Side};
use crate::consts::*;

/// Overlap between the ball's bounding square and a paddle, per axis.
/// Positive means overlapping on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub x: f32,
    pub y: f32,
}

impl Penetration {
    /// Overlapping on both axes
    pub fn is_hit(&self) -> bool {
        self.x > 0.0 && self.y > 0.0
    }

    /// Shallower horizontally than vertically: the ball struck the paddle face
    pub fn is_side_hit(&self) -> bool {
        self.x < self.y
    }
}

/// Result of one frame of ball physics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Vertical velocity was flipped by the top or bottom wall
    pub wall_bounce: bool,
    /// Paddle the ball bounced off this frame
    pub paddle_hit: Option<Side>,
    /// Player awarded a point this frame
    pub scored: Option<Side>,
}

/// Compute overlap depths between the ball and a paddle
pub fn penetration(ball: &Ball, paddle: &Paddle) -> Penetration {
    Penetration {
        x: PADDLE_HALF_WIDTH + ball.radius - (ball.pos.x - paddle.center_x()).abs(),
        y: PADDLE_HALF_HEIGHT + ball.radius - (ball.pos.y - paddle.center_y()).abs(),
    }
}

/// Whether the ball touches the top or bottom border
pub fn touches_wall(ball: &Ball) -> bool {
    ball.pos.y - ball.radius <= WALL_THICKNESS
        || ball.pos.y + ball.radius >= GAME_HEIGHT - WALL_THICKNESS
}

/// Bounce the ball off a paddle it overlaps.
///
/// Horizontal velocity always flips. A face hit pushes the ball back toward
/// the court by `pen.x`; otherwise the ball hit the paddle's top or bottom,
/// is pushed vertically away from the paddle centre by `pen.y` and also has
/// its vertical velocity flipped.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, pen: Penetration) {
    ball.vel.x = -ball.vel.x;
    if pen.is_side_hit() {
        match paddle.side {
            Side::Left => ball.pos.x += pen.x,
            Side::Right => ball.pos.x -= pen.x,
        }
    } else {
        if ball.pos.y > paddle.center_y() {
            ball.pos.y += pen.y;
        } else {
            ball.pos.y -= pen.y;
        }
        ball.vel.y = -ball.vel.y;
    }
}

/// Player awarded a point when the ball is past an end line.
/// The left edge is checked first.
pub fn goal_scored(ball: &Ball) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > GAME_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// Run one frame of ball physics and scoring.
///
/// Must be called after both paddles have moved for the frame. Reflections
/// are decided on the ball's pre-move position and then applied by the
/// integration step. A ball already past an end line scores without moving;
/// a ball that crosses one while integrating scores in the same frame.
pub fn step_ball(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    let ball = &mut state.ball;

    if touches_wall(ball) {
        ball.vel.y = -ball.vel.y;
        report.wall_bounce = true;
    }

    // Right paddle has priority; at most one paddle registers per frame
    for paddle in [&state.right, &state.left] {
        let pen = penetration(ball, paddle);
        if pen.is_hit() {
            resolve_paddle_hit(ball, paddle, pen);
            report.paddle_hit = Some(paddle.side);
            break;
        }
    }

    if report.paddle_hit.is_some() {
        ball.vel *= BALL_SPEED_INCREASE;
    }

    report.scored = goal_scored(ball);
    if report.scored.is_none() {
        ball.integrate();
        report.scored = goal_scored(ball);
    }

    if let Some(side) = report.scored {
        state.score.award(side);
        state.phase = GamePhase::PointScored { timer: 0 };
    }

    report
}
