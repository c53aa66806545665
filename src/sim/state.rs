//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one owned `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a mode selection
    Menu,
    /// Active rally
    InGame,
    /// Pause after a point; `timer` counts frames since entry
    PointScored { timer: u32 },
    /// Winner banner; `timer` counts frames since entry
    Winner { timer: u32 },
}

impl GamePhase {
    /// Frames spent in the current timed phase (0 for Menu and InGame)
    pub fn timer(&self) -> u32 {
        match *self {
            GamePhase::PointScored { timer } | GamePhase::Winner { timer } => timer,
            GamePhase::Menu | GamePhase::InGame => 0,
        }
    }
}

/// Which end of the court a paddle (or player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Right paddle is driven by the opponent controller
    SinglePlayer,
    #[default]
    TwoPlayer,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge of the paddle
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let mut paddle = Self { side, y: 0.0 };
        paddle.reset();
        paddle
    }

    /// Centre the paddle vertically
    pub fn reset(&mut self) {
        self.y = GAME_HEIGHT / 2.0 - PADDLE_HALF_HEIGHT;
    }

    pub fn center_x(&self) -> f32 {
        match self.side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HALF_HEIGHT
    }

    /// Whether a step up is still allowed
    pub fn can_move_up(&self) -> bool {
        self.y > PADDLE_MIN_Y
    }

    /// Whether a step down is still allowed
    pub fn can_move_down(&self) -> bool {
        self.y + PADDLE_HEIGHT < GAME_HEIGHT - PADDLE_MARGIN
    }

    /// Apply one frame of directional input. Both directions may apply in
    /// the same frame, in which case they cancel out.
    pub fn apply_input(&mut self, up: bool, down: bool) {
        if up && self.can_move_up() {
            self.y -= PADDLE_SPEED;
        }
        if down && self.can_move_down() {
            self.y += PADDLE_SPEED;
        }
        self.clamp();
    }

    /// Keep the paddle inside the playfield margins
    pub fn clamp(&mut self) {
        self.y = self.y.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Current speed (vector magnitude)
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Move by one frame of velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Centre the ball and serve it diagonally in a random direction
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
        let vx = if rng.random_bool(0.5) { BALL_BASE_SPEED } else { -BALL_BASE_SPEED };
        let vy = if rng.random_bool(0.5) { BALL_BASE_SPEED } else { -BALL_BASE_SPEED };
        self.vel = Vec2::new(vx, vy);
    }
}

/// Points for each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.left >= SCORE_TO_WIN {
            Some(Side::Left)
        } else if self.right >= SCORE_TO_WIN {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Side shown as the winner on the banner (ties go right)
    pub fn leader(&self) -> Side {
        if self.left > self.right {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Source of serve directions
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Fixed for the duration of a game
    pub mode: Mode,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Create a new game state in the menu with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            mode: Mode::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
        };
        state.reset_point();
        state
    }

    /// Centre paddles and ball, serve in a random diagonal
    pub fn reset_point(&mut self) {
        self.left.reset();
        self.right.reset();
        self.ball.reset(&mut self.rng);
    }

    /// Clear the score and set up the first point
    pub fn reset_game(&mut self) {
        self.score.reset();
        self.reset_point();
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn is_single_player(&self) -> bool {
        self.mode == Mode::SinglePlayer
    }
}
