//! Pong - the classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, state machine, AI)
//! - `renderer`: Presentation adapter producing abstract draw commands
//! - `platform`: Input snapshot and frame pacing abstractions
//! - `game`: Frame loop driver tying the above together
//! - `settings`: Host-side options

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, QuitHandle};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title and menu banner
    pub const GAME_NAME: &str = "PONG!";

    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 320.0;
    pub const GAME_HEIGHT: f32 = 240.0;

    /// Target frame rate; every timer in the game is counted in these frames
    pub const GAME_FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 30.0;
    pub const PADDLE_HALF_WIDTH: f32 = 5.0;
    /// Paddle travel per frame (human and AI alike)
    pub const PADDLE_SPEED: f32 = 2.0;
    /// Gap kept between a paddle and the top/bottom of the playfield
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Horizontal paddle centres
    pub const LEFT_PADDLE_X: f32 = 15.0;
    pub const RIGHT_PADDLE_X: f32 = GAME_WIDTH - 15.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Per-axis speed at the start of every point
    pub const BALL_BASE_SPEED: f32 = 2.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const BALL_SPEED_INCREASE: f32 = 1.05;

    /// Drawing unit for borders and paddles
    pub const GFX_SPACER: f32 = 10.0;
    /// Distance from the top/bottom edge at which the ball bounces
    pub const WALL_THICKNESS: f32 = 2.0 * GFX_SPACER;

    /// Rules
    pub const SCORE_TO_WIN: u32 = 5;
    /// Pause after a point (1 second)
    pub const INTERPOINT_DELAY: u32 = GAME_FPS;
    /// Winner banner duration before returning to the menu (3 seconds)
    pub const INTERGAME_DELAY: u32 = 3 * GAME_FPS;

    /// Lowest legal paddle top
    pub const PADDLE_MIN_Y: f32 = PADDLE_MARGIN;
    /// Highest legal paddle top
    pub const PADDLE_MAX_Y: f32 = GAME_HEIGHT - PADDLE_MARGIN - PADDLE_HEIGHT;
}
