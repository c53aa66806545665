//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one frame; timers count frames, not seconds
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the key snapshot

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, Penetration, penetration, step_ball};
pub use state::{Ball, GamePhase, GameState, Mode, Paddle, Score, Side};
pub use tick::{TickResult, tick, tick_frames};
