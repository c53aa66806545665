//! Presentation adapter
//!
//! Turns game state into abstract draw commands and hands them to whatever
//! surface the host provides. Nothing in here mutates the game.

pub mod commands;
pub mod scene;

pub use commands::{Color, DrawCommand, FontRole, Rect};
pub use scene::compose;

use crate::sim::GameState;

/// Double-buffered drawing target supplied by the host
pub trait Surface {
    /// Queue one command on the back buffer
    fn draw(&mut self, command: &DrawCommand);
    /// Flip the back buffer to the screen
    fn present(&mut self);
}

/// Draw the current state and present it
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    for command in compose(state) {
        surface.draw(&command);
    }
    surface.present();
}

/// Surface that keeps the last presented frame in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    back: Vec<DrawCommand>,
    front: Vec<DrawCommand>,
    presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.front
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Last presented frame as JSON, for snapshots and traces
    pub fn frame_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.front)
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, command: &DrawCommand) {
        self.back.push(command.clone());
    }

    fn present(&mut self) {
        self.front = std::mem::take(&mut self.back);
        self.presented += 1;
    }
}
