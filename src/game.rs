//! Frame loop driver
//!
//! Each frame: poll input, tick the simulation, present, then wait for the
//! next frame slot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::consts::GAME_FPS;
use crate::platform::{Clock, FrameRegulator, InputSource};
use crate::renderer::{self, Surface};
use crate::sim::{GameState, TickResult, tick};

/// Host-side switch to stop the loop, e.g. from a window-close callback.
/// Checked once per frame, before any game logic.
#[derive(Debug, Clone, Default)]
pub struct QuitHandle(Arc<AtomicBool>);

impl QuitHandle {
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Game instance holding all state and its collaborators
pub struct Game<I, S, C>
where
    I: InputSource,
    S: Surface,
    C: Clock,
{
    state: GameState,
    input: I,
    surface: S,
    regulator: FrameRegulator<C>,
    quit: QuitHandle,
    frames: u64,
}

impl<I, S, C> Game<I, S, C>
where
    I: InputSource,
    S: Surface,
    C: Clock,
{
    pub fn new(state: GameState, input: I, surface: S, clock: C) -> Self {
        Self {
            state,
            input,
            surface,
            regulator: FrameRegulator::new(clock, GAME_FPS),
            quit: QuitHandle::default(),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn regulator(&self) -> &FrameRegulator<C> {
        &self.regulator
    }

    /// Frames fully run (ticked and presented)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }

    /// Run one frame. Returns false once the game should stop; in that case
    /// nothing was simulated or presented.
    pub fn run_frame(&mut self) -> bool {
        if self.quit.is_requested() {
            return false;
        }

        let keys = self.input.poll();
        if tick(&mut self.state, &keys) == TickResult::Quit {
            self.quit.request();
            return false;
        }

        renderer::render(&self.state, &mut self.surface);
        self.regulator.sync();
        self.frames += 1;
        true
    }

    /// Run until quit is requested; returns the number of frames run
    pub fn run_until_quit(&mut self) -> u64 {
        let start = self.frames;
        while self.run_frame() {}
        let run = self.frames - start;
        log::info!("Loop stopped after {} frames", run);
        run
    }
}
