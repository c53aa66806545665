//! Pong entry point
//!
//! Headless attract mode: the left paddle is driven by a simple autopilot
//! against the built-in AI, and frames are drawn onto an in-memory surface.
//! A windowed host plugs its own `InputSource` and `Surface` into `Game`.

use pong::Game;
use pong::Settings;
use pong::platform::{Key, KeySnapshot, MonotonicClock};
use pong::renderer::{DrawCommand, RecordingSurface, Surface};
use pong::sim::{GamePhase, GameState};

/// Recording surface that optionally logs each presented frame
struct TraceSurface {
    inner: RecordingSurface,
    trace: bool,
}

impl Surface for TraceSurface {
    fn draw(&mut self, command: &DrawCommand) {
        self.inner.draw(command);
    }

    fn present(&mut self) {
        self.inner.present();
        if self.trace {
            match self.inner.frame_json() {
                Ok(json) => log::debug!("frame {}: {}", self.inner.presented(), json),
                Err(e) => log::warn!("Could not serialize frame: {}", e),
            }
        }
    }
}

/// Keys for the next frame of the attract loop
fn demo_keys(state: &GameState, started: &mut bool) -> KeySnapshot {
    let mut keys = KeySnapshot::new();
    match state.phase {
        GamePhase::Menu if !*started => {
            *started = true;
            keys.press(Key::OnePlayer);
        }
        // One full game shown; leave from the menu
        GamePhase::Menu => keys.press(Key::Quit),
        GamePhase::InGame => {
            let center = state.left.center_y();
            if state.ball.pos.y < center - 2.0 {
                keys.press(Key::LeftUp);
            } else if state.ball.pos.y > center + 2.0 {
                keys.press(Key::LeftDown);
            }
        }
        GamePhase::PointScored { .. } | GamePhase::Winner { .. } => {}
    }
    keys
}

fn main() {
    env_logger::init();
    log::info!("Pong (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("Game initialized with seed: {}", seed);

    let surface = TraceSurface {
        inner: RecordingSurface::new(),
        trace: settings.trace_frames,
    };
    let mut game = Game::new(
        GameState::new(seed),
        KeySnapshot::new(),
        surface,
        MonotonicClock::new(),
    );

    let mut started = false;
    loop {
        if settings.frame_limit.is_some_and(|limit| game.frames() >= limit) {
            log::info!("Frame limit reached");
            break;
        }
        let keys = demo_keys(game.state(), &mut started);
        *game.input_mut() = keys;
        if !game.run_frame() {
            break;
        }
    }

    let score = game.state().score;
    log::info!(
        "Finished after {} frames, score {} - {}",
        game.frames(),
        score.left,
        score.right
    );
}
