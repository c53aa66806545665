//! Keyboard snapshot consumed by the simulation
//!
//! The host owns the real keyboard. Once per frame the loop asks an
//! `InputSource` for the current key-down table and never writes to it.

use std::ops::Index;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Leave the game from any phase
    Quit,
    /// Start a game against the computer
    OnePlayer,
    /// Start a game for two people
    TwoPlayers,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    pub const COUNT: usize = 7;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Quit,
        Key::OnePlayer,
        Key::TwoPlayers,
        Key::LeftUp,
        Key::LeftDown,
        Key::RightUp,
        Key::RightDown,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Default physical binding, as printed on the menu
    pub fn label(&self) -> &'static str {
        match self {
            Key::Quit => "Esc",
            Key::OnePlayer => "1",
            Key::TwoPlayers => "2",
            Key::LeftUp => "A",
            Key::LeftDown => "Z",
            Key::RightUp => "Up",
            Key::RightDown => "Down",
        }
    }
}

/// Which keys are held down right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeySnapshot {
    held: [bool; Key::COUNT],
}

impl KeySnapshot {
    /// No keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly `keys` held
    pub fn with(keys: &[Key]) -> Self {
        let mut snapshot = Self::new();
        for &key in keys {
            snapshot.press(key);
        }
        snapshot
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Keys currently held, in `Key::ALL` order
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|&key| self.is_down(key))
    }
}

impl Index<Key> for KeySnapshot {
    type Output = bool;

    fn index(&self, key: Key) -> &bool {
        &self.held[key.index()]
    }
}

/// Supplier of the per-frame key table
pub trait InputSource {
    fn poll(&mut self) -> KeySnapshot;
}

/// A plain snapshot is a source that always reports the same keys
impl InputSource for KeySnapshot {
    fn poll(&mut self) -> KeySnapshot {
        *self
    }
}

/// Key table shared with an input thread or event callback.
///
/// The host updates it as key events arrive; the loop reads a copy per frame.
#[derive(Debug, Clone, Default)]
pub struct SharedKeys(Arc<Mutex<KeySnapshot>>);

impl SharedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn set(&self, key: Key, down: bool) {
        let mut keys = self.0.lock().unwrap_or_else(|e| e.into_inner());
        keys.set(key, down);
    }

    pub fn snapshot(&self) -> KeySnapshot {
        *self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl InputSource for SharedKeys {
    fn poll(&mut self) -> KeySnapshot {
        self.snapshot()
    }
}
