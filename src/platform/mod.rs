//! Platform abstraction layer
//!
//! Everything the core needs from its host, expressed as traits:
//! - Input: per-frame key-down snapshot
//! - Time: monotonic clock and frame pacing

pub mod input;
pub mod time;

pub use input::{InputSource, Key, KeySnapshot, SharedKeys};
pub use time::{Clock, FrameRegulator, MonotonicClock, SimulatedClock};
