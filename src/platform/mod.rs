//! Platform abstraction layer
//!
//! Everything the game loop consumes from the outside world:
//! - Held-key state and input sources
//! - Demo-mode autopilot
//! - Tick clocks

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputSource, Key, KeyState};
pub use time::{Clock, FixedRateClock, ManualClock};
