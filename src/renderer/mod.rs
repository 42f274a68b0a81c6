//! Rendering seam
//!
//! The simulation never draws. The game loop forwards world events to a
//! `Renderer`, which keeps one drawable per live entity.

pub mod headless;

pub use headless::{Drawable, HeadlessRenderer};

use crate::error::Result;
use crate::sim::{EntityId, Pose, Shape};

/// Scene graph the game loop drives
pub trait Renderer {
    /// Register a drawable for a newly spawned entity
    fn attach(&mut self, id: EntityId, shape: &Shape, pose: Pose) -> Result<()>;

    /// Move an attached drawable
    fn set_pose(&mut self, id: EntityId, pose: Pose) -> Result<()>;

    /// Release the drawable of a removed entity
    fn detach(&mut self, id: EntityId) -> Result<()>;

    /// Replace the score line
    fn set_hud_text(&mut self, text: &str) -> Result<()>;
}
