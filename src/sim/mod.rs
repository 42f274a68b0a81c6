//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, EntityId, Pose, Shape};
pub use collision::{circles_overlap, pair_hits};
pub use state::{Asteroid, EntityKind, GameEvent, GamePhase, Projectile, Ship, World};
pub use tick::{TickInput, tick};
