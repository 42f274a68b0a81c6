//! Asteroids! - A toroidal arcade game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world tick)
//! - `game`: Fixed-step loop driver tying input, simulation and renderer together
//! - `renderer`: Renderer seam and a headless scene implementation
//! - `platform`: Key state, input sources and clocks
//! - `settings`: Data-driven game tuning
//! - `savings`: Savings projection (linear vs compound growth)

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod savings;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{GameLoop, LoopState};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window title shown by front ends
    pub const WINDOW_TITLE: &str = "Asteroids!";
    /// Target tick rate (one logical step per callback)
    pub const TICK_RATE_HZ: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 300.0;
    pub const WORLD_HEIGHT: f32 = 200.0;

    /// Asteroids placed at startup
    pub const INITIAL_ASTEROIDS: usize = 5;
    pub const ASTEROID_RADIUS: f32 = 30.0;
    pub const ASTEROID_SPEED: f32 = 1.0;
    /// Cosmetic spin bound (degrees per tick)
    pub const MAX_ASTEROID_SPIN: f32 = 1.5;

    /// Ship triangle circumradius
    pub const SHIP_RADIUS: f32 = 10.0;
    /// Degrees per tick while a turn key is held
    pub const TURN_STEP: f32 = 5.0;
    /// Velocity added per tick of thrust
    pub const THRUST: f32 = 0.05;
    pub const MAX_SHIP_SPEED: f32 = 5.0;

    pub const PROJECTILE_RADIUS: f32 = 2.0;
    pub const PROJECTILE_SPEED: f32 = 3.0;
    pub const MAX_PROJECTILES: usize = 3;

    pub const POINTS_PER_KILL: u64 = 1000;
    /// Per-tick probability of trying to spawn an asteroid
    pub const SPAWN_CHANCE: f64 = 0.005;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit vector for a heading in degrees (0 = +x, clockwise on screen)
#[inline]
pub fn heading_to_unit(heading: f32) -> Vec2 {
    let rad = heading.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Rotate a vector clockwise (on screen) by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Normalize `v`, falling back to the heading direction for a zero vector
#[inline]
pub fn normalize_or_heading(v: Vec2, heading: f32) -> Vec2 {
    v.try_normalize().unwrap_or_else(|| heading_to_unit(heading))
}

/// Wrap a position onto the torus [0, w) x [0, h)
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, bounds.x), wrap_axis(pos.y, bounds.y))
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    let w = v.rem_euclid(extent);
    if w >= extent { 0.0 } else { w }
}
