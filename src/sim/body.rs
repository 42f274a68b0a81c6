//! Shared kinematics for every entity kind
//!
//! Ship, asteroids and projectiles all own a `Body`; they differ only in how
//! the body is built and which controls act on it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{heading_to_unit, normalize_degrees, wrap_position};

/// Stable entity identifier, unique within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outline in the entity's local frame (heading 0, origin at the centre)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Polygon(Vec<Vec2>),
    Circle { radius: f32 },
}

impl Shape {
    /// Radius of the circle enclosing the shape around the local origin
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Shape::Circle { radius } => *radius,
            Shape::Polygon(points) => points.iter().map(|p| p.length()).fold(0.0, f32::max),
        }
    }
}

/// Where an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    /// Degrees, 0 = +x, clockwise on screen
    pub heading: f32,
}

/// Position, heading, velocity, liveness and shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: EntityId,
    pub pos: Vec2,
    /// Degrees in [0, 360)
    pub heading: f32,
    /// Pixels per tick
    pub vel: Vec2,
    pub alive: bool,
    pub shape: Shape,
}

impl Body {
    pub fn new(id: EntityId, pos: Vec2, shape: Shape) -> Self {
        Self {
            id,
            pos,
            heading: 0.0,
            vel: Vec2::ZERO,
            alive: true,
            shape,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            pos: self.pos,
            heading: self.heading,
        }
    }

    pub fn radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    /// Step by one tick of velocity; wrap onto the torus when `bounds` is given
    pub fn advance(&mut self, bounds: Option<Vec2>) {
        self.pos += self.vel;
        if let Some(bounds) = bounds {
            self.pos = wrap_position(self.pos, bounds);
        }
    }

    /// Counter-clockwise on screen
    pub fn turn_left(&mut self, step: f32) {
        self.heading = normalize_degrees(self.heading - step);
    }

    /// Clockwise on screen
    pub fn turn_right(&mut self, step: f32) {
        self.heading = normalize_degrees(self.heading + step);
    }

    /// Push velocity along the current heading
    pub fn accelerate(&mut self, amount: f32) {
        self.vel += heading_to_unit(self.heading) * amount;
    }

    /// Kill the entity. There is no way back.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn collides(&self, other: &Body) -> bool {
        super::collision::circles_overlap(self.pos, self.radius(), other.pos, other.radius())
    }
}
