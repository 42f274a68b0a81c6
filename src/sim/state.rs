//! World state and entity kinds
//!
//! Everything the simulation mutates lives on `World`. Entities keep their
//! insertion order, which is also the iteration order of every tick step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, EntityId, Pose, Shape};
use crate::settings::Settings;
use crate::{heading_to_unit, normalize_degrees, normalize_or_heading, rotate_degrees, wrap_position};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// The ship hit an asteroid; nothing moves any more
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Asteroid,
    Projectile,
}

/// Something the renderer or the log may want to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: EntityId, kind: EntityKind },
    Despawned { id: EntityId },
    AsteroidDestroyed {
        asteroid: EntityId,
        projectile: EntityId,
        score: u64,
    },
    ShipDestroyed { asteroid: EntityId },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub turn_step: f32,
    pub thrust: f32,
    pub max_speed: Option<f32>,
}

impl Ship {
    pub fn new(id: EntityId, pos: Vec2, settings: &Settings) -> Self {
        Self {
            body: Body::new(id, pos, Self::outline(settings.ship_radius)),
            turn_step: settings.turn_step,
            thrust: settings.thrust,
            max_speed: settings.max_ship_speed,
        }
    }

    /// Arrowhead triangle with every vertex on the circumcircle
    pub fn outline(radius: f32) -> Shape {
        Shape::Polygon(
            [0.0, 140.0, 220.0]
                .iter()
                .map(|&deg| rotate_degrees(Vec2::new(radius, 0.0), deg))
                .collect(),
        )
    }

    pub fn turn_left(&mut self) {
        self.body.turn_left(self.turn_step);
    }

    pub fn turn_right(&mut self) {
        self.body.turn_right(self.turn_step);
    }

    /// Thrust along the heading, clamped to the speed cap if there is one
    pub fn accelerate(&mut self) {
        self.body.accelerate(self.thrust);
        if let Some(cap) = self.max_speed {
            self.body.vel = self.body.vel.clamp_length_max(cap);
        }
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    /// Degrees per tick; only changes how the rock is drawn
    pub spin: f32,
    /// Jagged outline for drawing (collision uses `body.shape`)
    pub outline: Shape,
}

impl Asteroid {
    /// Asteroid with a uniformly random heading
    pub fn new<R: Rng + ?Sized>(id: EntityId, pos: Vec2, settings: &Settings, rng: &mut R) -> Self {
        let heading = rng.random_range(0.0..360.0);
        Self::with_heading(id, pos, heading, settings, rng)
    }

    pub fn with_heading<R: Rng + ?Sized>(
        id: EntityId,
        pos: Vec2,
        heading: f32,
        settings: &Settings,
        rng: &mut R,
    ) -> Self {
        let radius = settings.asteroid_radius;
        let mut body = Body::new(id, pos, Shape::Circle { radius });
        body.heading = normalize_degrees(heading);
        body.vel = heading_to_unit(body.heading) * settings.asteroid_speed;

        let max_spin = settings.max_asteroid_spin;
        let spin = if max_spin > 0.0 {
            rng.random_range(-max_spin..=max_spin)
        } else {
            0.0
        };

        Self {
            body,
            spin,
            outline: Self::jagged_outline(radius, rng),
        }
    }

    /// Pentagon with each vertex pulled in by up to 20%
    fn jagged_outline<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Shape {
        Shape::Polygon(
            (0..5)
                .map(|i| {
                    let r = radius * rng.random_range(0.8..=1.0);
                    heading_to_unit(72.0 * i as f32) * r
                })
                .collect(),
        )
    }

    /// Apply cosmetic spin
    pub fn apply_spin(&mut self) {
        self.body.heading = normalize_degrees(self.body.heading + self.spin);
    }
}

/// A shot fired from the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    /// Fired from the ship's current pose; speed is fixed for its lifetime
    pub fn new(id: EntityId, ship: &Body, settings: &Settings) -> Self {
        let mut body = Body::new(
            id,
            ship.pos,
            Shape::Circle {
                radius: settings.projectile_radius,
            },
        );
        body.heading = ship.heading;
        body.accelerate(settings.thrust);
        body.vel = normalize_or_heading(body.vel, body.heading) * settings.projectile_speed;
        Self { body }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Insertion order
    pub asteroids: Vec<Asteroid>,
    /// Insertion order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Asteroids destroyed by projectiles
    pub kills: u64,
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl World {
    /// World seeded from `settings.seed`
    pub fn new(settings: Settings) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self::with_rng(settings, rng)
    }

    /// World drawing all randomness from `rng`
    pub fn with_rng(settings: Settings, rng: Pcg32) -> Self {
        let centre = settings.bounds() / 2.0;
        let mut world = Self {
            ship: Ship::new(EntityId(1), centre, &settings),
            settings,
            rng,
            phase: GamePhase::Playing,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            kills: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 2,
        };
        world.events.push(GameEvent::Spawned {
            id: world.ship.body.id,
            kind: EntityKind::Ship,
        });

        let (w, h) = (world.settings.width, world.settings.height);
        for _ in 0..world.settings.initial_asteroids {
            let pos = Vec2::new(
                world.rng.random_range(0.0..w / 3.0),
                world.rng.random_range(0.0..h),
            );
            let id = world.next_entity_id();
            let asteroid = Asteroid::new(id, pos, &world.settings, &mut world.rng);
            world.push_asteroid(asteroid);
        }

        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn bounds(&self) -> Vec2 {
        self.settings.bounds()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Place an asteroid with a known heading (positions wrap onto the world)
    pub fn add_asteroid_at(&mut self, pos: Vec2, heading: f32) -> EntityId {
        let id = self.next_entity_id();
        let pos = wrap_position(pos, self.bounds());
        let asteroid = Asteroid::with_heading(id, pos, heading, &self.settings, &mut self.rng);
        self.push_asteroid(asteroid);
        id
    }

    pub(crate) fn push_asteroid(&mut self, asteroid: Asteroid) {
        self.events.push(GameEvent::Spawned {
            id: asteroid.body.id,
            kind: EntityKind::Asteroid,
        });
        self.asteroids.push(asteroid);
    }

    pub(crate) fn push_projectile(&mut self, projectile: Projectile) {
        self.events.push(GameEvent::Spawned {
            id: projectile.body.id,
            kind: EntityKind::Projectile,
        });
        self.projectiles.push(projectile);
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn live_projectiles(&self) -> usize {
        self.projectiles.iter().filter(|p| p.body.alive).count()
    }

    /// Shape to draw for an entity
    pub fn shape_of(&self, id: EntityId) -> Option<&Shape> {
        if self.ship.body.id == id {
            return Some(&self.ship.body.shape);
        }
        if let Some(a) = self.asteroids.iter().find(|a| a.body.id == id) {
            return Some(&a.outline);
        }
        self.projectiles
            .iter()
            .find(|p| p.body.id == id)
            .map(|p| &p.body.shape)
    }

    /// Every body currently in the world: ship, asteroids, projectiles
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.ship.body)
            .chain(self.asteroids.iter().map(|a| &a.body))
            .chain(self.projectiles.iter().map(|p| &p.body))
    }

    /// Pose of every live entity, for the renderer
    pub fn poses(&self) -> impl Iterator<Item = (EntityId, Pose)> + '_ {
        self.bodies().filter(|b| b.alive).map(|b| (b.id, b.pose()))
    }

    /// HUD line
    pub fn hud_text(&self) -> String {
        format!("Points: {}", self.score)
    }
}
