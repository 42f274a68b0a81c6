//! Fixed-step simulation tick
//!
//! One call advances the world by one logical frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::pair_hits;
use super::state::{Asteroid, GameEvent, GamePhase, Projectile, World};
use crate::wrap_position;

/// Controls held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Thrust
    pub up: bool,
    pub fire: bool,
}

impl TickInput {
    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Default::default()
        }
    }
}

/// Advance the world by one tick. Does nothing once the game is over.
pub fn tick(world: &mut World, input: &TickInput) {
    if world.is_over() {
        return;
    }
    world.time_ticks += 1;

    apply_controls(world, input);
    move_entities(world);

    let crash = world
        .asteroids
        .iter()
        .find(|a| world.ship.body.collides(&a.body))
        .map(|a| a.body.id);
    if let Some(asteroid) = crash {
        world.phase = GamePhase::GameOver;
        world.emit(GameEvent::ShipDestroyed { asteroid });
        log::info!(
            "Ship hit by asteroid {} at tick {}, final score {}",
            asteroid,
            world.time_ticks,
            world.score
        );
        return;
    }

    resolve_hits(world);
    cull(world);
    maybe_spawn(world);

    log::trace!(
        "tick {}: {} asteroids, {} projectiles, score {}",
        world.time_ticks,
        world.asteroids.len(),
        world.projectiles.len(),
        world.score
    );
}

fn apply_controls(world: &mut World, input: &TickInput) {
    if input.left {
        world.ship.turn_left();
    }
    if input.right {
        world.ship.turn_right();
    }
    if input.up {
        world.ship.accelerate();
    }
    // Held fire shoots every tick until the cap; extra shots are dropped
    if input.fire && world.live_projectiles() < world.settings.max_projectiles {
        let id = world.next_entity_id();
        let projectile = Projectile::new(id, &world.ship.body, &world.settings);
        world.push_projectile(projectile);
    }
}

fn move_entities(world: &mut World) {
    let bounds = world.bounds();
    world.ship.body.advance(Some(bounds));
    for asteroid in &mut world.asteroids {
        asteroid.body.advance(Some(bounds));
        asteroid.apply_spin();
    }
    // Projectiles are never wrapped
    for projectile in &mut world.projectiles {
        projectile.body.advance(None);
    }
}

/// Mark phase: pair up hits read-only, then flip flags and score
fn resolve_hits(world: &mut World) {
    let pairs = pair_hits(
        world.asteroids.iter().map(|a| &a.body),
        world.projectiles.iter().map(|p| &p.body),
    );

    for (ai, pi) in pairs {
        world.asteroids[ai].body.kill();
        world.projectiles[pi].body.kill();
        world.score += world.settings.points_per_kill;
        world.kills += 1;

        let asteroid = world.asteroids[ai].body.id;
        let projectile = world.projectiles[pi].body.id;
        log::debug!("Asteroid {} destroyed by {}, score {}", asteroid, projectile, world.score);
        world.emit(GameEvent::AsteroidDestroyed {
            asteroid,
            projectile,
            score: world.score,
        });
    }
}

/// Sweep phase: drop everything not alive
fn cull(world: &mut World) {
    if world.settings.cull_offscreen_projectiles {
        let bounds = world.bounds();
        for projectile in &mut world.projectiles {
            if !in_bounds(projectile.body.pos, bounds) {
                projectile.body.kill();
            }
        }
    }

    let mut removed = Vec::new();
    world.projectiles.retain(|p| {
        if !p.body.alive {
            removed.push(p.body.id);
        }
        p.body.alive
    });
    world.asteroids.retain(|a| {
        if !a.body.alive {
            removed.push(a.body.id);
        }
        a.body.alive
    });

    for id in removed {
        world.emit(GameEvent::Despawned { id });
    }
}

fn in_bounds(pos: Vec2, bounds: Vec2) -> bool {
    pos.x >= 0.0 && pos.x < bounds.x && pos.y >= 0.0 && pos.y < bounds.y
}

/// Maybe drop a new asteroid in at the bottom-right corner
///
/// The candidate sits at (W, H), which lands on (0, 0) once wrapped. It is
/// discarded if the ship touches it at either spot.
fn maybe_spawn(world: &mut World) {
    let roll: f64 = world.rng.random();
    if roll >= world.settings.spawn_chance {
        return;
    }

    let corner = world.bounds();
    let id = world.next_entity_id();
    let mut candidate = Asteroid::new(id, corner, &world.settings, &mut world.rng);

    if world.ship.body.collides(&candidate.body) {
        log::debug!("Spawn of {} rejected: ship at the corner", id);
        return;
    }
    candidate.body.pos = wrap_position(corner, corner);
    if world.ship.body.collides(&candidate.body) {
        log::debug!("Spawn of {} rejected: ship at the wrapped corner", id);
        return;
    }

    log::debug!("Spawned asteroid {} heading {:.1}", id, candidate.body.heading);
    world.push_asteroid(candidate);
}
