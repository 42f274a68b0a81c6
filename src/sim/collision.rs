//! Collision detection
//!
//! Every entity collides as a circle: asteroids and projectiles are circles,
//! the ship uses the circumcircle of its triangle. Touching counts as a hit.

use glam::Vec2;

use super::body::Body;

/// True iff two circles overlap or touch
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) <= reach * reach
}

/// Match projectiles to the asteroids they hit this tick
///
/// Read-only pass over both sets. Asteroids are visited in insertion order,
/// then projectiles in insertion order; the first live, unclaimed projectile
/// touching an asteroid claims it. Each asteroid and each projectile appears
/// in at most one pair. Returns `(asteroid_index, projectile_index)` pairs.
pub fn pair_hits<'a, A, P>(asteroids: A, projectiles: P) -> Vec<(usize, usize)>
where
    A: IntoIterator<Item = &'a Body>,
    P: IntoIterator<Item = &'a Body>,
{
    let projectiles: Vec<&Body> = projectiles.into_iter().collect();
    let mut claimed = vec![false; projectiles.len()];
    let mut pairs = Vec::new();

    for (ai, asteroid) in asteroids.into_iter().enumerate() {
        if !asteroid.alive {
            continue;
        }
        let hit = projectiles
            .iter()
            .enumerate()
            .find(|(pi, p)| !claimed[*pi] && p.alive && p.collides(asteroid));
        if let Some((pi, _)) = hit {
            claimed[pi] = true;
            pairs.push((ai, pi));
        }
    }

    pairs
}
