//! Demo-mode input: the computer flies the ship
//!
//! Steers toward the nearest asteroid, fires once roughly lined up, and
//! nudges forward when nothing is close.

use crate::sim::{TickInput, World};
use crate::{heading_to_unit, normalize_degrees};

use super::input::InputSource;

/// Aim tolerance for firing (degrees either side)
const FIRE_CONE: f32 = 10.0;
/// Keep drifting slowly when the nearest rock is further than this
const CRUISE_DISTANCE: f32 = 120.0;
const CRUISE_SPEED: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }
}

/// Signed heading difference in (-180, 180]
fn heading_delta(from: f32, to: f32) -> f32 {
    let d = normalize_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

impl InputSource for Autopilot {
    fn controls(&mut self, world: &World) -> TickInput {
        let ship = &world.ship.body;
        let Some(target) = world
            .asteroids
            .iter()
            .filter(|a| a.body.alive)
            .min_by(|a, b| {
                let da = a.body.pos.distance_squared(ship.pos);
                let db = b.body.pos.distance_squared(ship.pos);
                da.total_cmp(&db)
            })
        else {
            return TickInput::default();
        };

        let to_target = target.body.pos - ship.pos;
        let wanted = normalize_degrees(to_target.y.atan2(to_target.x).to_degrees());
        let delta = heading_delta(ship.heading, wanted);
        let half_step = world.ship.turn_step / 2.0;

        let cruising = to_target.length() > CRUISE_DISTANCE
            && ship.vel.dot(heading_to_unit(ship.heading)) < CRUISE_SPEED;

        TickInput {
            left: delta < -half_step,
            right: delta > half_step,
            up: cruising,
            fire: delta.abs() <= FIRE_CONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn empty_world() -> World {
        World::new(Settings {
            initial_asteroids: 0,
            spawn_chance: 0.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_idle_without_targets() {
        let world = empty_world();
        assert_eq!(Autopilot::new().controls(&world), TickInput::default());
    }

    #[test]
    fn test_turns_toward_and_fires_when_aligned() {
        let mut world = empty_world();
        // Straight below the ship: heading 90 is clockwise from 0
        world.add_asteroid_at(Vec2::new(150.0, 190.0), 0.0);
        let input = Autopilot::new().controls(&world);
        assert!(input.right && !input.left);
        assert!(!input.fire);

        world.ship.body.heading = 90.0;
        let input = Autopilot::new().controls(&world);
        assert!(!input.right && !input.left);
        assert!(input.fire);
    }

    #[test]
    fn test_heading_delta_wraps() {
        assert_eq!(heading_delta(350.0, 10.0), 20.0);
        assert_eq!(heading_delta(10.0, 350.0), -20.0);
        assert_eq!(heading_delta(0.0, 180.0), 180.0);
    }
}
