//! Game settings and tuning
//!
//! Loaded from a JSON file named by `ASTEROIDS_SETTINGS`; every field falls
//! back to its default when missing.

use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "ASTEROIDS_SETTINGS";
/// Environment variable overriding the ruleset
pub const RULESET_ENV: &str = "ASTEROIDS_RULESET";

/// Smallest accepted world width or height
const MIN_WORLD_EXTENT: f32 = 1.0;

/// Rule presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Ruleset {
    /// No speed cap, and stray shots live forever
    Classic,
    /// Capped ship speed, stray shots culled when they leave the world
    #[default]
    Arcade,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "Classic",
            Ruleset::Arcade => "Arcade",
        }
    }

    /// Ship speed cap for this preset
    pub fn max_ship_speed(&self) -> Option<f32> {
        match self {
            Ruleset::Classic => None,
            Ruleset::Arcade => Some(MAX_SHIP_SPEED),
        }
    }

    /// Whether projectiles leaving the world are removed
    pub fn cull_offscreen_projectiles(&self) -> bool {
        match self {
            Ruleset::Classic => false,
            Ruleset::Arcade => true,
        }
    }
}

impl FromStr for Ruleset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Ruleset::Classic),
            "arcade" => Ok(Ruleset::Arcade),
            _ => Err(Error::InvalidSettings(format!("unknown ruleset {s:?}"))),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the toggles below were derived from
    pub ruleset: Ruleset,

    // === World ===
    pub width: f32,
    pub height: f32,
    /// RNG seed for asteroid placement, headings and spawn rolls
    pub seed: u64,

    // === Asteroids ===
    pub initial_asteroids: usize,
    pub asteroid_radius: f32,
    pub asteroid_speed: f32,
    pub max_asteroid_spin: f32,
    /// Per-tick spawn probability (0.0 - 1.0)
    pub spawn_chance: f64,

    // === Ship ===
    pub ship_radius: f32,
    pub turn_step: f32,
    pub thrust: f32,
    /// `None` leaves ship speed unbounded
    pub max_ship_speed: Option<f32>,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    pub max_projectiles: usize,
    pub cull_offscreen_projectiles: bool,

    // === Scoring ===
    pub points_per_kill: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let ruleset = Ruleset::default();
        Self {
            ruleset,

            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            seed: 0,

            initial_asteroids: INITIAL_ASTEROIDS,
            asteroid_radius: ASTEROID_RADIUS,
            asteroid_speed: ASTEROID_SPEED,
            max_asteroid_spin: MAX_ASTEROID_SPIN,
            spawn_chance: SPAWN_CHANCE,

            ship_radius: SHIP_RADIUS,
            turn_step: TURN_STEP,
            thrust: THRUST,
            max_ship_speed: ruleset.max_ship_speed(),

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            max_projectiles: MAX_PROJECTILES,
            cull_offscreen_projectiles: ruleset.cull_offscreen_projectiles(),

            points_per_kill: POINTS_PER_KILL,
        }
    }
}

impl Settings {
    /// Create settings from a ruleset (applies preset defaults)
    pub fn from_ruleset(ruleset: Ruleset) -> Self {
        let mut settings = Self::default();
        settings.apply_ruleset(ruleset);
        settings
    }

    /// Apply a ruleset (updates ruleset-dependent toggles)
    pub fn apply_ruleset(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
        self.max_ship_speed = ruleset.max_ship_speed();
        self.cull_offscreen_projectiles = ruleset.cull_offscreen_projectiles();
    }

    /// World size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check ranges that would break the simulation
    pub fn validate(&self) -> Result<()> {
        if !(self.width >= MIN_WORLD_EXTENT && self.height >= MIN_WORLD_EXTENT)
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(Error::InvalidSettings(format!(
                "world size must be at least {MIN_WORLD_EXTENT} in each direction, got {}x{}",
                self.width, self.height
            )));
        }
        let rates = [
            ("asteroid_speed", self.asteroid_speed),
            ("max_asteroid_spin", self.max_asteroid_spin),
            ("turn_step", self.turn_step),
            ("thrust", self.thrust),
            ("projectile_speed", self.projectile_speed),
        ];
        for (name, v) in rates {
            if !v.is_finite() {
                return Err(Error::InvalidSettings(format!("{name} must be finite, got {v}")));
            }
        }
        let radii = [
            ("asteroid_radius", self.asteroid_radius),
            ("ship_radius", self.ship_radius),
            ("projectile_radius", self.projectile_radius),
        ];
        for (name, r) in radii {
            if !(r >= 0.0 && r.is_finite()) {
                return Err(Error::InvalidSettings(format!("{name} must be >= 0, got {r}")));
            }
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(Error::InvalidSettings(format!(
                "spawn_chance must be within [0, 1], got {}",
                self.spawn_chance
            )));
        }
        if let Some(cap) = self.max_ship_speed {
            if !(cap > 0.0 && cap.is_finite()) {
                return Err(Error::InvalidSettings(format!(
                    "max_ship_speed must be positive, got {cap}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    ///
    /// The named ruleset supplies `max_ship_speed` and
    /// `cull_offscreen_projectiles` unless the file sets them itself.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_speed_cap = value.get("max_ship_speed").is_some();
        let has_cull = value.get("cull_offscreen_projectiles").is_some();

        let mut settings: Settings = serde_json::from_value(value)?;
        let ruleset = settings.ruleset;
        if !has_speed_cap {
            settings.max_ship_speed = ruleset.max_ship_speed();
        }
        if !has_cull {
            settings.cull_offscreen_projectiles = ruleset.cull_offscreen_projectiles();
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `ASTEROIDS_SETTINGS`, or defaults when
    /// unset. `ASTEROIDS_RULESET` then replaces the ruleset and its toggles.
    pub fn load() -> Result<Self> {
        let mut settings = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let settings = Self::load_from_file(&path)?;
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        if let Ok(name) = std::env::var(RULESET_ENV) {
            let ruleset: Ruleset = name.parse()?;
            log::info!("Ruleset overridden to {}", ruleset.as_str());
            settings.apply_ruleset(ruleset);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_dimensions() {
        let s = Settings::default();
        assert_eq!(s.bounds(), Vec2::new(300.0, 200.0));
        assert_eq!(s.initial_asteroids, 5);
        assert_eq!(s.max_projectiles, 3);
        assert_eq!(s.points_per_kill, 1000);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_ruleset_toggles() {
        let classic = Settings::from_ruleset(Ruleset::Classic);
        assert_eq!(classic.max_ship_speed, None);
        assert!(!classic.cull_offscreen_projectiles);

        let arcade = Settings::from_ruleset(Ruleset::Arcade);
        assert_eq!(arcade.max_ship_speed, Some(MAX_SHIP_SPEED));
        assert!(arcade.cull_offscreen_projectiles);

        assert_eq!("CLASSIC".parse::<Ruleset>().unwrap(), Ruleset::Classic);
        assert!(matches!("nope".parse::<Ruleset>(), Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn test_ruleset_from_json() {
        let classic = Settings::from_json(r#"{ "ruleset": "Classic" }"#).unwrap();
        assert_eq!(classic.ruleset, Ruleset::Classic);
        assert_eq!(classic.max_ship_speed, None);
        assert!(!classic.cull_offscreen_projectiles);

        // Explicit toggles win over the preset
        let tuned = Settings::from_json(
            r#"{ "ruleset": "Classic", "max_ship_speed": 2.0, "cull_offscreen_projectiles": true }"#,
        )
        .unwrap();
        assert_eq!(tuned.max_ship_speed, Some(2.0));
        assert!(tuned.cull_offscreen_projectiles);

        let uncapped = Settings::from_json(r#"{ "max_ship_speed": null }"#).unwrap();
        assert_eq!(uncapped.ruleset, Ruleset::Arcade);
        assert_eq!(uncapped.max_ship_speed, None);
        assert!(uncapped.cull_offscreen_projectiles);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "width": 640.0, "seed": 7 }"#).unwrap();
        assert_eq!(s.width, 640.0);
        assert_eq!(s.height, WORLD_HEIGHT);
        assert_eq!(s.seed, 7);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "width": 0.0 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "spawn_chance": 1.5 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(Settings::from_json("{ not json"), Err(Error::Settings(_))));
    }

    #[test]
    fn test_degenerate_world_and_rates_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "width": 1e-45 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "height": 0.5 }"#),
            Err(Error::InvalidSettings(_))
        ));

        let mut s = Settings::default();
        s.thrust = f32::NAN;
        assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));

        let mut s = Settings::default();
        s.projectile_speed = f32::INFINITY;
        assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));

        let mut s = Settings::default();
        s.width = f32::INFINITY;
        assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));
    }
}
