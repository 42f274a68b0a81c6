//! Keyboard state and the input-source seam

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::{TickInput, World};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Fire,
}

/// Held/released map written by key handlers and read once per tick
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<Key, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.held.insert(key, false);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    /// Snapshot of the keys as tick controls
    pub fn to_input(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            fire: self.is_held(Key::Fire),
        }
    }
}

/// Anything that can say which controls are held this tick
pub trait InputSource {
    fn controls(&mut self, world: &World) -> TickInput;
}

impl InputSource for KeyState {
    fn controls(&mut self, _world: &World) -> TickInput {
        self.to_input()
    }
}

/// Fixed controls every tick
impl InputSource for TickInput {
    fn controls(&mut self, _world: &World) -> TickInput {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_are_released() {
        let keys = KeyState::new();
        assert_eq!(keys.to_input(), TickInput::default());
    }

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::new();
        keys.press(Key::Fire);
        keys.press(Key::Left);
        assert_eq!(
            keys.to_input(),
            TickInput {
                left: true,
                fire: true,
                ..Default::default()
            }
        );
        keys.release(Key::Fire);
        assert!(!keys.is_held(Key::Fire));
        assert!(keys.is_held(Key::Left));
    }
}
