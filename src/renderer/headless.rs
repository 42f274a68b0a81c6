//! In-memory scene used by the headless binary and the tests

use std::collections::HashMap;

use serde::Serialize;

use super::Renderer;
use crate::error::{Error, Result};
use crate::sim::{EntityId, Pose, Shape};

/// One attached entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawable {
    pub shape: Shape,
    pub pose: Pose,
}

/// Scene kept in a map keyed by entity id
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    scene: HashMap<EntityId, Drawable>,
    hud_text: String,
    /// Total attach calls, including drawables since detached
    pub attached_total: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntityId) -> Option<&Drawable> {
        self.scene.get(&id)
    }

    pub fn len(&self) -> usize {
        self.scene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.scene.keys().copied()
    }

    pub fn hud_text(&self) -> &str {
        &self.hud_text
    }
}

impl Renderer for HeadlessRenderer {
    fn attach(&mut self, id: EntityId, shape: &Shape, pose: Pose) -> Result<()> {
        if self.scene.contains_key(&id) {
            return Err(Error::Render(format!("entity {id} attached twice")));
        }
        self.scene.insert(
            id,
            Drawable {
                shape: shape.clone(),
                pose,
            },
        );
        self.attached_total += 1;
        Ok(())
    }

    fn set_pose(&mut self, id: EntityId, pose: Pose) -> Result<()> {
        let drawable = self
            .scene
            .get_mut(&id)
            .ok_or_else(|| Error::Render(format!("set_pose on unknown entity {id}")))?;
        drawable.pose = pose;
        Ok(())
    }

    fn detach(&mut self, id: EntityId) -> Result<()> {
        self.scene
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::Render(format!("detach of unknown entity {id}")))
    }

    fn set_hud_text(&mut self, text: &str) -> Result<()> {
        if self.hud_text != text {
            log::info!("{text}");
            self.hud_text = text.to_string();
        }
        Ok(())
    }
}
