//! Game loop driver
//!
//! Per frame: read controls, tick the world once, then bring the renderer in
//! line with what happened. The loop stops ticking after the ship dies but
//! leaves the final scene attached.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::platform::{Clock, InputSource};
use crate::renderer::Renderer;
use crate::sim::{EntityId, GameEvent, World, tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct GameLoop<R: Renderer> {
    pub world: World,
    pub renderer: R,
    state: LoopState,
    frames: u64,
    last_score: Option<u64>,
    attached: HashSet<EntityId>,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(world: World, renderer: R) -> Self {
        Self {
            world,
            renderer,
            state: LoopState::Running,
            frames: 0,
            last_score: None,
            attached: HashSet::new(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames that actually ticked the world
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Attach whatever the world spawned before the first frame
    pub fn start(&mut self) -> Result<()> {
        self.sync()
    }

    /// One clock callback
    pub fn frame(&mut self, input: &mut dyn InputSource) -> Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let controls = input.controls(&self.world);
        tick(&mut self.world, &controls);
        self.frames += 1;
        self.sync()?;

        if self.world.is_over() {
            log::info!(
                "Game over after {} frames: {}",
                self.frames,
                self.world.hud_text()
            );
            self.state = LoopState::Terminated;
        }
        Ok(self.state)
    }

    /// Drive frames off `clock` until the ship dies or `max_frames` run out
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        max_frames: u64,
    ) -> Result<LoopState> {
        self.start()?;
        while self.state == LoopState::Running && self.frames < max_frames {
            clock.wait_tick();
            self.frame(input)?;
        }
        Ok(self.state)
    }

    /// Forward queued world events and current poses to the renderer
    fn sync(&mut self) -> Result<()> {
        for event in self.world.drain_events() {
            match event {
                GameEvent::Spawned { id, .. } => {
                    // Born and culled within the same tick: nothing to draw
                    let Some(body) = self.world.bodies().find(|b| b.id == id) else {
                        continue;
                    };
                    let pose = body.pose();
                    let shape = self
                        .world
                        .shape_of(id)
                        .ok_or_else(|| Error::Render(format!("no shape for entity {id}")))?;
                    self.renderer.attach(id, shape, pose)?;
                    self.attached.insert(id);
                }
                GameEvent::Despawned { id } => {
                    if self.attached.remove(&id) {
                        self.renderer.detach(id)?;
                    }
                }
                GameEvent::AsteroidDestroyed { .. } | GameEvent::ShipDestroyed { .. } => {}
            }
        }

        for (id, pose) in self.world.poses() {
            self.renderer.set_pose(id, pose)?;
        }

        if self.last_score != Some(self.world.score) {
            self.renderer.set_hud_text(&self.world.hud_text())?;
            self.last_score = Some(self.world.score);
        }
        Ok(())
    }
}
