//! Asteroids! entry point
//!
//! Runs a headless demo session: the autopilot flies the ship while the
//! in-memory renderer tracks the scene. Set `ASTEROIDS_REALTIME=1` to pace
//! frames at 60 Hz instead of running flat out.

use serde::Serialize;

use asteroids::consts::{TICK_RATE_HZ, WINDOW_TITLE};
use asteroids::platform::{Autopilot, Clock, FixedRateClock, ManualClock};
use asteroids::renderer::HeadlessRenderer;
use asteroids::sim::World;
use asteroids::{GameLoop, LoopState, Settings};

const DEFAULT_MAX_FRAMES: u64 = 3600;

#[derive(Debug, Serialize)]
struct Summary {
    frames: u64,
    score: u64,
    kills: u64,
    asteroids: usize,
    game_over: bool,
}

fn max_frames() -> u64 {
    std::env::var("ASTEROIDS_MAX_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES)
}

fn realtime() -> bool {
    std::env::var("ASTEROIDS_REALTIME").is_ok_and(|v| v == "1")
}

fn run() -> asteroids::Result<Summary> {
    let settings = Settings::load()?;
    log::info!(
        "{} ({} rules) starting: {}x{}, seed {}",
        WINDOW_TITLE,
        settings.ruleset.as_str(),
        settings.width,
        settings.height,
        settings.seed
    );

    let world = World::new(settings);
    let mut game = GameLoop::new(world, HeadlessRenderer::new());
    let mut pilot = Autopilot::new();
    let mut clock: Box<dyn Clock> = if realtime() {
        Box::new(FixedRateClock::new(TICK_RATE_HZ))
    } else {
        Box::new(ManualClock::default())
    };

    let state = game.run(&mut pilot, clock.as_mut(), max_frames())?;
    println!("{}", game.renderer.hud_text());

    Ok(Summary {
        frames: game.frames(),
        score: game.world.score,
        kills: game.world.kills,
        asteroids: game.world.asteroids.len(),
        game_over: state == LoopState::Terminated,
    })
}

fn main() {
    env_logger::init();

    match run() {
        Ok(summary) => match serde_json::to_string(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("Could not encode summary: {e}"),
        },
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
