//! Arena Shooter headless demo
//!
//! Runs the autopilot against the simulation at a fixed 60 Hz frame time and
//! prints the final world snapshot as JSON. Rendering is left to frontends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use arena_shooter::consts::DEMO_DT;
use arena_shooter::sim::{Autopilot, AutopilotConfig, GameEvent, World, tick};
use arena_shooter::{CameraFollow, Tuning};

#[derive(Parser, Debug)]
#[command(name = "arena-shooter")]
#[command(about = "Headless autopilot run of the arena shooter simulation")]
struct Cli {
    /// Tuning JSON overriding the default balance values
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Seed for the autopilot's aim jitter
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many frames (60 per simulated second)
    #[arg(long, default_value_t = 60 * 120)]
    frames: u64,
    /// Stop after this many finished rounds
    #[arg(long, default_value_t = 3)]
    rounds: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    log::info!("Arena Shooter (headless) starting with seed {}", args.seed);

    let mut world = World::new(&tuning);
    let mut camera = CameraFollow::default();
    camera.smoothing = tuning.camera_smoothing;
    let mut bot = Autopilot::new(args.seed, AutopilotConfig::default());

    let mut wins = 0u32;
    let mut deaths = 0u32;
    let mut frame = 0u64;
    while frame < args.frames && wins + deaths < args.rounds {
        let mut input = bot.next_input(&world, DEMO_DT);
        for event in tick(&mut world, &mut input, DEMO_DT) {
            match event {
                GameEvent::GameWon => {
                    wins += 1;
                    log::info!("Round won at frame {frame}");
                }
                GameEvent::PlayerKilled => {
                    deaths += 1;
                    log::info!("Round lost at frame {frame}");
                }
                _ => {}
            }
        }
        camera.follow(world.player.position, DEMO_DT);
        frame += 1;
    }

    log::info!(
        "Finished after {} frames: {} won, {} lost, {} bullets recycled, camera at {:?}",
        frame,
        wins,
        deaths,
        world.bullets.recycled(),
        camera.target
    );

    let json = serde_json::to_string_pretty(&world.snapshot())?;
    println!("{json}");
    Ok(())
}
