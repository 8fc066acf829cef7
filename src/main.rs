//! Star Skirmish entry point
//!
//! Runs the frame loop headless with the autopilot at the controls.

use std::path::PathBuf;

use clap::Parser;

use star_skirmish::autopilot::Autopilot;
use star_skirmish::renderer::collect_instances;
use star_skirmish::sim::GameEvent;
use star_skirmish::{Tuning, World};

#[derive(Parser)]
#[command(name = "star-skirmish", about = "Headless Star Skirmish demo run")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "600")]
    frames: u64,

    /// RNG seed for the autopilot
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Fire once every N frames (0 disables firing)
    #[arg(long, default_value = "20")]
    fire_every: u64,

    /// JSON tuning file overriding the default balance
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// Print the final game state as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    log::info!("Star Skirmish (headless) starting...");

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut world = World::new(tuning);
    let mut pilot = Autopilot::new(cli.seed, cli.fire_every);

    for _ in 0..cli.frames {
        let input = pilot.next_input(&world);
        let report = world.frame(&input);

        for event in &report.events {
            match event {
                GameEvent::EnemyDestroyed { id, pos } => {
                    log::info!("Frame {}: enemy {} destroyed at {:?}", report.frame, id, pos)
                }
                GameEvent::EnemyEscaped { id } => {
                    log::info!("Frame {}: enemy {} escaped", report.frame, id)
                }
                other => log::debug!("Frame {}: {:?}", report.frame, other),
            }
        }

        log::trace!(
            "Frame {}: {} instances",
            report.frame,
            collect_instances(&world).len()
        );
    }

    println!(
        "frames={} score={} enemies={} lasers={}",
        world.frame_count(),
        world.score(),
        world.game.enemies.len(),
        world.game.lasers.len()
    );

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&world.game)?);
    }

    Ok(())
}
