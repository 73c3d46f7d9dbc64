//! SpawnDestroy headless session runner.
//!
//! Runs the gameplay module without a window using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for the INI configuration
//! - a JSON input script standing in for the player's devices
//!
//! # Main Loop
//!
//! 1. Load configuration, montage definitions and the input script
//! 2. Build the ECS world, register observers and run the game mode setup
//! 3. Step the frame schedule at a fixed delta for the configured frames:
//!    - Apply scripted input and trigger action edges
//!    - Apply look and movement axes, integrate movement
//!    - Advance montages; finished attacks re-arm while the button is held
//! 4. Log a summary of the final world
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --input session.json --frames 300
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use spawndestroy::components::actorclass::ActorClass;
use spawndestroy::components::attack::AttackState;
use spawndestroy::components::worldposition::WorldPosition;
use spawndestroy::game;
use spawndestroy::resources::gameconfig::GameConfig;
use spawndestroy::resources::inputfeed::InputFeed;
use spawndestroy::resources::montagestore::MontageStore;
use spawndestroy::resources::spawnregistry::SpawnRegistry;
use spawndestroy::systems::time::update_world_time;

/// SpawnDestroy headless gameplay session
#[derive(Parser)]
#[command(version, about = "Runs the spawn/destroy melee gameplay module headless.")]
struct Cli {
    /// INI configuration file. Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON input script to drive the player.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON montage definitions added to the built-in ones.
    #[arg(long, value_name = "PATH")]
    montages: Option<PathBuf>,

    /// Number of frames to run, overriding the configuration.
    #[arg(long)]
    frames: Option<u32>,

    /// RNG seed, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Early-exit: write configuration and quit
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut montages = MontageStore::default();
    if let Some(path) = &cli.montages {
        match montages.extend_from_file(path) {
            Ok(n) => info!("Loaded {} montage definitions from {:?}", n, path),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let feed = match &cli.input {
        Some(path) => match InputFeed::load_from_file(path) {
            Ok(feed) => feed,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => InputFeed::default(),
    };
    info!("Input script: {} samples", feed.len());

    let frames = config.frames;
    let dt = config.fixed_delta;

    // --------------- ECS world + session ---------------
    let mut world = game::build_world(config, montages, feed);
    if let Err(e) = game::start_session(&mut world) {
        error!("{}", e);
        std::process::exit(1);
    }

    let mut update = game::build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    for _ in 0..frames {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    // --------------- Summary ---------------
    if !world.resource::<InputFeed>().is_finished() {
        warn!("Session ended before the input script did; remaining samples were not played");
    }
    let registry = world.resource::<SpawnRegistry>();
    let props = registry.count(ActorClass::SpawnableProp);
    let pawn = registry.find_first(ActorClass::Pawn);
    info!("Ran {} frames; {} props in the world", frames, props);
    if let Some(pawn) = pawn {
        if let Some(position) = world.get::<WorldPosition>(pawn) {
            info!("Pawn {:?} ended at {:?}", pawn, position.pos);
        }
        if let Some(attack) = world.get::<AttackState>(pawn) {
            info!(
                "Pawn attacking={} clicking={}",
                attack.is_attacking, attack.is_clicking
            );
        }
    }
}
