//! # Gloomway Diagnostic CLI
//!
//! Generates a dungeon from command-line parameters and prints the
//! plain-text grid plus a short world summary. Interactive play, rendering
//! and command parsing belong to UI collaborators, not to this binary.

use clap::Parser;
use gloomway::{Dungeon, DungeonConfig, GloomwayResult, SeededRandom};
use log::info;

/// Command line arguments mirroring the engine's constructor parameters.
#[derive(Parser, Debug)]
#[command(name = "gloomway")]
#[command(about = "A turn-based dungeon crawl engine with procedural maze generation")]
#[command(version)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 6)]
    cols: usize,

    /// Edges added beyond the spanning tree
    #[arg(short, long, default_value_t = 2)]
    interconnectivity: usize,

    /// Connect border cells to the opposite border
    #[arg(short, long)]
    wrapping: bool,

    /// Percentage of caves stocked with treasure and cells with arrows
    #[arg(short, long, default_value_t = 25.0)]
    percentage: f64,

    /// Player name
    #[arg(short, long, default_value = "Explorer")]
    name: String,

    /// Total number of otyughs, destination garrison included
    #[arg(short, long, default_value_t = 1)]
    monsters: usize,

    /// Random seed for a reproducible world
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> GloomwayResult<()> {
    env_logger::init();
    let args = Args::parse();

    let rand = match args.seed {
        Some(seed) => {
            info!("generating from seed {}", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SeededRandom::from_entropy()),
    };

    let config = DungeonConfig::new(
        args.rows,
        args.cols,
        args.interconnectivity,
        args.wrapping,
        args.percentage,
        args.name,
        args.monsters,
    );
    let dungeon = Dungeon::new(&config, rand)?;

    println!("{}", dungeon);

    let start = dungeon.start_cell();
    let end = dungeon.destination_cell();
    println!(
        "{} enters at ({}, {}) carrying {} arrows.",
        dungeon.player().name(),
        start.coordinate().row(),
        start.coordinate().col(),
        dungeon.player().arrows(),
    );
    println!(
        "The destination cave waits at ({}, {}), {} moves away, guarded by an otyugh.",
        end.coordinate().row(),
        end.coordinate().col(),
        dungeon
            .distance_between(start.id(), end.id())
            .unwrap_or_default(),
    );
    println!("Scent at the start cave: {}", start.scent());

    Ok(())
}
