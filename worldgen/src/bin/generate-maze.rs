use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use maze::PartialMazeConfig;
use worldgen::{init_logging, pick_seed, sdf, FileConfig};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file, with `[maze]` and `[scatter]` tables
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration file
    #[clap(flatten)]
    maze: PartialMazeConfig,
    /// Output world file
    #[clap(short, long, default_value = "maze_world.world")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let Args {
        config,
        maze: overrides,
        output,
    } = Args::parse();

    let mut partial = FileConfig::load(config.as_deref())?.maze.merge(overrides);
    partial.seed = Some(pick_seed(partial.seed));
    let config = partial.or_defaults();

    let (maze, walls) = config.generate().context("While generating the maze")?;
    log::debug!("Generated maze:\n{maze}");
    fs::write(&output, sdf::maze_world(&walls))
        .with_context(|| format!("Cannot write {}", output.display()))?;
    log::info!(
        "Maze saved to {} ({} walls, seed {})",
        output.display(),
        walls.len(),
        config.seed
    );
    Ok(())
}
