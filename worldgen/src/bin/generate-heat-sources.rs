use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use maze::PartialScatterConfig;
use worldgen::{init_logging, pick_seed, sdf, FileConfig};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file, with `[maze]` and `[scatter]` tables
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration file
    #[clap(flatten)]
    scatter: PartialScatterConfig,
    /// World to add the heat sources to
    #[clap(short, long, default_value = "prim_maze_world.world")]
    input: PathBuf,
    /// Output world file
    #[clap(short, long, default_value = "prim_maze_world_with_heat.world")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let Args {
        config,
        scatter: overrides,
        input,
        output,
    } = Args::parse();

    let mut partial = FileConfig::load(config.as_deref())?.scatter.merge(overrides);
    partial.seed = Some(pick_seed(partial.seed));
    let config = partial.or_defaults();

    let world = fs::read_to_string(&input)
        .with_context(|| format!("Cannot read {}", input.display()))?;
    let positions = config
        .generate()
        .context("While placing the heat sources")?;
    let blocks: Vec<_> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| sdf::heat_source_model(i, *p, config.precision as usize))
        .collect();
    let world = sdf::insert_before_world_end(&world, &blocks)
        .with_context(|| format!("Cannot add heat sources to {}", input.display()))?;
    fs::write(&output, world).with_context(|| format!("Cannot write {}", output.display()))?;

    log::info!(
        "{} heat sources generated at: {:?}",
        positions.len(),
        positions.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>()
    );
    log::info!("Updated world saved at: {}", output.display());
    Ok(())
}
