use std::{fs::read_to_string, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;

use maze::{Cell, PartialMazeConfig, Walls};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file for the maze
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration file
    #[clap(flatten)]
    maze: PartialMazeConfig,
    /// Also print the maze on the terminal
    #[clap(long)]
    ascii: bool,
    /// Output file
    #[clap(short, long)]
    output: PathBuf,
}

const TILE_SIZE: u32 = 10;
const WALL_SIZE: u32 = 1;
const WALL_COLOR: [u8; 3] = [0, 0, 0];
const FLOOR_COLOR: [u8; 3] = [255, 255, 255];

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .env()
        .init()
        .context("While initializing logging")?;

    let Args {
        config,
        maze: overrides,
        ascii,
        output,
    } = Args::parse();
    let config: PartialMazeConfig = config
        .map(|path| {
            read_to_string(path)
                .context("Cannot read config file")
                .and_then(|s| toml::from_str(&s).context("Cannot parse config file"))
        })
        .transpose()
        .context("While loading configs")?
        .unwrap_or_default();
    let config = config.merge(overrides).or_defaults();

    let (maze, _) = config.generate().context("While generating the maze")?;
    if ascii {
        print!("{maze}");
    }

    let grid = maze.grid();
    let side = TILE_SIZE * grid.size() as u32;
    let mut image = image::RgbImage::from_pixel(side, side, image::Rgb(FLOOR_COLOR));
    for cell in grid.cells() {
        let Cell { row, col } = cell;
        let [top, left] = [row, col].map(|x| x as u32 * TILE_SIZE);
        let walls = maze.cell_walls(cell);
        for x in left..left + TILE_SIZE {
            for y in top..top + TILE_SIZE {
                let on_wall = (walls.contains(Walls::Top) && y < top + WALL_SIZE)
                    || (walls.contains(Walls::Bottom) && y >= top + TILE_SIZE - WALL_SIZE)
                    || (walls.contains(Walls::Left) && x < left + WALL_SIZE)
                    || (walls.contains(Walls::Right) && x >= left + TILE_SIZE - WALL_SIZE);
                // corners are always drawn, so the walls join up
                let on_corner = (x < left + WALL_SIZE || x >= left + TILE_SIZE - WALL_SIZE)
                    && (y < top + WALL_SIZE || y >= top + TILE_SIZE - WALL_SIZE);
                if on_wall || on_corner {
                    image[(x, y)].0 = WALL_COLOR;
                }
            }
        }
    }
    image.save(&output).context("While saving the image")?;
    log::info!("Maze saved to {}", output.display());
    Ok(())
}
