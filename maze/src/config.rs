use clap::Parser;
use rand::SeedableRng;
use rand_wyrand::WyRand;
use serde::{Deserialize, Serialize};

use crate::{
    error::positive,
    geometry::{wall_segments, WallDims},
    prim,
    scatter::{scatter, Bounds, MAX_PRECISION},
    Error, FrontierKind, Grid, Maze, Point, Result, WallSegment,
};

/// Config for a maze
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Seed of the maze
    pub seed: u64,
    /// Number of cells on each side of the square grid
    pub grid_size: usize,
    /// Distance between the centers of adjacent cells
    pub cell_size: f64,
    /// Thickness of each wall
    pub wall_thickness: f64,
    /// Height of each wall
    pub wall_height: f64,
    /// Frontier behaviour of the generator
    pub frontier: FrontierKind,
}

impl Default for MazeConfig {
    fn default() -> Self {
        let dims = WallDims::default();
        Self {
            seed: 0,
            grid_size: 10,
            cell_size: dims.cell_size,
            wall_thickness: dims.thickness,
            wall_height: dims.height,
            frontier: FrontierKind::default(),
        }
    }
}

impl MazeConfig {
    #[must_use]
    pub const fn dims(&self) -> WallDims {
        WallDims {
            cell_size: self.cell_size,
            thickness: self.wall_thickness,
            height: self.wall_height,
        }
    }

    pub fn validate(&self) -> Result<()> {
        Grid::new(self.grid_size)?;
        self.dims().validate()
    }

    /// Generate the maze from the configured seed, with its wall segments
    pub fn generate(&self) -> Result<(Maze, Vec<WallSegment>)> {
        self.validate()?;
        let grid = Grid::new(self.grid_size)?;
        let mut rng = WyRand::seed_from_u64(self.seed);
        let maze = prim::generate(grid, self.frontier, &mut rng);
        let segments = wall_segments(&maze, &self.dims());
        Ok((maze, segments))
    }
}

/// Partial config for a maze
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Parser, Default)]
pub struct PartialMazeConfig {
    /// Seed of the maze
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of cells on each side of the square grid
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<usize>,
    /// Distance between the centers of adjacent cells
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<f64>,
    /// Thickness of each wall
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_thickness: Option<f64>,
    /// Height of each wall
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_height: Option<f64>,
    /// Frontier behaviour of the generator
    #[clap(long, value_enum)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontier: Option<FrontierKind>,
}

impl PartialMazeConfig {
    /// Merge two partial configs, `other` taking precedence
    pub fn merge(self, other: PartialMazeConfig) -> Self {
        Self {
            seed: other.seed.or(self.seed),
            grid_size: other.grid_size.or(self.grid_size),
            cell_size: other.cell_size.or(self.cell_size),
            wall_thickness: other.wall_thickness.or(self.wall_thickness),
            wall_height: other.wall_height.or(self.wall_height),
            frontier: other.frontier.or(self.frontier),
        }
    }

    pub fn or_defaults(self) -> MazeConfig {
        let default = MazeConfig::default();
        MazeConfig {
            seed: self.seed.unwrap_or(default.seed),
            grid_size: self.grid_size.unwrap_or(default.grid_size),
            cell_size: self.cell_size.unwrap_or(default.cell_size),
            wall_thickness: self.wall_thickness.unwrap_or(default.wall_thickness),
            wall_height: self.wall_height.unwrap_or(default.wall_height),
            frontier: self.frontier.unwrap_or(default.frontier),
        }
    }
}

/// Config for scattering points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Seed of the placement
    pub seed: u64,
    /// Number of points to place
    pub count: usize,
    /// Area the points are placed in
    pub bounds: Bounds,
    /// Minimum distance between any two points
    pub min_distance: f64,
    /// Decimals the coordinates are rounded to
    pub precision: u32,
    /// Candidates to draw before giving up
    pub max_attempts: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 3,
            bounds: Bounds::default(),
            min_distance: 0.5,
            precision: 2,
            max_attempts: 10_000,
        }
    }
}

impl ScatterConfig {
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        positive("min_distance", self.min_distance)?;
        if self.precision > MAX_PRECISION {
            return Err(Error::Precision(self.precision));
        }
        if self.max_attempts == 0 {
            return Err(Error::NoAttempts);
        }
        Ok(())
    }

    /// Scatter the points from the configured seed
    pub fn generate(&self) -> Result<Vec<Point>> {
        scatter(self, &mut WyRand::seed_from_u64(self.seed))
    }
}

/// Partial config for scattering points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Parser, Default)]
pub struct PartialScatterConfig {
    /// Seed of the placement
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of points to place
    #[clap(long, short = 'n')]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Lower bound on the x axis
    #[clap(long, allow_negative_numbers = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minx: Option<f64>,
    /// Upper bound on the x axis
    #[clap(long, allow_negative_numbers = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxx: Option<f64>,
    /// Lower bound on the y axis
    #[clap(long, allow_negative_numbers = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miny: Option<f64>,
    /// Upper bound on the y axis
    #[clap(long, allow_negative_numbers = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxy: Option<f64>,
    /// Minimum distance between any two points
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f64>,
    /// Decimals the coordinates are rounded to
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Candidates to draw before giving up
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u64>,
}

impl PartialScatterConfig {
    /// Merge two partial configs, `other` taking precedence
    pub fn merge(self, other: PartialScatterConfig) -> Self {
        Self {
            seed: other.seed.or(self.seed),
            count: other.count.or(self.count),
            minx: other.minx.or(self.minx),
            maxx: other.maxx.or(self.maxx),
            miny: other.miny.or(self.miny),
            maxy: other.maxy.or(self.maxy),
            min_distance: other.min_distance.or(self.min_distance),
            precision: other.precision.or(self.precision),
            max_attempts: other.max_attempts.or(self.max_attempts),
        }
    }

    pub fn or_defaults(self) -> ScatterConfig {
        let default = ScatterConfig::default();
        ScatterConfig {
            seed: self.seed.unwrap_or(default.seed),
            count: self.count.unwrap_or(default.count),
            bounds: Bounds {
                minx: self.minx.unwrap_or(default.bounds.minx),
                maxx: self.maxx.unwrap_or(default.bounds.maxx),
                miny: self.miny.unwrap_or(default.bounds.miny),
                maxy: self.maxy.unwrap_or(default.bounds.maxy),
            },
            min_distance: self.min_distance.unwrap_or(default.min_distance),
            precision: self.precision.unwrap_or(default.precision),
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_config_wins() {
        let file = PartialMazeConfig {
            seed: Some(1),
            grid_size: Some(5),
            ..Default::default()
        };
        let cli = PartialMazeConfig {
            grid_size: Some(8),
            wall_height: Some(2.),
            ..Default::default()
        };
        let config = file.merge(cli).or_defaults();
        assert_eq!(config.seed, 1);
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.wall_height, 2.);
        assert_eq!(config.cell_size, 0.5);
        assert_eq!(config.frontier, FrontierKind::Multiset);
    }

    #[test]
    fn empty_partial_gives_defaults() {
        assert_eq!(PartialMazeConfig::default().or_defaults(), MazeConfig::default());
        assert_eq!(
            PartialScatterConfig::default().or_defaults(),
            ScatterConfig::default()
        );
    }

    #[test]
    fn scatter_bounds_merge_per_side() {
        let file = PartialScatterConfig {
            minx: Some(-5.),
            maxx: Some(5.),
            ..Default::default()
        };
        let cli = PartialScatterConfig {
            maxx: Some(1.),
            count: Some(0),
            ..Default::default()
        };
        let config = file.merge(cli).or_defaults();
        assert_eq!(config.count, 0);
        assert_eq!(
            config.bounds,
            Bounds {
                minx: -5.,
                maxx: 1.,
                miny: -2.,
                maxy: 2.
            }
        );
    }

    #[test]
    fn invalid_maze_configs_are_rejected() {
        let zero = MazeConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert_eq!(zero.generate().unwrap_err(), Error::EmptyGrid);
        let negative = MazeConfig {
            cell_size: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(Error::NotPositive {
                name: "cell_size",
                ..
            })
        ));
    }

    #[test]
    fn invalid_scatter_configs_are_rejected() {
        let precise = ScatterConfig {
            precision: 16,
            ..Default::default()
        };
        assert_eq!(precise.validate(), Err(Error::Precision(16)));
        let hopeless = ScatterConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert_eq!(hopeless.generate(), Err(Error::NoAttempts));
    }

    #[test]
    fn configs_read_from_toml() {
        let config: MazeConfig = toml::from_str(
            r#"
            seed = 3
            grid_size = 4
            wall_height = 2.5
            frontier = "set"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.wall_height, 2.5);
        assert_eq!(config.cell_size, 0.5);
        assert_eq!(config.frontier, FrontierKind::Set);

        let partial: PartialScatterConfig = toml::from_str("count = 5\nminx = -1.0").unwrap();
        assert_eq!(partial.count, Some(5));
        assert_eq!(partial.minx, Some(-1.));
        assert_eq!(partial.maxx, None);
    }
}
