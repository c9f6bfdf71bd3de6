//! Conversion of a maze into wall segments in world coordinates
//!
//! The maze is centered on the origin: column grows along `x`, row along `y`.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::{error::positive, Cell, Grid, Maze, Result, Side};

/// Yaw of a segment extending along the `x` axis
pub const ALONG_X: f64 = 0.;
/// Yaw of a segment extending along the `y` axis
pub const ALONG_Y: f64 = FRAC_PI_2;

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline(always)]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance
    /// ```
    /// use maze::Point;
    ///
    /// assert_eq!(Point::new(0., 0.).distance(&Point::new(3., 4.)), 5.);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline(always)]
    #[must_use]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2., (self.y + other.y) / 2.)
    }
}

/// A straight wall, ready to be placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Center of the segment
    pub position: Point,
    pub length: f64,
    /// Yaw, either [`ALONG_X`] or [`ALONG_Y`]
    pub orientation: f64,
    pub thickness: f64,
    pub height: f64,
}

/// Physical size of the maze walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallDims {
    /// Distance between the centers of adjacent cells
    pub cell_size: f64,
    pub thickness: f64,
    pub height: f64,
}

impl Default for WallDims {
    fn default() -> Self {
        Self {
            cell_size: 0.5,
            thickness: 0.1,
            height: 1.,
        }
    }
}

impl WallDims {
    pub fn validate(&self) -> Result<()> {
        positive("cell_size", self.cell_size)?;
        positive("wall_thickness", self.thickness)?;
        positive("wall_height", self.height)?;
        Ok(())
    }

    /// World position of the center of a cell
    /// ```
    /// use maze::{Cell, Grid, Point, WallDims};
    ///
    /// let dims = WallDims::default();
    /// let grid = Grid::new(10).unwrap();
    /// assert_eq!(dims.cell_center(grid, Cell::new(0, 0)), Point::new(-2.25, -2.25));
    /// assert_eq!(dims.cell_center(grid, Cell::new(9, 5)), Point::new(0.25, 2.25));
    /// ```
    #[must_use]
    pub fn cell_center(&self, grid: Grid, cell: Cell) -> Point {
        debug_assert!(grid.contains(&cell));
        let half = grid.size() as f64 / 2.;
        Point::new(
            (cell.col as f64 - half) * self.cell_size + self.cell_size / 2.,
            (cell.row as f64 - half) * self.cell_size + self.cell_size / 2.,
        )
    }
}

/// Build the segments for every standing wall, then the four boundary walls
///
/// Internal walls come in the order of [`Maze::walls`]. The boundary follows
/// as bottom, top, left, right.
#[must_use]
pub fn wall_segments(maze: &Maze, dims: &WallDims) -> Vec<WallSegment> {
    let grid = maze.grid();
    let segment = |position: Point, length: f64, orientation: f64| WallSegment {
        position,
        length,
        orientation,
        thickness: dims.thickness,
        height: dims.height,
    };

    let mut segments: Vec<_> = maze
        .present_walls()
        .map(|wall| {
            let [a, b] = wall.cells();
            let position = dims
                .cell_center(grid, a)
                .midpoint(&dims.cell_center(grid, b));
            let orientation = match wall.side() {
                Side::Vertical => ALONG_Y,
                Side::Horizontal => ALONG_X,
            };
            log::trace!("{wall:?}: Placed at {position:?}");
            segment(position, dims.cell_size, orientation)
        })
        .collect();

    let half = grid.size() as f64 / 2. * dims.cell_size;
    let total = grid.size() as f64 * dims.cell_size;
    segments.extend([
        segment(Point::new(0., -half), total, ALONG_X),
        segment(Point::new(0., half), total, ALONG_X),
        segment(Point::new(-half, 0.), total, ALONG_Y),
        segment(Point::new(half, 0.), total, ALONG_Y),
    ]);
    log::debug!("{grid:?}: Emitted {} wall segments", segments.len());
    segments
}
