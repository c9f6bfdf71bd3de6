//! Procedural generation of maze worlds
//!
//! Two independent generators, both driven by an explicit random source:
//! - [`prim::generate`] builds a spanning-tree maze over a square grid, that
//!   [`geometry::wall_segments`] turns into walls in world coordinates;
//! - [`scatter::scatter`] places points inside a rectangle, keeping them apart.
//!
//! [`MazeConfig`] and [`ScatterConfig`] bundle the parameters with a seed.

mod error;
pub use error::{Error, Result};

pub mod grid;
pub use grid::{Cell, Grid, Side, Wall};

mod walls;
pub use walls::{Maze, Walls};

pub mod prim;
pub use prim::FrontierKind;

pub mod geometry;
pub use geometry::{Point, WallDims, WallSegment};

pub mod scatter;
pub use scatter::Bounds;

pub mod config;
pub use config::{MazeConfig, PartialMazeConfig, PartialScatterConfig, ScatterConfig};

pub use rand_wyrand::WyRand;
