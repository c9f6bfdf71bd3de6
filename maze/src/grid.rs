use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell of the grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline(always)]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Which pair of neighbours a wall separates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Separates `(r, c)` from `(r, c + 1)`
    Vertical,
    /// Separates `(r, c)` from `(r + 1, c)`
    Horizontal,
}

/// An undirected wall between two adjacent cells
///
/// The lower cell is always stored first, so two walls compare equal
/// whatever order their cells were given in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    a: Cell,
    b: Cell,
}

impl Wall {
    /// The wall between `(row, col)` and `(row, col + 1)`
    #[inline(always)]
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self {
            a: Cell::new(row, col),
            b: Cell::new(row, col + 1),
        }
    }

    /// The wall between `(row, col)` and `(row + 1, col)`
    #[inline(always)]
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self {
            a: Cell::new(row, col),
            b: Cell::new(row + 1, col),
        }
    }

    /// The wall between two cells, if they are adjacent
    /// ```
    /// use maze::{Cell, Wall};
    ///
    /// assert_eq!(
    ///     Wall::between(Cell::new(2, 3), Cell::new(2, 2)),
    ///     Some(Wall::vertical(2, 2))
    /// );
    /// assert_eq!(Wall::between(Cell::new(0, 0), Cell::new(1, 1)), None);
    /// ```
    #[must_use]
    pub fn between(a: Cell, b: Cell) -> Option<Self> {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if a.row == b.row && a.col + 1 == b.col {
            Some(Self::vertical(a.row, a.col))
        } else if a.col == b.col && a.row + 1 == b.row {
            Some(Self::horizontal(a.row, a.col))
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn cells(&self) -> [Cell; 2] {
        [self.a, self.b]
    }

    #[inline(always)]
    #[must_use]
    pub const fn side(&self) -> Side {
        if self.a.row == self.b.row {
            Side::Vertical
        } else {
            Side::Horizontal
        }
    }
}

/// Neighbour offsets: up, down, left, right
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square grid of cells
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Create a `size` x `size` grid
    ///
    /// Cell and wall counts must fit in memory indices, so `2 * size²` is
    /// bounded by `isize::MAX`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        size.checked_mul(size)
            .and_then(|cells| cells.checked_mul(2))
            .filter(|&slots| slots <= isize::MAX as usize)
            .ok_or(Error::GridTooLarge(size))?;
        Ok(Self { size })
    }

    /// Side of the grid, in cells
    #[inline(always)]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size * self.size
    }

    /// Number of walls between adjacent cells, boundary excluded
    /// ```
    /// use maze::Grid;
    ///
    /// assert_eq!(Grid::new(3).unwrap().internal_walls(), 12);
    /// assert_eq!(Grid::new(1).unwrap().internal_walls(), 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn internal_walls(&self) -> usize {
        2 * self.size * (self.size - 1)
    }

    #[inline(always)]
    #[must_use]
    pub const fn contains(&self, cell: &Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Convert a cell to its row-major linear index
    /// ```
    /// use maze::{Cell, Grid};
    ///
    /// let grid = Grid::new(4).unwrap();
    /// assert_eq!(grid.linear(&Cell::new(2, 1)), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn linear(&self, cell: &Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row * self.size + cell.col
    }

    /// Convert a row-major linear index back to a cell
    /// ```
    /// use maze::{Cell, Grid};
    ///
    /// let grid = Grid::new(4).unwrap();
    /// assert_eq!(grid.cell(9), Cell::new(2, 1));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn cell(&self, idx: usize) -> Cell {
        debug_assert!(idx < self.len());
        Cell::new(idx / self.size, idx % self.size)
    }

    /// All cells, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let grid = *self;
        (0..grid.len()).map(move |idx| grid.cell(idx))
    }

    /// Cells adjacent to `cell`, in the order up, down, left, right
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let grid = *self;
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let next = Cell::new(
                cell.row.checked_add_signed(dr)?,
                cell.col.checked_add_signed(dc)?,
            );
            grid.contains(&next).then_some(next)
        })
    }

    /// Internal walls around `cell`, in the same order as [`Grid::neighbours`]
    pub fn walls_of(&self, cell: Cell) -> impl Iterator<Item = Wall> {
        self.neighbours(cell)
            .filter_map(move |next| Wall::between(cell, next))
    }
}
