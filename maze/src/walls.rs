use std::fmt::{self, Display};

use bitflags::bitflags;

use crate::{Cell, Grid, Side, Wall};

bitflags! {
    /// Walls around a cell, boundary included
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Walls: u8 {
        /// Towards `row - 1`
        const Top    = 0b1000;
        /// Towards `col - 1`
        const Left   = 0b0100;
        /// Towards `row + 1`
        const Bottom = 0b0010;
        /// Towards `col + 1`
        const Right  = 0b0001;
    }
}

/// A maze: the state of every internal wall of a grid
///
/// Removed walls are the passages between cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    grid: Grid,
    /// `vertical[r * (n - 1) + c]` is the wall between `(r, c)` and `(r, c + 1)`
    vertical: Box<[bool]>,
    /// `horizontal[r * n + c]` is the wall between `(r, c)` and `(r + 1, c)`
    horizontal: Box<[bool]>,
}

impl Maze {
    /// A maze with every wall standing
    #[must_use]
    pub fn full(grid: Grid) -> Self {
        let n = grid.size();
        Self {
            grid,
            vertical: vec![true; n * (n - 1)].into_boxed_slice(),
            horizontal: vec![true; (n - 1) * n].into_boxed_slice(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    fn slot(&self, wall: &Wall) -> (Side, usize) {
        let [a, b] = wall.cells();
        debug_assert!(self.grid.contains(&a) && self.grid.contains(&b));
        let n = self.grid.size();
        match wall.side() {
            Side::Vertical => (Side::Vertical, a.row * (n - 1) + a.col),
            Side::Horizontal => (Side::Horizontal, a.row * n + a.col),
        }
    }

    /// Is the wall still standing?
    #[must_use]
    pub fn is_present(&self, wall: &Wall) -> bool {
        match self.slot(wall) {
            (Side::Vertical, idx) => self.vertical[idx],
            (Side::Horizontal, idx) => self.horizontal[idx],
        }
    }

    /// Knock down a wall, opening a passage
    pub(crate) fn remove(&mut self, wall: &Wall) {
        match self.slot(wall) {
            (Side::Vertical, idx) => self.vertical[idx] = false,
            (Side::Horizontal, idx) => self.horizontal[idx] = false,
        }
    }

    /// All internal walls with their state
    ///
    /// Vertical walls come first, then horizontal ones, both in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = (Wall, bool)> + '_ {
        let n = self.grid.size();
        let vertical = (0..n)
            .flat_map(move |r| (0..n - 1).map(move |c| Wall::vertical(r, c)))
            .zip(self.vertical.iter().copied());
        let horizontal = (0..n - 1)
            .flat_map(move |r| (0..n).map(move |c| Wall::horizontal(r, c)))
            .zip(self.horizontal.iter().copied());
        vertical.chain(horizontal)
    }

    /// Walls still standing, in the order of [`Maze::walls`]
    pub fn present_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls()
            .filter_map(|(wall, present)| present.then_some(wall))
    }

    /// Removed walls, in the order of [`Maze::walls`]
    pub fn passages(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls()
            .filter_map(|(wall, present)| (!present).then_some(wall))
    }

    /// Walls enclosing a cell
    /// ```
    /// use maze::{Cell, Grid, Maze, Walls};
    ///
    /// let maze = Maze::full(Grid::new(2).unwrap());
    /// assert_eq!(maze.cell_walls(Cell::new(0, 1)), Walls::all());
    /// ```
    #[must_use]
    pub fn cell_walls(&self, cell: Cell) -> Walls {
        debug_assert!(self.grid.contains(&cell));
        let n = self.grid.size();
        let Cell { row, col } = cell;
        let mut walls = Walls::empty();
        if row == 0 || self.is_present(&Wall::horizontal(row - 1, col)) {
            walls |= Walls::Top;
        }
        if row + 1 == n || self.is_present(&Wall::horizontal(row, col)) {
            walls |= Walls::Bottom;
        }
        if col == 0 || self.is_present(&Wall::vertical(row, col - 1)) {
            walls |= Walls::Left;
        }
        if col + 1 == n || self.is_present(&Wall::vertical(row, col)) {
            walls |= Walls::Right;
        }
        walls
    }

    /// Check that the passages form a spanning tree of the grid
    ///
    /// That is, exactly `n² - 1` passages connecting every cell.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        if self.passages().count() != self.grid.len() - 1 {
            return false;
        }
        let mut seen = vec![false; self.grid.len()];
        let start = Cell::new(0, 0);
        seen[self.grid.linear(&start)] = true;
        let mut reached = 1;
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for wall in self.grid.walls_of(cell) {
                if self.is_present(&wall) {
                    continue;
                }
                let [a, b] = wall.cells();
                let next = if a == cell { b } else { a };
                let idx = self.grid.linear(&next);
                if !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }
        reached == self.grid.len()
    }
}

/// Draws the maze in ascii, row 0 on top
impl Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.grid.size();
        write!(f, "+")?;
        for _ in 0..n {
            write!(f, "---+")?;
        }
        writeln!(f)?;
        for row in 0..n {
            write!(f, "|")?;
            for col in 0..n {
                let walls = self.cell_walls(Cell::new(row, col));
                write!(f, "   {}", if walls.contains(Walls::Right) { '|' } else { ' ' })?;
            }
            writeln!(f)?;
            write!(f, "+")?;
            for col in 0..n {
                let walls = self.cell_walls(Cell::new(row, col));
                write!(f, "{}+", if walls.contains(Walls::Bottom) { "---" } else { "   " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
