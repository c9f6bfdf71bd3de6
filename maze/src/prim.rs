//! Randomized Prim's maze generation

use std::collections::HashSet;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Cell, Grid, Maze, Wall};

/// How the frontier handles a wall pushed more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierKind {
    /// Every push is kept, so walls touching many visited cells are picked more often
    #[default]
    Multiset,
    /// A wall enters the frontier at most once, giving every frontier wall the same odds
    Set,
}

/// Walls bordering the visited region
#[derive(Debug)]
struct Frontier {
    walls: Vec<Wall>,
    /// Walls ever queued, only for [`FrontierKind::Set`]
    queued: Option<HashSet<Wall>>,
}

impl Frontier {
    fn new(kind: FrontierKind) -> Self {
        Self {
            walls: vec![],
            queued: match kind {
                FrontierKind::Multiset => None,
                FrontierKind::Set => Some(HashSet::new()),
            },
        }
    }

    fn extend(&mut self, walls: impl IntoIterator<Item = Wall>) {
        match &mut self.queued {
            None => self.walls.extend(walls),
            Some(queued) => self
                .walls
                .extend(walls.into_iter().filter(|wall| queued.insert(*wall))),
        }
    }

    /// Remove a uniformly chosen entry
    fn pop_random<R>(&mut self, rng: &mut R) -> Option<Wall>
    where
        R: Rng + ?Sized,
    {
        if self.walls.is_empty() {
            return None;
        }
        Some(self.walls.swap_remove(rng.gen_range(0..self.walls.len())))
    }
}

/// Generate a maze whose passages form a spanning tree of `grid`
///
/// ```
/// use maze::{prim, FrontierKind, Grid, WyRand};
/// use rand::SeedableRng;
///
/// let grid = Grid::new(4).unwrap();
/// let maze = prim::generate(grid, FrontierKind::Multiset, &mut WyRand::seed_from_u64(7));
/// assert_eq!(maze.passages().count(), 15);
/// ```
pub fn generate<R>(grid: Grid, kind: FrontierKind, rng: &mut R) -> Maze
where
    R: Rng + ?Sized,
{
    let n = grid.size();
    let mut maze = Maze::full(grid);
    let mut visited = vec![false; grid.len()];
    let mut frontier = Frontier::new(kind);

    // choosing a random starting point
    let start = Cell::new(rng.gen_range(0..n), rng.gen_range(0..n));
    log::debug!("{grid:?}: Starting from {start:?}");
    visited[grid.linear(&start)] = true;
    frontier.extend(grid.walls_of(start));

    while let Some(wall) = frontier.pop_random(rng) {
        let [a, b] = wall.cells();
        let (visited_a, visited_b) = (visited[grid.linear(&a)], visited[grid.linear(&b)]);
        debug_assert!(visited_a || visited_b, "frontier walls touch the visited region");
        if visited_a == visited_b {
            log::trace!("{wall:?}: Both sides visited, discarding");
            continue;
        }
        // opening the passage
        let new = if visited_a { b } else { a };
        maze.remove(&wall);
        // marking as visited and adding the walls around it
        visited[grid.linear(&new)] = true;
        frontier.extend(grid.walls_of(new));
    }

    debug_assert!(visited.iter().all(|v| *v));
    debug_assert!(maze.is_spanning_tree());
    log::debug!(
        "{grid:?}: Done, {} walls left standing",
        maze.present_walls().count()
    );
    maze
}
