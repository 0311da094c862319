//! Perfect-maze generation with randomized Prim's algorithm.
//!
//! A maze of `h × w` *logical* cells is laid out on a `(2h+1) × (2w+1)`
//! grid: logical cells sit at odd coordinates, everything else starts as
//! wall, and carving a passage opens the wall cell between two logical
//! cells. The result is a spanning tree, so every pair of logical cells is
//! joined by exactly one passage.

use rand::Rng;
use rand::seq::IndexedRandom;
use warpmaze_core::{Bounds, Cell, Coord, Grid, Maze};

use crate::error::{LabError, Result};

/// Largest accepted maze size `n`. A size-`n` maze is laid out on a grid of
/// at most `(n+1) × (n+1)` cells.
pub const MAX_SIZE: usize = 4096;

/// Offsets to the logical neighbours two grid cells away.
const JUMPS: [Coord; 4] = [
    Coord::new(-2, 0),
    Coord::new(0, 2),
    Coord::new(2, 0),
    Coord::new(0, -2),
];

/// Where to put the start and end.
///
/// An *outer* endpoint is cut into the border wall next to a logical cell;
/// an *inner* endpoint is a logical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entrances {
    pub start_outer: bool,
    pub end_outer: bool,
}

impl Default for Entrances {
    fn default() -> Self {
        Self {
            start_outer: true,
            end_outer: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    North,
    South,
    West,
    East,
}

const SIDES: [Side; 4] = [Side::North, Side::South, Side::West, Side::East];

/// Maze generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze of `height × width` logical cells.
    ///
    /// 1. Pick a random logical cell and open it.
    /// 2. Keep a frontier of walled logical cells next to open ones.
    /// 3. Repeatedly take a random frontier cell, open it, join it to a
    ///    random open logical neighbour, and push its walled neighbours.
    pub fn prims(&mut self, height: usize, width: usize) -> Result<Grid> {
        let bounds = Bounds::new(grid_extent(height)?, grid_extent(width)?);
        let mut cells = vec![Cell::Wall; bounds.len()];
        let mut in_frontier = vec![false; bounds.len()];
        let mut frontier: Vec<Coord> = Vec::new();

        let is_open =
            |cells: &[Cell], c: Coord| bounds.index(c).is_some_and(|i| cells[i].is_open());

        let first = Coord::new(
            2 * self.rng.random_range(0..bounds.height / 2) + 1,
            2 * self.rng.random_range(0..bounds.width / 2) + 1,
        );
        let mut current = first;
        loop {
            if let Some(i) = bounds.index(current) {
                cells[i] = Cell::Open;
            }

            if current != first {
                let open: Vec<Coord> = JUMPS
                    .iter()
                    .map(|&d| current + d)
                    .filter(|&n| is_open(&cells, n))
                    .collect();
                if let Some(&n) = open.choose(&mut self.rng) {
                    let between = Coord::new((current.row + n.row) / 2, (current.col + n.col) / 2);
                    if let Some(i) = bounds.index(between) {
                        cells[i] = Cell::Open;
                    }
                }
            }

            for d in JUMPS {
                let n = current + d;
                let Some(i) = bounds.index(n) else {
                    continue;
                };
                if !cells[i].is_open() && !in_frontier[i] {
                    in_frontier[i] = true;
                    frontier.push(n);
                }
            }

            if frontier.is_empty() {
                break;
            }
            let pick = self.rng.random_range(0..frontier.len());
            current = frontier.swap_remove(pick);
        }

        log::debug!("prims: carved {height}x{width} logical cells on a {bounds} grid");
        Ok(Grid::from_cells(bounds.height, bounds.width, cells)?)
    }

    /// Choose start and end coordinates for a grid produced by
    /// [`prims`](Self::prims).
    ///
    /// Outer endpoints lie on the border at odd positions; when both are
    /// outer they are placed on different sides. Inner endpoints are
    /// distinct logical cells whenever the maze has more than one.
    pub fn place_entrances(&mut self, grid: &Grid, entrances: Entrances) -> (Coord, Coord) {
        let start_side = SIDES.choose(&mut self.rng).copied().unwrap_or(Side::North);
        let start = if entrances.start_outer {
            self.outer_cell(grid, start_side)
        } else {
            self.inner_cell(grid)
        };

        let end = if entrances.end_outer {
            let others: Vec<Side> = SIDES
                .iter()
                .copied()
                .filter(|&s| !entrances.start_outer || s != start_side)
                .collect();
            let side = others.choose(&mut self.rng).copied().unwrap_or(Side::South);
            self.outer_cell(grid, side)
        } else {
            let logical = (grid.height() as usize / 2) * (grid.width() as usize / 2);
            let mut end = self.inner_cell(grid);
            while end == start && logical > 1 {
                end = self.inner_cell(grid);
            }
            end
        };
        (start, end)
    }

    /// Generate a maze of `height × width` logical cells with entrances.
    pub fn maze(&mut self, height: usize, width: usize, entrances: Entrances) -> Result<Maze> {
        let grid = self.prims(height, width)?;
        let (start, end) = self.place_entrances(&grid, entrances);
        log::debug!("maze: start {start}, end {end}");
        Ok(Maze::new(grid, start, end))
    }

    /// The experiment's convenience size: `n/2 × n/2` logical cells.
    pub fn sized(&mut self, n: usize, entrances: Entrances) -> Result<Maze> {
        check_size(n)?;
        self.maze(n / 2, n / 2, entrances)
    }

    fn odd(&mut self, extent: i32) -> i32 {
        2 * self.rng.random_range(0..(extent / 2).max(1)) + 1
    }

    fn outer_cell(&mut self, grid: &Grid, side: Side) -> Coord {
        let (h, w) = (grid.height(), grid.width());
        match side {
            Side::North => Coord::new(0, self.odd(w)),
            Side::South => Coord::new(h - 1, self.odd(w)),
            Side::West => Coord::new(self.odd(h), 0),
            Side::East => Coord::new(self.odd(h), w - 1),
        }
    }

    fn inner_cell(&mut self, grid: &Grid) -> Coord {
        Coord::new(self.odd(grid.height()), self.odd(grid.width()))
    }
}

/// Reject a maze size outside `2..=MAX_SIZE`.
pub fn check_size(n: usize) -> Result<()> {
    if !(2..=MAX_SIZE).contains(&n) {
        return Err(LabError::InvalidDimensions(format!(
            "maze size must be in 2..={MAX_SIZE}, got {n}"
        )));
    }
    Ok(())
}

/// Grid extent `2 * logical + 1` for one axis.
fn grid_extent(logical: usize) -> Result<i32> {
    if logical == 0 || logical > MAX_SIZE / 2 {
        return Err(LabError::InvalidDimensions(format!(
            "logical extent must be in 1..={}, got {logical}",
            MAX_SIZE / 2
        )));
    }
    logical
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| LabError::InvalidDimensions(format!("logical extent {logical} overflows")))
}
