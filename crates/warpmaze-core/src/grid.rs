//! The [`Grid`] of open and wall cells, and the [`Maze`] that wraps it.
//!
//! A `Grid` is immutable once built. Every lookup treats out-of-bounds
//! coordinates as "not open" instead of failing, so callers never need a
//! separate bounds check in front of an openness check.

use crate::geom::{Bounds, Coord};

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    /// Whether this cell can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// Errors that can occur when building a [`Grid`] from text rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows, or a first row of zero width.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell vector does not match the requested dimensions.
    #[error("grid of {bounds} needs {expected} cells, got {found}")]
    Size {
        bounds: Bounds,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable 2D grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells.
    pub fn from_cells(height: i32, width: i32, cells: Vec<Cell>) -> Result<Self, GridError> {
        let bounds = Bounds::new(height, width);
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        if cells.len() != bounds.len() {
            return Err(GridError::Size {
                bounds,
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        Ok(Self { bounds, cells })
    }

    /// Build a grid from text rows: `#` is a wall, any other character is
    /// open.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.as_ref().chars().map(|ch| match ch {
                '#' => Cell::Wall,
                _ => Cell::Open,
            }));
        }
        Self::from_cells(rows.len() as i32, width as i32, cells)
    }

    /// A grid with no walls.
    pub fn open(height: i32, width: i32) -> Result<Self, GridError> {
        let bounds = Bounds::new(height, width);
        Self::from_cells(height, width, vec![Cell::Open; bounds.len()])
    }

    /// The grid's bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// True iff `c` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_open)
    }

    /// Count the open cells.
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Open coordinates in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(|(_, cell)| cell.is_open()).map(|(c, _)| c)
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A [`Grid`] plus its two distinguished endpoints.
///
/// The endpoints are traversable even when the underlying cell is a wall;
/// generators that cut entrances into the outer wall rely on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Maze {
    /// Wrap a grid with its start and end coordinates.
    pub fn new(grid: Grid, start: Coord, end: Coord) -> Self {
        Self { grid, start, end }
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.grid.in_bounds(c)
    }

    /// True iff `c` is in bounds and not a wall. Endpoints on wall cells
    /// are *not* reported open here; see [`is_passable`](Self::is_passable).
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.grid.is_open(c)
    }

    /// Whether `c` is the start or the end.
    #[inline]
    pub fn is_endpoint(&self, c: Coord) -> bool {
        c == self.start || c == self.end
    }

    /// In bounds and either open or an endpoint.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.in_bounds(c) && (self.is_open(c) || self.is_endpoint(c))
    }
}
