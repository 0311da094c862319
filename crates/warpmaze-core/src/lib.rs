//! **warpmaze-core** — grid and maze types for teleport-link maze search.
//!
//! This crate provides the foundational types used across the *warpmaze*
//! workspace: [`Coord`] and [`Bounds`] geometry, an immutable [`Grid`] of
//! open and wall cells, and the [`Maze`] wrapper that adds the two
//! distinguished endpoints.

pub mod geom;
pub mod grid;
pub mod render;

pub use geom::{Bounds, BoundsIter, Coord};
pub use grid::{Cell, Grid, GridError, Maze};
