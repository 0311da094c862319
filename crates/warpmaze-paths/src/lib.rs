//! Breadth-first search over grid mazes with teleportation links.
//!
//! A teleportation link is a one-way rewrite: whenever neighbor expansion
//! would step onto a link *entrance*, it lands on the link's *exit*
//! instead. This crate provides:
//!
//! - [`Links`], the entrance → exit mapping
//! - [`LinkedMaze`], the [`Pather`] that applies links during expansion
//! - **BFS** shortest paths with step counting ([`PathRange::bfs_path`])
//! - **Reachability** flood fills ([`PathRange::reachable`], [`PathRange::connected`])
//! - a [`SearchTrace`] hook for observing a search as it runs
//!
//! All searches operate through [`PathRange`], which owns and reuses its
//! internal buffers so that repeated queries on same-sized mazes do not
//! reallocate.

mod bfs;
mod links;
mod neighbors;
mod pathrange;
mod reach;
mod trace;
mod traits;

pub use bfs::Search;
pub use links::Links;
pub use neighbors::LinkedMaze;
pub use pathrange::PathRange;
pub use trace::{LogTrace, NoTrace, RecordingTrace, SearchTrace, TraceEvent};
pub use traits::Pather;
