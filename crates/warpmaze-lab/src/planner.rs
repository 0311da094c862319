//! Teleportation-link placement that keeps a maze solvable.
//!
//! The baseline shortest path is computed first and no link entrance is
//! ever placed on it. Since neighbor expansion only rewrites entrances,
//! every move along the baseline path still works once the links are in,
//! so the end stays reachable no matter where the links land.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;
use warpmaze_core::{Coord, Maze};
use warpmaze_paths::{LinkedMaze, Links, PathRange};

use crate::error::{LabError, Result};

/// Links chosen for one maze, plus the zero-link path they were planned
/// around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPlan {
    pub links: Links,
    pub baseline: Vec<Coord>,
}

/// Place `count` one-way links in `maze`.
///
/// Candidates are the open cells off the baseline path, enumerated in
/// row-major order; `2 * count` of them are drawn without replacement and
/// paired in draw order as entrance, exit. `pr` is resized to the maze if
/// needed and left holding the baseline search.
///
/// Fails with [`LabError::Unsolvable`] if the maze has no zero-link path and
/// with [`LabError::InsufficientCells`] if the candidate pool is too small.
pub fn plan_links<R: Rng + ?Sized>(
    pr: &mut PathRange,
    maze: &Maze,
    count: usize,
    rng: &mut R,
) -> Result<LinkPlan> {
    if pr.bounds() != maze.bounds() {
        pr.set_bounds(maze.bounds());
    }

    let mut links = Links::new();
    let baseline = pr
        .bfs_path(&LinkedMaze::new(maze, &links), maze.start(), maze.end())
        .path
        .ok_or(LabError::Unsolvable)?;

    if count == 0 {
        return Ok(LinkPlan { links, baseline });
    }

    let excluded: HashSet<Coord> = baseline.iter().copied().collect();
    let pool: Vec<Coord> = maze
        .grid()
        .open_cells()
        .filter(|c| !excluded.contains(c))
        .collect();

    let needed = count.saturating_mul(2);
    if pool.len() < needed {
        return Err(LabError::InsufficientCells {
            needed,
            available: pool.len(),
        });
    }

    let drawn: Vec<Coord> = index::sample(rng, pool.len(), needed)
        .into_iter()
        .map(|i| pool[i])
        .collect();
    for pair in drawn.chunks_exact(2) {
        links.insert(pair[0], pair[1]);
    }

    log::debug!(
        "planned {} links from a pool of {} (baseline {} cells)",
        links.len(),
        pool.len(),
        baseline.len()
    );
    Ok(LinkPlan { links, baseline })
}
