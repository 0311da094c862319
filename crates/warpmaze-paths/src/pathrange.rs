use std::collections::VecDeque;

use warpmaze_core::{Bounds, Coord};

/// Parent sentinel for search roots and unvisited cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a maze of fixed bounds.
///
/// `PathRange` owns the frontier queue, the visited marks and the
/// predecessor table so that repeated queries incur no allocations after
/// the first use. The visited marks and the predecessor table are kept
/// apart: [`visited`](Self::visited) answers membership for the last BFS,
/// [`parent_of`](Self::parent_of) answers path reconstruction.
pub struct PathRange {
    pub(crate) bounds: Bounds,
    // BFS state. A cell is visited iff its stamp equals `generation`.
    pub(crate) generation: u32,
    pub(crate) stamps: Vec<u32>,
    pub(crate) parents: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // Reachability flood-fill state
    pub(crate) reach_marks: Vec<bool>,
    pub(crate) reach_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathRange {
    /// Create a new `PathRange` for the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            generation: 0,
            stamps: vec![0; len],
            parents: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            reach_marks: vec![false; len],
            reach_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the bounds, reallocating only when the new bounds do not fit
    /// in the existing buffers. The previous search's results are dropped
    /// either way.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        let new_len = bounds.len();
        self.bounds = bounds;
        if new_len <= self.stamps.len() {
            self.next_generation();
            return;
        }
        self.generation = 0;
        self.stamps.clear();
        self.stamps.resize(new_len, 0);
        self.parents.clear();
        self.parents.resize(new_len, NO_PARENT);
        self.reach_marks.clear();
        self.reach_marks.resize(new_len, false);
        self.queue.clear();
        self.reach_stack.clear();
    }

    /// The bounds being searched.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `c` was visited by the last BFS.
    pub fn visited(&self, c: Coord) -> bool {
        match self.idx(c) {
            Some(i) => self.generation != 0 && self.stamps[i] == self.generation,
            None => false,
        }
    }

    /// Predecessor of `c` recorded by the last BFS.
    ///
    /// `None` for the search root and for cells that were not visited.
    pub fn parent_of(&self, c: Coord) -> Option<Coord> {
        if !self.visited(c) {
            return None;
        }
        let i = self.idx(c)?;
        match self.parents[i] {
            NO_PARENT => None,
            p => Some(self.coord(p)),
        }
    }

    /// Start a new BFS generation, invalidating every previous mark.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would look fresh again.
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.bounds.index(c)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bounds_smaller_preserves_capacity() {
        let mut pr = PathRange::new(Bounds::new(20, 20));
        let cap = pr.stamps.len();

        let small = Bounds::new(5, 5);
        pr.set_bounds(small);
        assert_eq!(pr.bounds(), small);
        assert_eq!(pr.stamps.len(), cap);
        assert_eq!(pr.generation, 1);
    }

    #[test]
    fn set_bounds_larger_reallocates() {
        let mut pr = PathRange::new(Bounds::new(5, 5));
        pr.set_bounds(Bounds::new(20, 20));
        assert_eq!(pr.stamps.len(), 400);
        assert_eq!(pr.parents.len(), 400);
        assert_eq!(pr.reach_marks.len(), 400);
    }

    #[test]
    fn fresh_range_has_nothing_visited() {
        let pr = PathRange::new(Bounds::new(3, 3));
        assert!(!pr.visited(Coord::new(0, 0)));
        assert_eq!(pr.parent_of(Coord::new(1, 1)), None);
        assert!(!pr.visited(Coord::new(-1, 0)));
    }

    #[test]
    fn generation_wrap_clears_stamps() {
        let mut pr = PathRange::new(Bounds::new(2, 2));
        pr.generation = u32::MAX;
        pr.stamps[0] = 1;
        assert_eq!(pr.next_generation(), 1);
        assert!(pr.stamps.iter().all(|&s| s == 0));
    }
}
