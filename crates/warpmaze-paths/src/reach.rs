//! Reachability flood fills.

use warpmaze_core::Coord;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Flood-fill from `from` and return every reachable cell, `from`
    /// included, in discovery order.
    ///
    /// Uses a depth-first stack, so it does not disturb the state reported
    /// by [`visited`](Self::visited) and [`parent_of`](Self::parent_of).
    pub fn reachable<P: Pather>(&mut self, pather: &P, from: Coord) -> Vec<Coord> {
        for v in self.reach_marks.iter_mut() {
            *v = false;
        }

        let mut result = Vec::new();
        let Some(si) = self.idx(from) else {
            return result;
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);

        self.reach_stack.clear();
        self.reach_stack.push(si);
        self.reach_marks[si] = true;
        result.push(from);

        while let Some(ci) = self.reach_stack.pop() {
            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = self.idx(np) {
                    if !self.reach_marks[ni] {
                        self.reach_marks[ni] = true;
                        self.reach_stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Whether `to` can be reached from `from`.
    pub fn connected<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> bool {
        if self.idx(to).is_none() {
            return false;
        }
        self.reachable(pather, from);
        self.idx(to).is_some_and(|i| self.reach_marks[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkedMaze, Links};
    use warpmaze_core::{Grid, Maze};

    fn split_maze() -> Maze {
        let grid = Grid::from_rows(&["..#.", "..#.", "..#."]).unwrap();
        Maze::new(grid, Coord::new(0, 0), Coord::new(2, 3))
    }

    #[test]
    fn flood_stays_on_one_side() {
        let maze = split_maze();
        let links = Links::new();
        let mut pr = PathRange::new(maze.bounds());
        let mut cells = pr.reachable(&LinkedMaze::new(&maze, &links), maze.start());
        cells.sort();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.col < 2));
        assert!(!pr.connected(&LinkedMaze::new(&maze, &links), maze.start(), maze.end()));
    }

    #[test]
    fn links_join_components() {
        let maze = split_maze();
        let mut links = Links::new();
        links.insert(Coord::new(1, 1), Coord::new(1, 3));
        let mut pr = PathRange::new(maze.bounds());
        let lm = LinkedMaze::new(&maze, &links);
        assert!(pr.connected(&lm, maze.start(), maze.end()));
        // Links are one-way: the right side cannot get back.
        assert!(!pr.connected(&lm, maze.end(), maze.start()));
    }

    #[test]
    fn out_of_bounds_source_reaches_nothing() {
        let maze = split_maze();
        let links = Links::new();
        let mut pr = PathRange::new(maze.bounds());
        let lm = LinkedMaze::new(&maze, &links);
        assert!(pr.reachable(&lm, Coord::new(-1, 0)).is_empty());
        assert!(!pr.connected(&lm, maze.start(), Coord::new(9, 9)));
    }
}
