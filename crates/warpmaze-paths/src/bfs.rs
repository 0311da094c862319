use std::collections::VecDeque;

use warpmaze_core::Coord;

use crate::PathRange;
use crate::pathrange::NO_PARENT;
use crate::trace::{NoTrace, SearchTrace};
use crate::traits::Pather;

/// Result of one breadth-first search.
///
/// `steps` counts frontier pops, including the pop that reached the goal.
/// It measures search effort and is unrelated to the path length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub path: Option<Vec<Coord>>,
    pub steps: usize,
}

impl Search {
    /// Whether the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves on the path (cells minus one).
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl PathRange {
    /// Compute a shortest path from `from` to `to` with breadth-first search.
    ///
    /// Every edge costs 1, link substitutions included, so the first time
    /// `to` leaves the frontier its predecessor chain is a shortest path.
    /// An exhausted frontier yields `path: None`.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> Search {
        self.bfs_path_traced(pather, from, to, &mut NoTrace)
    }

    /// [`bfs_path`](Self::bfs_path) reporting every enqueue and pop to
    /// `trace`.
    pub fn bfs_path_traced<P, T>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
        trace: &mut T,
    ) -> Search
    where
        P: Pather,
        T: SearchTrace + ?Sized,
    {
        let cur_gen = self.next_generation();

        let Some(start_idx) = self.idx(from) else {
            log::debug!("bfs: start {from} outside {}", self.bounds);
            trace.on_finish(None, 0);
            return Search {
                path: None,
                steps: 0,
            };
        };
        let goal_idx = self.idx(to);

        let mut queue: VecDeque<usize> = std::mem::take(&mut self.queue);
        queue.clear();

        self.stamps[start_idx] = cur_gen;
        self.parents[start_idx] = NO_PARENT;
        queue.push_back(start_idx);
        trace.on_enqueue(from, None);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut steps = 0usize;

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            steps += 1;
            let cp = self.coord(ci);
            trace.on_pop(cp, steps);
            log::trace!("bfs: pop #{steps} {cp}");

            if Some(ci) == goal_idx {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.stamps[ni] == cur_gen {
                    continue;
                }
                self.stamps[ni] = cur_gen;
                self.parents[ni] = ci;
                queue.push_back(ni);
                trace.on_enqueue(np, Some(cp));
            }
        };

        queue.clear();
        self.queue = queue;
        self.nbuf = nbuf;

        let path = match (found, goal_idx) {
            (true, Some(gi)) => Some(self.reconstruct(gi)),
            _ => None,
        };
        trace.on_finish(path.as_deref(), steps);
        log::debug!(
            "bfs: {from} -> {to}: {} after {steps} pops",
            match &path {
                Some(p) => format!("{} cells", p.len()),
                None => "unreachable".to_string(),
            }
        );
        Search { path, steps }
    }

    /// Walk predecessors back from `goal_idx` and reverse.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.coord(ci));
            ci = self.parents[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{RecordingTrace, TraceEvent};
    use crate::{LinkedMaze, Links};
    use proptest::prelude::*;
    use warpmaze_core::{Bounds, Cell, Grid, Maze};

    fn open_maze(h: i32, w: i32) -> Maze {
        Maze::new(Grid::open(h, w).unwrap(), Coord::new(0, 0), Coord::new(h - 1, w - 1))
    }

    fn solve(maze: &Maze, links: &Links) -> Search {
        let mut pr = PathRange::new(maze.bounds());
        pr.bfs_path(&LinkedMaze::new(maze, links), maze.start(), maze.end())
    }

    fn assert_walkable(maze: &Maze, links: &Links, path: &[Coord]) {
        let lm = LinkedMaze::new(maze, links);
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        for w in path.windows(2) {
            assert!(lm.is_step(w[0], w[1]), "{} -> {} is not a move", w[0], w[1]);
        }
    }

    #[test]
    fn open_4x4_staircase() {
        let maze = open_maze(4, 4);
        let links = Links::new();
        let s = solve(&maze, &links);
        let path = s.path.clone().unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(s.moves(), Some(6));
        assert_walkable(&maze, &links, &path);
        // End is the farthest cell, so every cell is popped.
        assert_eq!(s.steps, 16);
        // Right is tried before down, so the first move goes right.
        assert_eq!(path[1], Coord::new(0, 1));
    }

    #[test]
    fn link_near_start_to_near_end_cuts_steps() {
        let maze = open_maze(4, 4);
        let baseline = solve(&maze, &Links::new());

        let mut links = Links::new();
        links.insert(Coord::new(0, 1), Coord::new(3, 2));
        let linked = solve(&maze, &links);

        assert!(linked.steps < baseline.steps);
        assert_eq!(linked.steps, 5);
        assert_eq!(
            linked.path,
            Some(vec![Coord::new(0, 0), Coord::new(3, 2), Coord::new(3, 3)])
        );
    }

    #[test]
    fn start_equals_end() {
        let grid = Grid::open(2, 2).unwrap();
        let maze = Maze::new(grid, Coord::new(1, 1), Coord::new(1, 1));
        let s = solve(&maze, &Links::new());
        assert_eq!(s.path, Some(vec![Coord::new(1, 1)]));
        assert_eq!(s.steps, 1);
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let grid = Grid::from_rows(&["..#.", "..#.", "..#."]).unwrap();
        let maze = Maze::new(grid, Coord::new(0, 0), Coord::new(2, 3));
        let s = solve(&maze, &Links::new());
        assert_eq!(s.path, None);
        // Only the six left-hand cells are ever popped.
        assert_eq!(s.steps, 6);
    }

    #[test]
    fn link_bridges_a_wall() {
        let grid = Grid::from_rows(&["..#.", "..#.", "..#."]).unwrap();
        let maze = Maze::new(grid, Coord::new(0, 0), Coord::new(2, 3));
        let mut links = Links::new();
        links.insert(Coord::new(1, 1), Coord::new(0, 3));
        let s = solve(&maze, &links);
        let path = s.path.unwrap();
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 3),
                Coord::new(1, 3),
                Coord::new(2, 3),
            ]
        );
        assert_walkable(&maze, &links, &path);
    }

    #[test]
    fn endpoints_in_outer_wall() {
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let maze = Maze::new(grid, Coord::new(0, 2), Coord::new(2, 2));
        assert_eq!(maze.grid().at(maze.start()), Some(Cell::Wall));
        assert_eq!(maze.grid().at(maze.end()), Some(Cell::Wall));
        let s = solve(&maze, &Links::new());
        assert_eq!(
            s.path,
            Some(vec![Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)])
        );

        // Other wall cells stay blocked.
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let maze = Maze::new(grid, Coord::new(0, 2), Coord::new(2, 0));
        assert!(!solve(&maze, &Links::new()).found());
    }

    #[test]
    fn visited_and_parents_are_exposed() {
        let maze = open_maze(3, 3);
        let links = Links::new();
        let mut pr = PathRange::new(maze.bounds());
        let s = pr.bfs_path(&LinkedMaze::new(&maze, &links), maze.start(), maze.end());
        let path = s.path.unwrap();
        assert!(pr.visited(maze.start()));
        assert_eq!(pr.parent_of(maze.start()), None);
        for w in path.windows(2) {
            assert_eq!(pr.parent_of(w[1]), Some(w[0]));
        }
    }

    #[test]
    fn reused_range_forgets_previous_search() {
        let grid = Grid::from_rows(&["..#.", "..#.", "..#."]).unwrap();
        let maze = Maze::new(grid, Coord::new(0, 0), Coord::new(2, 3));
        let links = Links::new();
        let mut pr = PathRange::new(Bounds::new(3, 4));
        let lm = LinkedMaze::new(&maze, &links);
        pr.bfs_path(&lm, Coord::new(0, 3), Coord::new(2, 3));
        assert!(pr.visited(Coord::new(1, 3)));
        let s = pr.bfs_path(&lm, maze.start(), maze.end());
        assert!(!s.found());
        assert!(!pr.visited(Coord::new(1, 3)));
        let again = pr.bfs_path(&lm, maze.start(), maze.end());
        assert_eq!(s, again);
    }

    #[test]
    fn trace_sees_pops_in_order() {
        let maze = open_maze(2, 2);
        let links = Links::new();
        let mut pr = PathRange::new(maze.bounds());
        let mut trace = RecordingTrace::new();
        let s = pr.bfs_path_traced(
            &LinkedMaze::new(&maze, &links),
            maze.start(),
            maze.end(),
            &mut trace,
        );
        assert_eq!(
            trace.pops(),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
        assert_eq!(
            trace.events.last(),
            Some(&TraceEvent::Finish {
                found: true,
                steps: s.steps
            })
        );
        assert_eq!(
            trace.events[0],
            TraceEvent::Enqueue {
                at: Coord::new(0, 0),
                from: None
            }
        );
    }

    #[test]
    fn start_outside_bounds() {
        let maze = open_maze(2, 2);
        let links = Links::new();
        let mut pr = PathRange::new(maze.bounds());
        let s = pr.bfs_path(&LinkedMaze::new(&maze, &links), Coord::new(5, 5), maze.end());
        assert_eq!(
            s,
            Search {
                path: None,
                steps: 0
            }
        );
    }

    fn arb_maze() -> impl Strategy<Value = Maze> {
        (1i32..7, 1i32..7).prop_flat_map(|(h, w)| {
            let len = (h * w) as usize;
            (
                proptest::collection::vec(prop::bool::weighted(0.3), len),
                0..h,
                0..w,
                0..h,
                0..w,
            )
                .prop_map(move |(walls, sr, sc, er, ec)| {
                    let cells = walls
                        .into_iter()
                        .map(|wall| if wall { Cell::Wall } else { Cell::Open })
                        .collect();
                    let grid = Grid::from_cells(h, w, cells).unwrap();
                    Maze::new(grid, Coord::new(sr, sc), Coord::new(er, ec))
                })
        })
    }

    fn arb_linked() -> impl Strategy<Value = (Maze, Links)> {
        arb_maze().prop_flat_map(|maze| {
            let (h, w) = (maze.height(), maze.width());
            let cell = move || (0..h, 0..w).prop_map(|(r, c)| Coord::new(r, c));
            let links = proptest::collection::vec((cell(), cell()), 0..4)
                .prop_map(|pairs| pairs.into_iter().collect::<Links>());
            (Just(maze), links)
        })
    }

    /// Move count from `from` to `to` by relaxing every cell until no
    /// distance improves.
    fn relaxed_moves(lm: &LinkedMaze<'_>, from: Coord, to: Coord) -> Option<usize> {
        let bounds = lm.maze().bounds();
        let mut dist: Vec<Option<usize>> = vec![None; bounds.len()];
        dist[bounds.index(from)?] = Some(0);
        let mut buf = Vec::new();
        let mut changed = true;
        while changed {
            changed = false;
            for c in bounds.iter() {
                let Some(d) = bounds.index(c).and_then(|i| dist[i]) else {
                    continue;
                };
                buf.clear();
                lm.neighbors(c, &mut buf);
                for &n in &buf {
                    let Some(i) = bounds.index(n) else {
                        continue;
                    };
                    if dist[i].is_none_or(|old| d + 1 < old) {
                        dist[i] = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
        dist[bounds.index(to)?]
    }

    proptest! {
        #[test]
        fn found_iff_connected((maze, links) in arb_linked()) {
            let lm = LinkedMaze::new(&maze, &links);
            let mut pr = PathRange::new(maze.bounds());
            let s = pr.bfs_path(&lm, maze.start(), maze.end());
            let connected = pr.connected(&lm, maze.start(), maze.end());
            prop_assert_eq!(s.found(), connected);
            if let Some(path) = &s.path {
                assert_walkable(&maze, &links, path);
                let mut seen = std::collections::HashSet::new();
                prop_assert!(path.iter().all(|c| seen.insert(*c)));
            }
        }

        #[test]
        fn paths_are_shortest((maze, links) in arb_linked()) {
            let lm = LinkedMaze::new(&maze, &links);
            let s = solve(&maze, &links);
            prop_assert_eq!(s.moves(), relaxed_moves(&lm, maze.start(), maze.end()));
        }

        #[test]
        fn search_is_deterministic((maze, links) in arb_linked()) {
            let a = solve(&maze, &links);
            let b = solve(&maze, &links);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn parents_walk_to_start((maze, links) in arb_linked()) {
            let lm = LinkedMaze::new(&maze, &links);
            let mut pr = PathRange::new(maze.bounds());
            let s = pr.bfs_path(&lm, maze.start(), maze.end());
            if let Some(path) = s.path {
                assert_walkable(&maze, &links, &path);
                let mut walked = vec![maze.end()];
                let mut cur = maze.end();
                while let Some(p) = pr.parent_of(cur) {
                    walked.push(p);
                    cur = p;
                }
                walked.reverse();
                prop_assert_eq!(walked, path);
            }
        }
    }
}
