use warpmaze_core::{Coord, Maze};

use crate::links::Links;
use crate::traits::Pather;

/// Append the link-aware neighbors of `c` to `buf`.
///
/// Candidates come in the fixed order up, right, down, left. Each one is
/// bounds-checked and wall-checked (endpoints are always passable) *before*
/// link substitution, and the substituted exit is not checked again.
fn push_linked(maze: &Maze, links: &Links, c: Coord, buf: &mut Vec<Coord>) {
    for n in c.neighbors_4() {
        if maze.is_passable(n) {
            buf.push(links.resolve(n));
        }
    }
}

/// A [`Maze`] viewed through a set of [`Links`].
///
/// This is the [`Pather`] the search engine runs on. With empty links it
/// is the plain 4-connected maze graph.
#[derive(Debug, Clone, Copy)]
pub struct LinkedMaze<'a> {
    maze: &'a Maze,
    links: &'a Links,
}

impl<'a> LinkedMaze<'a> {
    pub fn new(maze: &'a Maze, links: &'a Links) -> Self {
        Self { maze, links }
    }

    #[inline]
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    #[inline]
    pub fn links(&self) -> &'a Links {
        self.links
    }

    /// Whether `to` is one move from `from`: either an adjacent passable
    /// cell, or the exit of a link whose entrance is adjacent to `from`.
    pub fn is_step(&self, from: Coord, to: Coord) -> bool {
        from.neighbors_4()
            .into_iter()
            .filter(|&n| self.maze.is_passable(n))
            .any(|n| self.links.resolve(n) == to)
    }
}

impl Pather for LinkedMaze<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        push_linked(self.maze, self.links, c, buf);
    }
}
