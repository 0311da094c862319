//! Plain-text rendering of mazes.
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `#` | wall |
//! | ` ` | open |
//! | `S` / `E` | start / end |
//! | `+` | path cell (overlay only) |
//! | `>` / `<` | link entrance / exit (overlay only) |

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::geom::Coord;
use crate::grid::{Cell, Maze};

impl Maze {
    fn glyph(&self, c: Coord, cell: Cell) -> char {
        if c == self.start() {
            'S'
        } else if c == self.end() {
            'E'
        } else if cell.is_open() {
            ' '
        } else {
            '#'
        }
    }

    /// Render the maze with a path and link endpoints drawn on top.
    ///
    /// Endpoint glyphs win over link glyphs, which win over path glyphs.
    pub fn render_overlay<I>(&self, path: &[Coord], links: I) -> String
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        let mut marks: HashMap<Coord, char> = HashMap::new();
        for (entrance, exit) in links {
            marks.insert(exit, '<');
            marks.insert(entrance, '>');
        }

        let width = self.width().max(0) as usize;
        let mut out = String::with_capacity((width + 1) * self.height().max(0) as usize);
        for (c, cell) in self.grid().iter() {
            let ch = if self.is_endpoint(c) {
                self.glyph(c, cell)
            } else if let Some(&m) = marks.get(&c) {
                m
            } else if on_path.contains(&c) {
                '+'
            } else {
                self.glyph(c, cell)
            };
            out.push(ch);
            if c.col as usize + 1 == width {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_col = self.width() - 1;
        for (c, cell) in self.grid().iter() {
            write!(f, "{}", self.glyph(c, cell))?;
            if c.col == last_col {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
