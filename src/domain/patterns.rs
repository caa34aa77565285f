use tracing::debug;

use super::{Coord, Grid, error::Result};

/// A named set of live cells, relative to its own top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<Coord>) -> Self {
        let width = cells.iter().map(|c| c.x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|c| c.y).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// Build a pattern from a picture: `o`/`O` alive, anything else dead.
    /// Leading and trailing blank lines are ignored.
    pub fn from_picture(name: &'static str, description: &'static str, picture: &str) -> Self {
        let cells = picture
            .trim_matches('\n')
            .lines()
            .zip(0..)
            .flat_map(|(line, y)| {
                line.chars()
                    .zip(0..)
                    .filter(|(ch, _)| matches!(ch, 'o' | 'O'))
                    .map(move |(_, x)| Coord::new(x, y))
            })
            .collect();
        Self::new(name, description, cells)
    }

    /// Mark the pattern alive on `grid` with its top-left corner at `origin`.
    /// Fails without touching the grid if any cell would land outside it.
    pub fn place_on(&self, grid: &mut Grid, origin: Coord) -> Result<()> {
        let mut staged = grid.clone();
        for cell in &self.cells {
            staged.set(origin.offset(cell.x, cell.y), true)?;
        }
        *grid = staged;
        debug!(pattern = self.name, %origin, "placed pattern");
        Ok(())
    }

    /// Top-left corner that centers the pattern on `grid`
    pub fn centered_origin(&self, grid: &Grid) -> Coord {
        Coord::new(
            (grid.width() - self.width) / 2,
            (grid.height() - self.height) / 2,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_picture(
            "glider",
            "Moves diagonally (period 4)",
            "
.o.
..o
ooo",
        )
    }

    /// Blinker - period 2 oscillator, standing upright
    pub fn blinker() -> Pattern {
        Pattern::from_picture(
            "blinker",
            "Oscillator (period 2)",
            "
o
o
o",
        )
    }

    pub fn toad() -> Pattern {
        Pattern::from_picture(
            "toad",
            "Oscillator (period 2)",
            "
.ooo
ooo.",
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::from_picture(
            "beacon",
            "Oscillator (period 2)",
            "
oo..
o...
...o
..oo",
        )
    }

    pub fn pulsar() -> Pattern {
        Pattern::from_picture(
            "pulsar",
            "Oscillator (period 3)",
            "
..ooo...ooo..
.............
o....o.o....o
o....o.o....o
o....o.o....o
..ooo...ooo..
.............
..ooo...ooo..
o....o.o....o
o....o.o....o
o....o.o....o
.............
..ooo...ooo..",
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_picture(
            "lwss",
            "Lightweight spaceship (period 4)",
            "
.o..o
o....
o...o
oooo.",
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_picture(
            "glider-gun",
            "Gosper gun, emits a glider every 30 generations",
            "
........................o...........
......................o.o...........
............oo......oo............oo
...........o...o....oo............oo
oo........o.....o...oo..............
oo........o...o.oo....o.o...........
..........o.....o.......o...........
...........o...o....................
............oo......................",
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::from_picture(
            "r-pentomino",
            "Methuselah, stabilizes at gen 1103",
            "
.oo
oo.
.o.",
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::from_picture(
            "acorn",
            "Methuselah, stabilizes at gen 5206",
            "
.o.....
...o...
oo..ooo",
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_picture(
            "block",
            "Still life",
            "
oo
oo",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
