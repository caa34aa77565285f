//! Text rendering of generations. The only module that touches the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::application::Simulation;
use crate::domain::{Coord, Grid};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// One frame, row-major: `.` dead, `o` alive, one line per row
pub fn render_frame(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut frame = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height {
        frame.extend((0..width).map(|x| grid.get(Coord::new(x, y)).glyph()));
        frame.push('\n');
    }
    frame
}

pub fn status_line(sim: &Simulation) -> String {
    let (width, height) = sim.grid().dimensions();
    format!(
        "gen {} | pop {} | {}x{} | {} ({})",
        sim.generation(),
        format_number(sim.population()),
        width,
        height,
        sim.evolver().rule().notation(),
        sim.evolver().algorithm().name(),
    )
}

/// Writes frames to a terminal, optionally clearing it first
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn draw(&mut self, sim: &Simulation) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.write_all(render_frame(sim.grid()).as_bytes())?;
        writeln!(self.out, "{}", status_line(sim))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
