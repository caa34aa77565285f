use std::collections::BTreeSet;

use rand::Rng;

use super::{Cell, Coord, GridError, error::Result};

/// Grid is one generation of the automaton on a fixed `width × height` domain.
/// Every in-bounds coordinate holds an explicit state; everything outside
/// reads as dead and is never stored. Cloning yields an independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
        })
    }

    /// Create a grid and mark the given coordinates alive
    pub fn with_alive<I>(width: i32, height: i32, alive: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let mut grid = Self::new(width, height)?;
        for coord in alive {
            grid.set(coord.into(), true)?;
        }
        Ok(grid)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Convert 2D coordinates to 1D index; `None` outside the domain
    pub(crate) fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// State at `coord`. Out-of-bounds reads are dead, never an error.
    pub fn get(&self, coord: Coord) -> Cell {
        self.index_of(coord)
            .map_or(Cell::Dead, |idx| self.cells[idx])
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).is_alive()
    }

    /// Set the state at `coord`. Writes outside the domain are rejected.
    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<()> {
        let idx = self.index_of(coord).ok_or(GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = Cell::from_alive(alive);
        Ok(())
    }

    /// Total number of alive cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// All in-bounds coordinates, row-major
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = self.dimensions();
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    /// Row-major slice of every stored cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The set of alive coordinates
    pub fn living_cells(&self) -> BTreeSet<Coord> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Build a grid directly from row-major cells produced by an evolver
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self { width, height, cells }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize every cell; `density` is the chance of a cell being alive.
    /// Out-of-range densities are clamped and NaN counts as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }
}
