use tracing::debug;

use crate::domain::{Evolver, Grid};

/// Simulation orchestrates successive generations.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    evolver: Evolver,
    generation: u64,
}

impl Simulation {
    /// Start at generation 0 from a seeded grid
    pub fn new(grid: Grid, evolver: Evolver) -> Self {
        Self {
            grid,
            evolver,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn evolver(&self) -> &Evolver {
        &self.evolver
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.living_count()
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    /// Replace the current generation with the next one and hand back the
    /// previous grid for history or display.
    pub fn advance(&mut self) -> Grid {
        let next = self.evolver.step(&self.grid);
        let previous = std::mem::replace(&mut self.grid, next);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.population(),
            "advanced generation"
        );
        previous
    }

    /// Advance exactly `generations` generations
    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coord, presets};

    fn blinker_sim() -> Simulation {
        let grid = Grid::with_alive(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        Simulation::new(grid, Evolver::default())
    }

    #[test]
    fn test_starts_at_generation_zero() {
        let sim = blinker_sim();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 3);
        assert!(!sim.is_extinct());
    }

    #[test]
    fn test_advance_returns_previous_generation() {
        let mut sim = blinker_sim();
        let start = sim.grid().clone();

        let previous = sim.advance();
        assert_eq!(previous, start);
        assert_eq!(sim.generation(), 1);
        assert!(sim.grid().is_alive(Coord::new(1, 2)));
        assert!(!sim.grid().is_alive(Coord::new(2, 1)));
    }

    #[test]
    fn test_advance_by_counts_generations() {
        let mut sim = blinker_sim();
        sim.advance_by(4);
        assert_eq!(sim.generation(), 4);
        assert!(sim.grid().is_alive(Coord::new(2, 1)));
    }

    #[test]
    fn test_advance_by_keeps_counting_on_still_state() {
        let mut grid = Grid::new(8, 8).unwrap();
        presets::block().place_on(&mut grid, Coord::new(3, 3)).unwrap();
        let start = grid.clone();
        let mut sim = Simulation::new(grid, Evolver::default());

        sim.advance_by(10);
        assert_eq!(sim.generation(), 10);
        assert_eq!(sim.grid(), &start);
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let grid = Grid::with_alive(3, 3, [(1, 1)]).unwrap();
        let mut sim = Simulation::new(grid, Evolver::default());
        sim.advance();
        assert!(sim.is_extinct());
    }
}
