use rayon::prelude::*;
use tracing::trace;

use super::{Algorithm, Cell, Coord, Grid, Rule, coord::neighbors_of, rules::default_rule};

/// Count live neighbors of `coord`. Neighbors past the edge read as dead,
/// so border cells simply see fewer of them.
pub fn count_live_neighbors(grid: &Grid, coord: Coord) -> u8 {
    neighbors_of(coord)
        .into_iter()
        .filter(|&n| grid.is_alive(n))
        .count() as u8
}

/// Evolver derives generation N+1 from generation N.
///
/// Every step reads only from the borrowed input grid and writes only into a
/// freshly allocated output grid, so no cell can observe a neighbor's state
/// from the generation being built.
pub struct Evolver {
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
}

impl Default for Evolver {
    fn default() -> Self {
        Self::new(default_rule())
    }
}

impl Evolver {
    pub fn new(rule: Box<dyn Rule>) -> Self {
        Self {
            rule,
            algorithm: Algorithm::default(),
        }
    }

    /// Set the stepping strategy (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Next state of a single coordinate, judged against `grid` alone
    fn next_cell(&self, grid: &Grid, coord: Coord) -> Cell {
        self.rule
            .evolve(grid.get(coord), count_live_neighbors(grid, coord))
    }

    /// Compute the next generation. The input is left untouched.
    pub fn step(&self, grid: &Grid) -> Grid {
        let next = match self.algorithm {
            Algorithm::Serial => self.step_serial(grid),
            Algorithm::Parallel => self.step_parallel(grid),
        };
        trace!(
            algorithm = self.algorithm.name(),
            before = grid.living_count(),
            after = next.living_count(),
            "stepped grid"
        );
        next
    }

    /// Apply `generations` steps in a row
    pub fn step_n(&self, grid: &Grid, generations: usize) -> Grid {
        (0..generations).fold(grid.clone(), |current, _| self.step(&current))
    }

    /// Pure functional evolution, row-major (serial)
    fn step_serial(&self, grid: &Grid) -> Grid {
        let (width, height) = grid.dimensions();
        let cells = grid
            .coords()
            .map(|coord| self.next_cell(grid, coord))
            .collect();
        Grid::from_cells(width, height, cells)
    }

    /// Parallel evolution using rayon, one task per row
    fn step_parallel(&self, grid: &Grid) -> Grid {
        let (width, height) = grid.dimensions();
        let cells: Vec<Cell> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| (0..width).map(move |x| Coord::new(x, y)))
            .map(|coord| self.next_cell(grid, coord))
            .collect();
        Grid::from_cells(width, height, cells)
    }

    /// Compute the next generation visiting coordinates in the given order.
    /// Any order covering the whole domain gives the same grid as `step`;
    /// in-domain coordinates left out of `order` come out dead.
    pub fn step_in_order<I>(&self, grid: &Grid, order: I) -> Grid
    where
        I: IntoIterator<Item = Coord>,
    {
        let (width, height) = grid.dimensions();
        let mut cells = vec![Cell::Dead; grid.cells().len()];
        for coord in order {
            if let Some(idx) = grid.index_of(coord) {
                cells[idx] = self.next_cell(grid, coord);
            }
        }
        Grid::from_cells(width, height, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeLikeRule, presets};
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
    use std::collections::BTreeSet;

    fn conway() -> Evolver {
        Evolver::default()
    }

    fn set_of(cells: &[(i32, i32)]) -> BTreeSet<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_count_live_neighbors() {
        let grid = Grid::with_alive(5, 5, [(1, 1), (2, 1), (3, 3), (2, 2)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, Coord::new(2, 2)), 3);
        assert_eq!(count_live_neighbors(&grid, Coord::new(0, 0)), 1);
        assert_eq!(count_live_neighbors(&grid, Coord::new(4, 4)), 1);
        // The cell itself is not counted
        assert_eq!(count_live_neighbors(&grid, Coord::new(1, 1)), 2);
    }

    #[test]
    fn test_block_still_life() {
        let grid = Grid::with_alive(6, 6, [(2, 2), (3, 2), (2, 3), (3, 3)]).unwrap();
        let next = conway().step(&grid);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_underpopulation() {
        let grid = Grid::with_alive(5, 5, [(2, 2)]).unwrap();
        let next = conway().step(&grid);
        assert_eq!(next.living_count(), 0);
    }

    #[test]
    fn test_birth_from_l_shape() {
        let grid = Grid::with_alive(5, 5, [(1, 1), (2, 1), (1, 2)]).unwrap();
        let next = conway().step(&grid);

        assert_eq!(count_live_neighbors(&grid, Coord::new(2, 2)), 3);
        assert!(next.is_alive(Coord::new(2, 2)));
        // The L closes into a block
        assert_eq!(next.living_cells(), set_of(&[(1, 1), (2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn test_overpopulation() {
        // Plus sign: the center has 4 live neighbors
        let grid = Grid::with_alive(5, 5, [(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, Coord::new(2, 2)), 4);
        let next = conway().step(&grid);
        assert!(!next.is_alive(Coord::new(2, 2)));
    }

    #[test]
    fn test_edge_totality() {
        let grid = Grid::with_alive(3, 3, [(0, 0)]).unwrap();
        let next = conway().step(&grid);
        assert_eq!(next.dimensions(), (3, 3));
        assert_eq!(next.living_count(), 0);
    }

    #[test]
    fn test_corner_cells_see_dead_border() {
        // A block in the corner survives: off-grid neighbors count as dead
        let grid = Grid::with_alive(4, 4, [(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(conway().step(&grid), grid);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = Grid::with_alive(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let snapshot = grid.clone();
        let _ = conway().step(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::with_alive(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let evolver = conway();

        let vertical = evolver.step(&horizontal);
        assert_eq!(vertical.living_cells(), set_of(&[(2, 1), (2, 2), (2, 3)]));
        assert_eq!(evolver.step(&vertical), horizontal);
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let glider = presets::glider();
        let mut grid = Grid::new(12, 12).unwrap();
        glider.place_on(&mut grid, Coord::new(3, 3)).unwrap();
        let start = grid.living_cells();

        let end = conway().step_n(&grid, 4).living_cells();
        let expected: BTreeSet<_> = start.iter().map(|c| c.offset(1, 1)).collect();
        assert_eq!(end, expected);
    }

    #[test]
    fn test_reverse_and_shuffled_order_match_step() {
        let mut grid = Grid::new(16, 12).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(3), 0.4);
        let evolver = conway();
        let expected = evolver.step(&grid);

        let mut order: Vec<Coord> = grid.coords().collect();
        order.reverse();
        assert_eq!(evolver.step_in_order(&grid, order.iter().copied()), expected);

        order.shuffle(&mut StdRng::seed_from_u64(99));
        assert_eq!(evolver.step_in_order(&grid, order), expected);
    }

    #[test]
    fn test_step_in_order_skips_out_of_domain() {
        let grid = Grid::with_alive(4, 4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        let order = grid.coords().chain([Coord::new(-1, 0), Coord::new(9, 9)]);
        assert_eq!(conway().step_in_order(&grid, order), grid);
    }

    #[test]
    fn test_step_in_order_leaves_unvisited_cells_dead() {
        // Only the top row of a block is visited, so the bottom row is not written
        let grid = Grid::with_alive(4, 4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        let top_row = [Coord::new(1, 1), Coord::new(2, 1), Coord::new(-5, 1)];
        let next = conway().step_in_order(&grid, top_row);
        assert_eq!(next.living_cells(), set_of(&[(1, 1), (2, 1)]));
        assert_eq!(next.dimensions(), grid.dimensions());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(64, 40).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(11), 0.3);

        let serial = conway().step_n(&grid, 5);
        let parallel = conway().with_algorithm(Algorithm::Parallel).step_n(&grid, 5);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_custom_rule_is_applied() {
        // Under Seeds every live cell dies, so a block disappears
        let grid = Grid::with_alive(6, 6, [(2, 2), (3, 2), (2, 3), (3, 3)]).unwrap();
        let evolver = Evolver::new(Box::new(LifeLikeRule::seeds()));
        let next = evolver.step(&grid);
        assert!(grid.living_cells().iter().all(|&c| !next.is_alive(c)));
    }

    proptest! {
        #[test]
        fn prop_visit_order_does_not_matter(
            width in 1i32..12,
            height in 1i32..12,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(width, height).unwrap();
            grid.randomize(&mut rng, 0.5);
            let evolver = conway();

            let mut order: Vec<Coord> = grid.coords().collect();
            order.shuffle(&mut rng);
            prop_assert_eq!(evolver.step_in_order(&grid, order), evolver.step(&grid));
        }

        #[test]
        fn prop_parallel_equals_serial(
            width in 1i32..24,
            height in 1i32..24,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(width, height).unwrap();
            grid.randomize(&mut StdRng::seed_from_u64(seed), 0.35);

            let serial = conway().step(&grid);
            let parallel = conway().with_algorithm(Algorithm::Parallel).step(&grid);
            prop_assert_eq!(serial.dimensions(), grid.dimensions());
            prop_assert_eq!(serial, parallel);
        }
    }
}
