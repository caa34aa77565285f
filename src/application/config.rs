use std::time::Duration;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::domain::{Algorithm, Evolver, Grid, GridError, presets, rule_by_name};

/// Seed name that fills the grid randomly instead of placing a preset
pub const RANDOM_SEED: &str = "random";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("unknown rule `{0}` (use a name or B/S notation such as B36/S23)")]
    UnknownRule(String),

    #[error("density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Driver options. Dimensions and delay live here, never in the engine.
#[derive(Parser, Debug, Clone)]
#[command(name = "terminal_life", version, about = "Conway's Game of Life in the terminal")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 80, allow_negative_numbers = true)]
    pub width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 24, allow_negative_numbers = true)]
    pub height: i32,

    /// Pause between generations, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Stop after this many generations (runs forever if omitted)
    #[arg(long)]
    pub generations: Option<u64>,

    /// Preset placed at the center, or `random`
    #[arg(long, default_value = "blinker")]
    pub pattern: String,

    /// Chance of a cell being alive when the pattern is `random`
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for the random pattern, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rule name (conway, highlife, seeds, day-and-night) or B/S notation
    #[arg(long, default_value = "conway")]
    pub rule: String,

    /// Stepping strategy: serial or parallel
    #[arg(long, default_value = "serial")]
    pub algorithm: Algorithm,

    /// Print frames one after another instead of clearing the screen
    #[arg(long)]
    pub no_clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            delay_ms: 1000,
            generations: None,
            pattern: "blinker".to_owned(),
            density: 0.3,
            seed: None,
            rule: "conway".to_owned(),
            algorithm: Algorithm::default(),
            no_clear: false,
        }
    }
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Generation 0: an all-dead grid seeded with the configured pattern
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(self.width, self.height)?;

        if self.pattern.eq_ignore_ascii_case(RANDOM_SEED) {
            if !(0.0..=1.0).contains(&self.density) {
                return Err(ConfigError::InvalidDensity(self.density));
            }
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            grid.randomize(&mut rng, self.density);
            info!(density = self.density, seed = ?self.seed, "seeded random grid");
        } else {
            let pattern = presets::by_name(&self.pattern)
                .ok_or_else(|| ConfigError::UnknownPattern(self.pattern.clone()))?;
            let origin = pattern.centered_origin(&grid);
            pattern.place_on(&mut grid, origin)?;
            info!(pattern = pattern.name, %origin, "seeded grid");
        }

        Ok(grid)
    }

    pub fn build_evolver(&self) -> Result<Evolver, ConfigError> {
        let rule = rule_by_name(&self.rule)
            .ok_or_else(|| ConfigError::UnknownRule(self.rule.clone()))?;
        Ok(Evolver::new(rule).with_algorithm(self.algorithm))
    }
}
