// Domain layer - grid, neighbor counting and the transition rule
pub mod domain;

// Application layer - configuration and generation bookkeeping
pub mod application;

// Infrastructure layer - terminal output
pub mod rendering;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Coord, Evolver, Grid, GridError, Pattern, Rule, presets};
pub use application::{Config, Simulation};
