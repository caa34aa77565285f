mod config;
mod simulation;

pub use config::{Config, ConfigError, RANDOM_SEED};
pub use simulation::Simulation;
