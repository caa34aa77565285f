mod algorithm;
mod cell;
mod coord;
mod error;
mod evolver;
mod grid;
mod patterns;
mod rules;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use coord::{Coord, neighbors_of};
pub use error::GridError;
pub use evolver::{Evolver, count_live_neighbors};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, LifeLikeRule, Rule, all_rules, default_rule, rule_by_name};
