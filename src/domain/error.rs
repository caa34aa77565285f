use super::Coord;

/// Errors raised while building or seeding a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("coordinate {coord} is outside the {width}x{height} grid")]
    OutOfBounds { coord: Coord, width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
