/// Cell is the state of a single grid coordinate.
/// A cell carries nothing but whether it is alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Character used when printing a frame
    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => 'o',
            Cell::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_alive(alive)
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
