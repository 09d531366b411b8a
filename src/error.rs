use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both sides must be at least 1 and the cell count must fit in memory")]
    InvalidDimensions { width: usize, height: usize },

    #[error("failed to allocate storage for {cells} cells")]
    Allocation { cells: usize },

    #[error("cell ({x}, {y}) is outside of a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("cells {a:?} and {b:?} are not adjacent")]
    NotAdjacent { a: (usize, usize), b: (usize, usize) },

    #[error("invalid step budget '{0}': expected a positive number or 'instant'")]
    InvalidStepBudget(String),
}
