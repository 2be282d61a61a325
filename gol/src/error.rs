use thiserror::Error;

use crate::CellId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Both dimensions must be at least one and their product must fit in a
    /// `usize`.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("cell id {id} is outside 1..={max}")]
    InvalidCellId { id: CellId, max: usize },
    #[error("({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("{0}")]
    Parse(String),
}
