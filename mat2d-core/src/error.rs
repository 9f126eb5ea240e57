use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Operation attempted on a blank matrix")]
    InvalidState,

    #[error("Index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Incompatible matrix dimensions: {0}")]
    DimensionMismatch(String),

    #[error("Matrix is not invertible: {0}")]
    NotInvertible(String),
}
