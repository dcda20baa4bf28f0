/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub type Result<T> = ::std::result::Result<T, MatrixError>;

/// Ways in which a matrix operation can be misused.
///
/// Every variant indicates a caller error; nothing here is retried or
/// recovered from internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// A requested shape has fewer than one row or column.
    #[error("invalid matrix dimensions {rows}x{cols}; both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// A requested shape has more elements than can be addressed.
    #[error("matrix dimensions {rows}x{cols} are too large")]
    TooLarge { rows: usize, cols: usize },

    /// Elementwise operation on matrices of different shapes.
    #[error("matrix dimensions do not match: {left:?} vs {right:?}")]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },

    /// Matrix product where the left width is not the right height.
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    IncompatibleShape { left: (usize, usize), right: (usize, usize) },

    #[error("the matrix must be square, but it is {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("the matrix is singular (determinant {det:e})")]
    SingularMatrix { det: f64 },

    #[error("index {index:?} is outside a matrix of shape {dims:?}")]
    IndexOutOfRange { index: (usize, usize), dims: (usize, usize) },

    /// The matrix has no storage (it was cleared or taken from).
    #[error("the matrix is empty")]
    EmptyMatrix,

    /// Raw data does not fit the requested shape.
    #[error("buffer of length {len} does not fit shape {dims:?}")]
    BufferLength { dims: (usize, usize), len: usize },
}
