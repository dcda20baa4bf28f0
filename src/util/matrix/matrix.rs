/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{MatrixError, Result, EPS};
use ::std::ops::{Index, IndexMut};
use ::dmx_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Owned matrix of `f64` with C layout.
///
/// A valid matrix always has at least one row and one column. The only
/// exception is the *empty* matrix (`0x0`, no storage), which is what is
/// left behind by [`Matrix::take`] and [`Matrix::clear`].  An empty matrix
/// can be dropped or assigned over, but most operations reject it.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: height * width == data.len()
    height: usize,
    width: usize,
}

pub type ContiguousRows<'a> = ::std::slice::Chunks<'a, f64>;
pub type ContiguousRowsMut<'a> = ::std::slice::ChunksMut<'a, f64>;

impl Default for Matrix {
    /// A 1x1 matrix holding zero.
    fn default() -> Self
    { Matrix { data: vec![0.0], height: 1, width: 1 } }
}

// ---------------------------------------------------------------------------
// construction and lifecycle

impl Matrix {
    /// A 1x1 matrix holding zero.
    pub fn new() -> Self
    { Self::default() }

    /// A zero-filled matrix of the given shape.
    pub fn zeros((height, width): (usize, usize)) -> Result<Self>
    {
        let len = check_dims(height, width)?;
        Ok(Matrix { data: vec![0.0; len], height, width })
    }

    pub fn identity(n: usize) -> Result<Self>
    {
        let mut out = Self::zeros((n, n))?;
        for i in 0..n {
            out.data[i * n + i] = 1.0;
        }
        Ok(out)
    }

    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<f64>) -> Result<Self>
    {
        if data.len() != check_dims(height, width)? {
            return Err(MatrixError::BufferLength { dims: (height, width), len: data.len() });
        }
        Ok(Matrix { data, height, width })
    }

    /// Build a matrix from a list of rows, which must all have the same length.
    ///
    /// ```
    /// use dmx_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.dims(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self>
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let len = check_dims(height, width)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::BufferLength { dims: (height, width), len: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { data, height, width })
    }

    // for internal use by code that has already validated the shape
    pub(crate) fn from_parts((height, width): (usize, usize), data: Vec<f64>) -> Self
    {
        debug_assert_eq!(data.len(), height * width);
        Matrix { data, height, width }
    }

    /// The `0x0` state, with no allocation.
    pub(crate) fn empty() -> Self
    { Matrix { data: Vec::new(), height: 0, width: 0 } }

    /// Move the storage out of `self`, leaving it empty.
    ///
    /// No data is copied. The returned matrix holds exactly the values
    /// `self` held before the call.
    #[cfg_attr(feature = "nightly", must_use = "the taken matrix is dropped immediately if unused")]
    pub fn take(&mut self) -> Matrix
    {
        trace!("taking storage of a {}x{} matrix", self.height, self.width);
        ::std::mem::replace(self, Matrix::empty())
    }

    /// Release the current storage of `self` and take over the storage of `other`,
    /// which is left empty.
    pub fn transfer_from(&mut self, other: &mut Matrix)
    { *self = other.take(); }

    /// Release the storage and reset the shape to `0x0`.
    ///
    /// Calling this on an empty matrix does nothing.
    pub fn clear(&mut self)
    {
        if !self.is_empty() {
            trace!("releasing storage of a {}x{} matrix", self.height, self.width);
        }
        *self = Matrix::empty();
    }
}

// validates a shape and produces the buffer length it needs
fn check_dims(height: usize, width: usize) -> Result<usize>
{
    if height < 1 || width < 1 {
        return Err(MatrixError::InvalidDimension { rows: height, cols: width });
    }
    height.checked_mul(width)
        .ok_or(MatrixError::TooLarge { rows: height, cols: width })
}

// ---------------------------------------------------------------------------
// shape and element access

impl Matrix {
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn is_square(&self) -> bool { self.height == self.width }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [f64] { &mut self.data }

    // (chunks panics on a zero chunk size, hence the max)
    pub fn rows(&self) -> ContiguousRows<'_> { self.data.chunks(self.width.max(1)) }
    pub fn rows_mut(&mut self) -> ContiguousRowsMut<'_> { self.data.chunks_mut(self.width.max(1)) }

    pub fn row(&self, row: usize) -> Result<&[f64]>
    {
        if row >= self.height {
            return Err(MatrixError::IndexOutOfRange { index: (row, 0), dims: self.dims() });
        }
        let start = row * self.width;
        Ok(&self.data[start..start + self.width])
    }

    /// Mutable access to a single element, with bounds checking.
    pub fn at(&mut self, row: usize, col: usize) -> Result<&mut f64>
    {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64>
    { self.checked_offset(row, col).map(|offset| self.data[offset]) }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize>
    {
        if row >= self.height || col >= self.width {
            return Err(MatrixError::IndexOutOfRange { index: (row, col), dims: self.dims() });
        }
        Ok(row * self.width + col)
    }

    /// Replace the shape and storage of `self` in one step.
    ///
    /// Everything that changes the shape builds its replacement first and
    /// then goes through here, so `self` is never seen half-rebuilt.
    pub(crate) fn replace_storage(&mut self, replacement: Matrix)
    {
        debug_assert_eq!(replacement.data.len(), replacement.height * replacement.width);
        *self = replacement;
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<()>
    {
        match self.is_empty() {
            true => Err(MatrixError::EmptyMatrix),
            false => Ok(()),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &f64
    {
        match self.checked_offset(r, c) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64
    {
        match self.checked_offset(r, c) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

// ---------------------------------------------------------------------------
// equality

impl Matrix {
    /// Elementwise comparison with an absolute tolerance of [`EPS`].
    ///
    /// Matrices of different shapes are simply unequal. Comparing against an
    /// empty matrix is an error.
    ///
    /// [`EPS`]: constant.EPS.html
    pub fn equals(&self, other: &Matrix) -> Result<bool>
    { self.equals_with_tol(other, EPS) }

    /// Like `equals`, with a caller-chosen absolute tolerance.
    pub fn equals_with_tol(&self, other: &Matrix, tol: f64) -> Result<bool>
    {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        if self.dims() != other.dims() {
            return Ok(false);
        }
        Ok(self.data.iter().zip(&other.data).all(|(a, b)| (a - b).abs() <= tol))
    }
}

/// Approximate equality, as per [`Matrix::equals`].
///
/// # Panics
///
/// Panics if either matrix is empty.
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    {
        match self.equals(other) {
            Ok(eq) => eq,
            Err(e) => panic!("{}", e),
        }
    }
}

impl CheckClose for Matrix {
    type Scalar = f64;

    fn check_close(&self, other: &Matrix, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError<f64>>
    {
        if self.dims() != other.dims() {
            return Err(CheckCloseError::Shape { left: self.dims(), right: other.dims() });
        }
        self.data.check_close(&other.data, tol)
    }
}
