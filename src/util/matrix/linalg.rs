/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError, Result, EPS};

impl Matrix {
    /// The `cols x rows` matrix with `out[(j, i)] == self[(i, j)]`.
    #[cfg_attr(feature = "nightly", must_use = "not an in-place operation!")]
    pub fn to_transpose(&self) -> Matrix
    {
        let (height, width) = self.dims();
        let src = self.row_major_data();
        let mut data = Vec::with_capacity(src.len());
        for c in 0..width {
            for r in 0..height {
                data.push(src[r * width + c]);
            }
        }
        Matrix::from_parts((width, height), data)
    }

    /// The submatrix with row `row` and column `col` removed.
    ///
    /// The remaining rows and columns keep their relative order.  The minor of
    /// a matrix with a single row or column is the empty matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix>
    {
        let (height, width) = self.dims();
        if row >= height || col >= width {
            return Err(MatrixError::IndexOutOfRange { index: (row, col), dims: self.dims() });
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix
    {
        let (height, width) = self.dims();
        if height == 1 || width == 1 {
            return Matrix::empty();
        }

        let mut data = Vec::with_capacity((height - 1) * (width - 1));
        for (_, src_row) in self.rows().enumerate().filter(|&(r, _)| r != row) {
            data.extend_from_slice(&src_row[..col]);
            data.extend_from_slice(&src_row[col + 1..]);
        }
        Matrix::from_parts((height - 1, width - 1), data)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// This recurses all the way down to 2x2 minors without any pivoting,
    /// so it takes O(n!) time.
    pub fn determinant(&self) -> Result<f64>
    {
        self.ensure_square()?;
        if self.is_empty() {
            return Err(MatrixError::InvalidDimension { rows: 0, cols: 0 });
        }
        Ok(self.determinant_unchecked())
    }

    // requires a non-empty square matrix
    fn determinant_unchecked(&self) -> f64
    {
        let n = self.num_rows();
        let m = self.row_major_data();
        match n {
            1 => m[0],
            2 => m[0] * m[3] - m[1] * m[2],
            _ => {
                trace!("expanding the determinant of a {}x{} matrix", n, n);
                (0..n)
                    .map(|c| sign(c) * m[c] * self.minor_unchecked(0, c).determinant_unchecked())
                    .sum()
            },
        }
    }

    /// The matrix of cofactors, `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// A 1x1 matrix has no cofactors, since its only minor is empty, so this
    /// fails with `InvalidDimension` for it just like `determinant` does.
    pub fn cofactor_matrix(&self) -> Result<Matrix>
    {
        self.ensure_square()?;
        let n = self.num_rows();
        let mut out = Matrix::zeros((n, n))?;
        for r in 0..n {
            for c in 0..n {
                let minor_det = self.minor_unchecked(r, c).determinant()?;
                out[(r, c)] = sign(r + c) * minor_det;
            }
        }
        Ok(out)
    }

    /// The transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix>
    { self.cofactor_matrix().map(|cofactors| cofactors.to_transpose()) }

    /// Matrix inverse, computed as the adjugate divided by the determinant.
    ///
    /// Fails with `SingularMatrix` when `|det| < EPS`.  Like `adjugate`, this
    /// requires at least a 2x2 matrix.
    pub fn inverse(&self) -> Result<Matrix>
    {
        let det = self.determinant()?;
        debug!("inverting a {}x{} matrix with determinant {:e}", self.num_rows(), self.num_cols(), det);
        if det.abs() < EPS {
            warn!("refusing to invert a matrix with determinant {:e}", det);
            return Err(MatrixError::SingularMatrix { det });
        }

        let mut out = self.adjugate()?;
        out.scale_mut(1.0 / det);
        Ok(out)
    }

    fn ensure_square(&self) -> Result<()>
    {
        match self.is_square() {
            true => Ok(()),
            false => Err(MatrixError::NotSquare { rows: self.num_rows(), cols: self.num_cols() }),
        }
    }
}

#[inline(always)]
fn sign(k: usize) -> f64
{
    match k % 2 {
        0 => 1.0,
        _ => -1.0,
    }
}
