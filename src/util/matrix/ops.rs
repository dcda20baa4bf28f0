/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementwise, scalar and matrix arithmetic.
//!
//! The checked methods return `Result`.  The operator impls are thin wrappers
//! around them that panic with the error message instead, since operators
//! cannot report failure.

use crate::{Matrix, MatrixError, Result};
use ::std::ops::{Add, Sub, Mul, AddAssign, SubAssign, MulAssign};
use ::itertools::Itertools;

impl Matrix {
    /// In-place elementwise sum.
    ///
    /// On error, `self` is left untouched.
    pub fn sum_mut(&mut self, other: &Matrix) -> Result<()>
    { self.zip_mut_with(other, |a, b| *a += b) }

    /// In-place elementwise difference.
    ///
    /// On error, `self` is left untouched.
    pub fn sub_mut(&mut self, other: &Matrix) -> Result<()>
    { self.zip_mut_with(other, |a, b| *a -= b) }

    pub fn try_add(&self, other: &Matrix) -> Result<Matrix>
    {
        let mut out = self.clone();
        out.sum_mut(other)?;
        Ok(out)
    }

    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix>
    {
        let mut out = self.clone();
        out.sub_mut(other)?;
        Ok(out)
    }

    /// Multiply every element by `scalar`.
    pub fn scale_mut(&mut self, scalar: f64)
    {
        for x in self.row_major_data_mut() {
            *x *= scalar;
        }
    }

    #[cfg_attr(feature = "nightly", must_use = "not an in-place operation!")]
    pub fn scaled(&self, scalar: f64) -> Matrix
    {
        let mut out = self.clone();
        out.scale_mut(scalar);
        out
    }

    /// Replace `self` with the matrix product `self * other`.
    ///
    /// The product is built in a separate buffer and swapped in afterwards,
    /// so `self` is left untouched on error.
    pub fn mul_mut(&mut self, other: &Matrix) -> Result<()>
    {
        let product = matmul(self, other)?;
        if product.dims() != self.dims() {
            debug!("matrix product changed shape from {:?} to {:?}", self.dims(), product.dims());
        }
        self.replace_storage(product);
        Ok(())
    }

    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix>
    { matmul(self, other) }

    fn zip_mut_with(&mut self, other: &Matrix, mut f: impl FnMut(&mut f64, f64)) -> Result<()>
    {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        if self.dims() != other.dims() {
            return Err(MatrixError::DimensionMismatch { left: self.dims(), right: other.dims() });
        }
        for (a, &b) in self.row_major_data_mut().iter_mut().zip_eq(other.row_major_data()) {
            f(a, b);
        }
        Ok(())
    }
}

fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix>
{
    a.ensure_not_empty()?;
    b.ensure_not_empty()?;
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::IncompatibleShape { left: a.dims(), right: b.dims() });
    }

    // out[i][j] accumulates a[i][k] * b[k][j] over ascending k.
    // b is transposed first so that its columns are contiguous.
    let mut out = Matrix::zeros((a.num_rows(), b.num_cols()))?;
    let b_t = b.to_transpose();
    for (out_row, a_row) in out.rows_mut().zip_eq(a.rows()) {
        for (out, b_col) in out_row.iter_mut().zip_eq(b_t.rows()) {
            for (x, y) in a_row.iter().zip_eq(b_col) {
                *out += x * y;
            }
        }
    }
    Ok(out)
}

#[inline]
fn or_panic<T>(result: Result<T>) -> T
{
    match result {
        Ok(x) => x,
        Err(e) => panic!("{}", e),
    }
}

// ---------------------------------------------------------------------------
// operator impls

// Generates `Matrix op Matrix` for every combination of owned and borrowed
// operands.  Owned left operands are reused as the output buffer.
macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $in_place:ident) => {
        impl<'a, 'b> $Op<&'b Matrix> for &'a Matrix {
            type Output = Matrix;

            fn $op(self, rhs: &'b Matrix) -> Matrix
            { self.clone().$op(rhs) }
        }

        impl<'b> $Op<&'b Matrix> for Matrix {
            type Output = Matrix;

            fn $op(mut self, rhs: &'b Matrix) -> Matrix
            {
                or_panic(self.$in_place(rhs));
                self
            }
        }

        impl<'a> $Op<Matrix> for &'a Matrix {
            type Output = Matrix;

            fn $op(self, rhs: Matrix) -> Matrix
            { self.$op(&rhs) }
        }

        impl $Op<Matrix> for Matrix {
            type Output = Matrix;

            fn $op(self, rhs: Matrix) -> Matrix
            { self.$op(&rhs) }
        }

        impl<'b> $OpAssign<&'b Matrix> for Matrix {
            fn $op_assign(&mut self, rhs: &'b Matrix)
            { or_panic(self.$in_place(rhs)) }
        }

        impl $OpAssign<Matrix> for Matrix {
            fn $op_assign(&mut self, rhs: Matrix)
            { or_panic(self.$in_place(&rhs)) }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, sum_mut);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_mut);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul_mut);

// matrix * scalar
impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, scalar: f64) -> Matrix
    {
        self.scale_mut(scalar);
        self
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix
    { self.scaled(scalar) }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64)
    { self.scale_mut(scalar) }
}

// scalar * matrix
impl Mul<Matrix> for f64 {
    type Output = Matrix;

    #[inline(always)]
    fn mul(self, matrix: Matrix) -> Matrix
    { matrix * self }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    #[inline(always)]
    fn mul(self, matrix: &'a Matrix) -> Matrix
    { matrix * self }
}
