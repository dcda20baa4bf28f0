/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense, owned, row-major matrices of `f64`.
//!
//! A [`Matrix`] owns a single contiguous buffer of `rows * cols` values and
//! supports elementwise and matrix arithmetic, equality up to [`EPS`],
//! transposition, minors, cofactors, the determinant, the inverse, and
//! resizing that preserves existing data.
//!
//! The determinant is computed by recursive cofactor expansion along the
//! first row. This is O(n!) and is meant for small matrices.
//!
//! [`Matrix`]: struct.Matrix.html
//! [`EPS`]: constant.EPS.html

#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)] extern crate dmx_assert_close;

pub use self::error::{MatrixError, Result};
mod error;

pub use self::matrix::{Matrix, ContiguousRows, ContiguousRowsMut};
mod matrix;

mod ops;
mod linalg;
mod resize;

/// Absolute tolerance used for element equality and for the singularity test.
///
/// Two elements `a` and `b` are equal when `|a - b| <= EPS`.
pub const EPS: f64 = 1e-7;
