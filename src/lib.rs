/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense real-valued matrices.
//!
//! This crate only gathers the workspace members under one name.  See
//! [`Matrix`] for the operations, and [`assert_close!`] for comparing
//! floating point results in tests.
//!
//! [`Matrix`]: struct.Matrix.html
//! [`assert_close!`]: macro.assert_close.html

pub use dmx_matrix::{Matrix, MatrixError, Result, EPS};
pub use dmx_matrix::{ContiguousRows, ContiguousRowsMut};

pub use dmx_assert_close::{assert_close, debug_assert_close};
pub use dmx_assert_close::{CheckClose, CheckCloseError, Tolerances};
