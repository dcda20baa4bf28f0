/* ************************************************************************ **
** This file is part of dmx, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, Result};

impl Matrix {
    /// Change the number of rows, keeping the leading rows and zero-filling new ones.
    pub fn set_rows(&mut self, rows: usize) -> Result<()>
    { self.resize((rows, self.num_cols())) }

    /// Change the number of columns, keeping the leading values of each row
    /// and zero-filling new ones.
    pub fn set_cols(&mut self, cols: usize) -> Result<()>
    { self.resize((self.num_rows(), cols)) }

    /// Change both dimensions at once.
    ///
    /// The overlapping top-left block keeps its values and everything else is
    /// zero.  Either the whole resize happens or, on error, `self` is left
    /// exactly as it was.
    pub fn resize(&mut self, (rows, cols): (usize, usize)) -> Result<()>
    {
        self.ensure_not_empty()?;
        let mut out = Matrix::zeros((rows, cols))?;

        // zip stops at whichever row count is smaller
        let keep = self.num_cols().min(cols);
        for (dest, src) in out.rows_mut().zip(self.rows()) {
            dest[..keep].copy_from_slice(&src[..keep]);
        }

        debug!("resizing matrix from {:?} to {:?}", self.dims(), out.dims());
        self.replace_storage(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::MatrixError;
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix
    { Matrix::from_rows(rows).unwrap() }

    #[test]
    fn grow_rows() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.set_rows(3).unwrap();
        assert_eq!(a.dims(), (3, 2));
        assert_eq!(a.row_major_data(), &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn shrink_rows() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        a.set_rows(1).unwrap();
        assert_eq!(a.row_major_data(), &[1.0, 2.0]);
    }

    #[test]
    fn shrink_and_grow_cols() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.set_cols(1).unwrap();
        assert_eq!(a.dims(), (2, 1));
        assert_eq!(a.row_major_data(), &[1.0, 3.0]);

        a.set_cols(3).unwrap();
        assert_eq!(a.row_major_data(), &[1.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn resize_both() {
        let mut a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        a.resize((3, 2)).unwrap();
        assert_eq!(a.row_major_data(), &[1.0, 2.0, 4.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn failed_resize_changes_nothing() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.set_rows(0).unwrap_err(), MatrixError::InvalidDimension { rows: 0, cols: 2 });
        assert_eq!(a.set_cols(0).unwrap_err(), MatrixError::InvalidDimension { rows: 2, cols: 0 });
        assert_eq!(a.dims(), (2, 2));
        assert_eq!(a.row_major_data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn resize_of_empty_fails() {
        let mut a = Matrix::new();
        a.clear();
        assert_eq!(a.set_rows(2).unwrap_err(), MatrixError::EmptyMatrix);
        assert_eq!(a.set_cols(2).unwrap_err(), MatrixError::EmptyMatrix);
        assert_eq!(a.dims(), (0, 0));
    }
}
