/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Solves square linear systems $`A \times x = b`$.

use crate::error::LinAlgError;
use crate::traits::{Matrixish, Vectorish, SEALED};
use crate::Float;

/// Swaps rows `i` and `j` of `a`.
pub fn swap_rows<M: Matrixish>(a: &mut M, i: usize, j: usize) -> Result<(), LinAlgError> {
    LinAlgError::check_index(i, a.rows())?;
    LinAlgError::check_index(j, a.rows())?;
    for col in a.cols_mut(SEALED) {
        col.swap(i, j)?;
    }
    Ok(())
}

/// Multiplies row `i` of `a` by `s`.
pub fn scale_row<M: Matrixish>(a: &mut M, i: usize, s: Float) -> Result<(), LinAlgError> {
    LinAlgError::check_index(i, a.rows())?;
    a.cols_mut(SEALED)
        .iter_mut()
        .for_each(|col| col.as_mut_slice()[i] *= s);
    Ok(())
}

/// Adds row `from`, scaled by `s`, into row `into`.
pub fn add_scaled_row<M: Matrixish>(
    a: &mut M,
    from: usize,
    into: usize,
    s: Float,
) -> Result<(), LinAlgError> {
    LinAlgError::check_index(from, a.rows())?;
    LinAlgError::check_index(into, a.rows())?;
    a.cols_mut(SEALED).iter_mut().for_each(|col| {
        let data = col.as_mut_slice();
        data[into] += s * data[from];
    });
    Ok(())
}

/// Solves $`A \times x = b`$ using the [Gauss-Jordan elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
/// algorithm, for a square `a`. Neither `a` nor `b` are modified.
///
/// When a pivot is exactly zero, the rows below are searched for one with a
/// non-zero element in that column, and swapped in. If there is none, the
/// system is singular and a `SingularMatrix` error is returned (this does
/// not distinguish between systems with no solution and systems with
/// infinite solutions).
///
/// # Note
/// Only exact zeroes trigger a row swap. Nearly singular systems are
/// solved anyway, and the answer might be inaccurate.
pub fn gauss_jordan<M: Matrixish>(a: &M, b: &M::Column) -> Result<M::Column, LinAlgError> {
    LinAlgError::check_dimension(a.rows(), a.columns())?;
    LinAlgError::check_dimension(a.columns(), b.length())?;

    let n = b.length();
    let mut a = a.clone();
    let mut b = b.clone();

    for row in 0..n {
        // Get a non-zero pivot, swapping rows if needed
        if a.cols()[row].as_slice()[row] == 0.0 {
            let swap_with = (row + 1..n)
                .find(|&other| a.cols()[row].as_slice()[other] != 0.0)
                .ok_or(LinAlgError::SingularMatrix { pivot: row })?;

            log::trace!("Zero pivot in row {}... swapping with row {}", row, swap_with);
            swap_rows(&mut a, row, swap_with)?;
            b.swap(row, swap_with)?;
        }

        // Make the pivot equals to 1.
        let s = 1. / a.cols()[row].as_slice()[row];
        scale_row(&mut a, row, s)?;
        b.as_mut_slice()[row] *= s;

        // Eliminate this column from every other row
        for other in (0..n).filter(|&other| other != row) {
            let s = -a.cols()[row].as_slice()[other];
            if s == 0.0 {
                continue;
            }
            add_scaled_row(&mut a, row, other, s)?;
            let data = b.as_mut_slice();
            data[other] += s * data[row];
        }
    }

    log::debug!("Solved a {} by {} linear system", n, n);
    Ok(b)
}

/// Solves $`A \times x = b`$ for `x`. See [`gauss_jordan`].
pub fn solve<M: Matrixish>(a: &M, b: &M::Column) -> Result<M::Column, LinAlgError> {
    gauss_jordan(a, b)
}
