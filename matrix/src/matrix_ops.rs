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

//! Arithmetic written once for anything that is [`Matrixish`]. Most of
//! it works column by column, through [`crate::vector_ops`].
//!
//! Elements are addressed as `[column][row]`.

use crate::error::LinAlgError;
use crate::traits::{Matrixish, Vectorish, SEALED};
use crate::vector_ops;
use crate::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fails unless `a` and `b` have the same number of rows and columns
pub fn check_same_shape<M: Matrixish, N: Matrixish>(a: &M, b: &N) -> Result<(), LinAlgError> {
    LinAlgError::check_dimension(a.rows(), b.rows())?;
    LinAlgError::check_dimension(a.columns(), b.columns())
}

/// Adds `other` into `this`
pub fn add_assign<M: Matrixish>(this: &mut M, other: &M) -> Result<(), LinAlgError> {
    check_same_shape(this, other)?;
    for (a, b) in this.cols_mut(SEALED).iter_mut().zip(other.cols()) {
        vector_ops::add_assign(a, b)?;
    }
    Ok(())
}

/// Substracts `other` from `this`
pub fn sub_assign<M: Matrixish>(this: &mut M, other: &M) -> Result<(), LinAlgError> {
    check_same_shape(this, other)?;
    for (a, b) in this.cols_mut(SEALED).iter_mut().zip(other.cols()) {
        vector_ops::sub_assign(a, b)?;
    }
    Ok(())
}

/// Multiplies every element in `this` by `s`
pub fn scale_assign<M: Matrixish>(this: &mut M, s: Float) {
    this.cols_mut(SEALED)
        .iter_mut()
        .for_each(|c| vector_ops::scale_assign(c, s));
}

/// Divides every element in `this` by `s`. Fails if `s` is zero.
pub fn unscale_assign<M: Matrixish>(this: &mut M, s: Float) -> Result<(), LinAlgError> {
    LinAlgError::check_divisor(s)?;
    for c in this.cols_mut(SEALED) {
        vector_ops::unscale_assign(c, s)?;
    }
    Ok(())
}

/// Returns `a + b`
pub fn add<M: Matrixish>(a: &M, b: &M) -> Result<M, LinAlgError> {
    let mut ret = a.clone();
    add_assign(&mut ret, b)?;
    Ok(ret)
}

/// Returns `a - b`
pub fn sub<M: Matrixish>(a: &M, b: &M) -> Result<M, LinAlgError> {
    let mut ret = a.clone();
    sub_assign(&mut ret, b)?;
    Ok(ret)
}

/// Returns `-a`
pub fn negate<M: Matrixish>(a: &M) -> M {
    let mut ret = a.clone();
    ret.cols_mut(SEALED)
        .iter_mut()
        .for_each(|c| *c = vector_ops::negate(c));
    ret
}

/// Returns `a * s`
pub fn scale<M: Matrixish>(a: &M, s: Float) -> M {
    let mut ret = a.clone();
    scale_assign(&mut ret, s);
    ret
}

/// Returns `a / s`, failing if `s` is zero
pub fn unscale<M: Matrixish>(a: &M, s: Float) -> Result<M, LinAlgError> {
    let mut ret = a.clone();
    unscale_assign(&mut ret, s)?;
    Ok(ret)
}

/// Checks if two matrices are exactly the same (as in `element == other_element`... beware Floats).
pub fn equals<M: Matrixish>(a: &M, b: &M) -> bool {
    if check_same_shape(a, b).is_err() {
        return false;
    }
    a.cols()
        .iter()
        .zip(b.cols())
        .all(|(x, y)| vector_ops::equals(x, y))
}

/// Returns a `columns()` by `rows()` matrix `t` such that `t[j][i] == a[i][j]`.
pub fn transpose<M: Matrixish>(a: &M) -> Result<M, LinAlgError> {
    // allocate with the shape swapped before writing
    let mut ret = M::with_shape(a.columns(), a.rows(), 0.0)?;
    for (i, col) in a.cols().iter().enumerate() {
        for (j, v) in col.as_slice().iter().enumerate() {
            ret.cols_mut(SEALED)[j].as_mut_slice()[i] = *v;
        }
    }
    Ok(ret)
}

/// Extracts row `index` as a vector of length `columns()`
pub fn row<M: Matrixish>(a: &M, index: usize) -> Result<M::Column, LinAlgError> {
    LinAlgError::check_index(index, a.rows())?;
    let mut ret = M::Column::with_length(a.columns(), 0.0)?;
    ret.as_mut_slice()
        .iter_mut()
        .zip(a.cols())
        .for_each(|(to, col)| *to = col.as_slice()[index]);
    Ok(ret)
}

/// Multiplies `a` by `b`. Requires `a.columns() == b.rows()`, and the result
/// is `a.rows()` by `b.columns()`.
///
/// Element `[i][j]` of the result is the dot product between row `j` of `a`
/// and column `i` of `b`.
pub fn multiply<M: Matrixish>(a: &M, b: &M) -> Result<M, LinAlgError> {
    LinAlgError::check_dimension(a.columns(), b.rows())?;
    let mut ret = M::with_shape(a.rows(), b.columns(), 0.0)?;
    multiply_into(a, b, &mut ret)?;
    Ok(ret)
}

/// Multiplies `a` by `b`, writing the result into `into`, which must
/// already be `a.rows()` by `b.columns()`. See [`multiply`].
pub fn multiply_into<M: Matrixish>(a: &M, b: &M, into: &mut M) -> Result<(), LinAlgError> {
    LinAlgError::check_dimension(a.columns(), b.rows())?;
    LinAlgError::check_dimension(a.rows(), into.rows())?;
    LinAlgError::check_dimension(b.columns(), into.columns())?;

    let trans = transpose(a)?;

    #[cfg(not(feature = "parallel"))]
    let cols = into.cols_mut(SEALED).iter_mut();
    #[cfg(feature = "parallel")]
    let cols = into.cols_mut(SEALED).par_iter_mut();

    cols.zip(b.cols()).for_each(|(col, other)| {
        col.as_mut_slice()
            .iter_mut()
            .zip(trans.cols())
            .for_each(|(item, a_row)| {
                *item = vector_ops::dot_slices(a_row.as_slice(), other.as_slice())
            });
    });

    Ok(())
}

/// Multiplies `a` by the column vector `v`. Requires `a.columns() == v.length()`,
/// and the result has length `a.rows()`.
pub fn multiply_vector<M: Matrixish>(a: &M, v: &M::Column) -> Result<M::Column, LinAlgError> {
    LinAlgError::check_dimension(a.columns(), v.length())?;

    let trans = transpose(a)?;
    let mut ret = M::Column::with_length(a.rows(), 0.0)?;
    ret.as_mut_slice()
        .iter_mut()
        .zip(trans.cols())
        .for_each(|(item, a_row)| *item = vector_ops::dot_slices(a_row.as_slice(), v.as_slice()));
    Ok(ret)
}

/// Builds a `rows` by `cols` matrix whose top-left block is a copy of
/// `source`. The rest follows the scaled-identity convention: `v` in the
/// diagonal, and zero everywhere else.
///
/// This is how a fixed matrix becomes a dynamic one, or a `Matrix3`
/// becomes a `Matrix4`.
pub fn resize<M: Matrixish, S: Matrixish>(
    source: &S,
    rows: usize,
    cols: usize,
    v: Float,
) -> Result<M, LinAlgError> {
    if source.rows() > rows {
        return Err(LinAlgError::DimensionMismatch {
            expected: rows,
            found: source.rows(),
        });
    }
    if source.columns() > cols {
        return Err(LinAlgError::DimensionMismatch {
            expected: cols,
            found: source.columns(),
        });
    }

    let mut ret = M::with_shape(rows, cols, v)?;
    for (to, from) in ret.cols_mut(SEALED).iter_mut().zip(source.cols()) {
        to.as_mut_slice()
            .iter_mut()
            .zip(from.as_slice())
            .for_each(|(a, b)| *a = *b);
    }
    Ok(ret)
}
