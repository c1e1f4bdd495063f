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

use crate::dyn_vector::DynVector;
use crate::error::LinAlgError;
use crate::matrix_ops;
use crate::small_matrix::SmallMatrix;
use crate::traits::{Matrixish, Sealed, Vectorish};
use crate::Float;
use serde::{Deserialize, Serialize};

/// A heap allocated matrix of `nrows` by `ncols`, whose size is only known
/// at runtime. It is stored as `ncols` columns, each a [`DynVector`] of
/// length `nrows`.
///
/// Elements are addressed as `m[column][row]`. Columns are borrowed as
/// slices, so they always have `rows()` elements.
///
/// ```
/// use matrix::DynMatrix;
/// let mut m = DynMatrix::zeros(2, 3);
/// m[2][1] = 5.0;
/// assert_eq!(m[2], [0.0, 5.0]);
/// ```
///
/// ```compile_fail
/// use matrix::{DynMatrix, DynVector};
/// let mut m = DynMatrix::eye(2);
/// m[0] = DynVector::new(5, 1.0);
/// ```
///
/// ```compile_fail
/// use matrix::{DynMatrix, DynVector, Matrixish};
/// fn replace_first<M: Matrixish>(m: &mut M, col: M::Column) {
///     m.cols_mut()[0] = col;
/// }
/// let mut m = DynMatrix::eye(2);
/// replace_first(&mut m, DynVector::new(5, 1.0));
/// ```
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<DynVector>", try_from = "Vec<DynVector>")]
pub struct DynMatrix {
    ncols: usize,
    nrows: usize,
    cols: Vec<DynVector>,
}

impl std::fmt::Display for DynMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.nrows {
            write!(f, "\n\t")?;
            for col in self.cols.iter() {
                write!(f, "{}, ", col[row])?;
            }
        }
        Ok(())
    }
}

impl DynMatrix {
    /// Creates a `DynMatrix` of `nrows` and `ncols` with `v` in the
    /// diagonal and zeroes elsewhere.
    #[must_use]
    pub fn new(v: Float, nrows: usize, ncols: usize) -> Self {
        let mut ret = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            ret.cols[i][i] = v;
        }
        ret
    }

    /// Creates a `DynMatrix` of `nrows` and `ncols` full of zeroes
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            cols: vec![DynVector::new(nrows, 0.0); ncols],
        }
    }

    /// Creates a `DynMatrix` from its columns. They all need to be of the
    /// same length, which becomes the number of rows.
    pub fn from_columns(cols: Vec<DynVector>) -> Result<Self, LinAlgError> {
        let nrows = cols.first().map(|c| c.length()).unwrap_or(0);
        for c in cols.iter() {
            LinAlgError::check_dimension(nrows, c.length())?;
        }
        Ok(Self {
            nrows,
            ncols: cols.len(),
            cols,
        })
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    #[must_use]
    pub fn diag(data: Vec<Float>) -> Self {
        let n = data.len();
        let mut ret = Self::zeros(n, n);
        for (i, value) in data.into_iter().enumerate() {
            ret.cols[i][i] = value;
        }
        ret
    }

    /// Creates an Identity matrix of size NxN
    #[must_use]
    pub fn eye(n: usize) -> Self {
        Self::new(1.0, n, n)
    }

    /// Creates an empty Matrix (i.e., size 0x0)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks whether a Matrix has Zero columns and Zero rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 && self.ncols == 0
    }

    /// The number of rows
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// The number of columns
    pub fn columns(&self) -> usize {
        self.ncols
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Copies the data from another `DynMatrix` into `self`.
    pub fn copy_from(&mut self, other: &DynMatrix) -> Result<(), LinAlgError> {
        matrix_ops::check_same_shape(self, other)?;
        self.cols
            .iter_mut()
            .zip(other.cols.iter())
            .for_each(|(to, from)| to.as_mut_slice().copy_from_slice(from.as_slice()));
        Ok(())
    }

    /// Returns the transposed matrix
    pub fn transpose(&self) -> DynMatrix {
        matrix_ops::transpose(self)
            .unwrap_or_else(|e| panic!("Transposing a DynMatrix... {}", e))
    }

    /// Extracts row `i` as a [`DynVector`]
    pub fn row(&self, i: usize) -> Result<DynVector, LinAlgError> {
        matrix_ops::row(self, i)
    }

    /* ARITHMETIC OPERATION */

    /// Adds `self` with `other`, puting the result in `into`
    pub fn add_into(&self, other: &DynMatrix, into: &mut DynMatrix) -> Result<(), LinAlgError> {
        matrix_ops::check_same_shape(self, other)?;
        matrix_ops::check_same_shape(self, into)?;
        into.copy_from(self)?;
        matrix_ops::add_assign(into, other)
    }

    /// Substracts `other` from `self`, puting the result in `into`
    pub fn sub_into(&self, other: &DynMatrix, into: &mut DynMatrix) -> Result<(), LinAlgError> {
        matrix_ops::check_same_shape(self, other)?;
        matrix_ops::check_same_shape(self, into)?;
        into.copy_from(self)?;
        matrix_ops::sub_assign(into, other)
    }

    /// Scales a matrix by `s` and puts the result in `into`
    pub fn scale_into(&self, s: Float, into: &mut DynMatrix) -> Result<(), LinAlgError> {
        into.copy_from(self)?;
        matrix_ops::scale_assign(into, s);
        Ok(())
    }

    /// Multiplies a matrix by `other`, putting the result into `into`
    pub fn prod_into(&self, other: &DynMatrix, into: &mut DynMatrix) -> Result<(), LinAlgError> {
        matrix_ops::multiply_into(self, other, into)
    }
}

impl Matrixish for DynMatrix {
    type Column = DynVector;

    fn rows(&self) -> usize {
        self.nrows
    }

    fn columns(&self) -> usize {
        self.ncols
    }

    fn cols(&self) -> &[DynVector] {
        &self.cols
    }

    fn cols_mut(&mut self, _: Sealed) -> &mut [DynVector] {
        &mut self.cols
    }

    fn with_shape(rows: usize, cols: usize, v: Float) -> Result<Self, LinAlgError> {
        Ok(Self::new(v, rows, cols))
    }
}


impl TryFrom<Vec<DynVector>> for DynMatrix {
    type Error = LinAlgError;
    fn try_from(cols: Vec<DynVector>) -> Result<Self, Self::Error> {
        Self::from_columns(cols)
    }
}

impl From<DynMatrix> for Vec<DynVector> {
    fn from(m: DynMatrix) -> Self {
        m.cols
    }
}

impl<const N: usize> From<SmallMatrix<N>> for DynMatrix {
    fn from(m: SmallMatrix<N>) -> Self {
        Self {
            nrows: N,
            ncols: N,
            cols: m.cols().iter().map(|c| DynVector::from(*c)).collect(),
        }
    }
}

/* OPERATORS */

// Columns are handed out as slices, so their length cannot change.
impl std::ops::Index<usize> for DynMatrix {
    type Output = [Float];
    fn index(&self, i: usize) -> &Self::Output {
        if let Err(e) = LinAlgError::check_index(i, self.ncols) {
            panic!("{}", e)
        }
        self.cols[i].as_slice()
    }
}

impl std::ops::IndexMut<usize> for DynMatrix {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        if let Err(e) = LinAlgError::check_index(i, self.ncols) {
            panic!("{}", e)
        }
        self.cols[i].as_mut_slice()
    }
}

impl std::ops::Add<&DynMatrix> for &DynMatrix {
    type Output = DynMatrix;

    fn add(self, other: &DynMatrix) -> Self::Output {
        matrix_ops::add(self, other)
            .unwrap_or_else(|e| panic!("Matrices being added are of different sizes... {}", e))
    }
}

impl std::ops::Add for DynMatrix {
    type Output = DynMatrix;

    fn add(mut self, other: DynMatrix) -> Self::Output {
        self += &other;
        self
    }
}

impl std::ops::AddAssign<&DynMatrix> for DynMatrix {
    fn add_assign(&mut self, other: &DynMatrix) {
        if let Err(e) = matrix_ops::add_assign(self, other) {
            panic!("Matrices being added are of different sizes... {}", e)
        }
    }
}

impl std::ops::Sub<&DynMatrix> for &DynMatrix {
    type Output = DynMatrix;

    fn sub(self, other: &DynMatrix) -> Self::Output {
        matrix_ops::sub(self, other)
            .unwrap_or_else(|e| panic!("Matrices being substracted are of different sizes... {}", e))
    }
}

impl std::ops::Sub for DynMatrix {
    type Output = DynMatrix;

    fn sub(mut self, other: DynMatrix) -> Self::Output {
        self -= &other;
        self
    }
}

impl std::ops::SubAssign<&DynMatrix> for DynMatrix {
    fn sub_assign(&mut self, other: &DynMatrix) {
        if let Err(e) = matrix_ops::sub_assign(self, other) {
            panic!("Matrices being substracted are of different sizes... {}", e)
        }
    }
}

impl std::ops::Neg for &DynMatrix {
    type Output = DynMatrix;

    fn neg(self) -> Self::Output {
        matrix_ops::negate(self)
    }
}

impl std::ops::Neg for DynMatrix {
    type Output = DynMatrix;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl std::ops::Mul<Float> for &DynMatrix {
    type Output = DynMatrix;

    fn mul(self, s: Float) -> Self::Output {
        matrix_ops::scale(self, s)
    }
}

impl std::ops::Mul<Float> for DynMatrix {
    type Output = DynMatrix;

    fn mul(mut self, s: Float) -> Self::Output {
        self *= s;
        self
    }
}

impl std::ops::Mul<&DynMatrix> for Float {
    type Output = DynMatrix;

    fn mul(self, m: &DynMatrix) -> Self::Output {
        m * self
    }
}

impl std::ops::Mul<DynMatrix> for Float {
    type Output = DynMatrix;

    fn mul(self, m: DynMatrix) -> Self::Output {
        m * self
    }
}

impl std::ops::Mul<&DynMatrix> for &DynMatrix {
    type Output = DynMatrix;
    fn mul(self, other: &DynMatrix) -> Self::Output {
        matrix_ops::multiply(self, other)
            .unwrap_or_else(|e| panic!("Size mismatch for DynMatrix multiplication... {}", e))
    }
}

impl std::ops::Mul for DynMatrix {
    type Output = DynMatrix;
    fn mul(self, other: DynMatrix) -> Self::Output {
        &self * &other
    }
}

impl std::ops::Mul<&DynVector> for &DynMatrix {
    type Output = DynVector;
    fn mul(self, v: &DynVector) -> Self::Output {
        matrix_ops::multiply_vector(self, v)
            .unwrap_or_else(|e| panic!("Size mismatch for DynMatrix-vector multiplication... {}", e))
    }
}

impl std::ops::Mul<DynVector> for DynMatrix {
    type Output = DynVector;
    fn mul(self, v: DynVector) -> Self::Output {
        &self * &v
    }
}

impl std::ops::MulAssign<Float> for DynMatrix {
    fn mul_assign(&mut self, s: Float) {
        matrix_ops::scale_assign(self, s)
    }
}

impl std::ops::MulAssign<&DynMatrix> for DynMatrix {
    fn mul_assign(&mut self, other: &DynMatrix) {
        *self = &*self * other;
    }
}

impl std::ops::Div<Float> for &DynMatrix {
    type Output = DynMatrix;
    fn div(self, s: Float) -> Self::Output {
        matrix_ops::unscale(self, s).unwrap_or_else(|e| panic!("Matrix being divided... {}", e))
    }
}

impl std::ops::Div<Float> for DynMatrix {
    type Output = DynMatrix;
    fn div(mut self, s: Float) -> Self::Output {
        self /= s;
        self
    }
}

impl std::ops::DivAssign<Float> for DynMatrix {
    fn div_assign(&mut self, s: Float) {
        if let Err(e) = matrix_ops::unscale_assign(self, s) {
            panic!("Matrix being divided... {}", e)
        }
    }
}
