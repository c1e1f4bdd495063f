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

use crate::error::LinAlgError;
use crate::matrix_ops;
use crate::small_vector::SVector;
use crate::traits::{Matrixish, Sealed};
use crate::Float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A square `N` by `N` matrix stored on the stack, as `N` columns
/// of [`SVector<N>`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallMatrix<const N: usize> {
    cols: [SVector<N>; N],
}

/// A 2 by 2 matrix
pub type Matrix2 = SmallMatrix<2>;

/// A 3 by 3 matrix
pub type Matrix3 = SmallMatrix<3>;

/// A 4 by 4 matrix
pub type Matrix4 = SmallMatrix<4>;

impl<const N: usize> Default for SmallMatrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> SmallMatrix<N> {
    /// Creates a matrix with `v` in the diagonal and zeroes elsewhere
    /// (i.e., a scaled identity matrix).
    #[must_use]
    pub fn new(v: Float) -> Self {
        let mut cols = [SVector::<N>::zeros(); N];
        for (i, c) in cols.iter_mut().enumerate() {
            c[i] = v;
        }
        Self { cols }
    }

    /// Creates an Identity matrix
    #[must_use]
    pub fn eye() -> Self {
        Self::new(1.0)
    }

    /// Creates a matrix full of zeroes
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            cols: [SVector::<N>::zeros(); N],
        }
    }

    /// Creates a matrix from its columns
    #[must_use]
    pub fn from_columns(cols: [SVector<N>; N]) -> Self {
        Self { cols }
    }

    /// The number of rows (i.e., `N`)
    pub const fn rows(&self) -> usize {
        N
    }

    /// The number of columns (i.e., `N`)
    pub const fn columns(&self) -> usize {
        N
    }

    /// Returns the transposed matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        matrix_ops::transpose(self)
            .unwrap_or_else(|e| panic!("Transposing a SmallMatrix... {}", e))
    }
}

impl<const N: usize> Matrixish for SmallMatrix<N> {
    type Column = SVector<N>;

    fn rows(&self) -> usize {
        N
    }

    fn columns(&self) -> usize {
        N
    }

    fn cols(&self) -> &[SVector<N>] {
        &self.cols
    }

    fn cols_mut(&mut self, _: Sealed) -> &mut [SVector<N>] {
        &mut self.cols
    }

    fn with_shape(rows: usize, cols: usize, v: Float) -> Result<Self, LinAlgError> {
        LinAlgError::check_dimension(N, rows)?;
        LinAlgError::check_dimension(N, cols)?;
        Ok(Self::new(v))
    }
}


impl<const N: usize> std::fmt::Display for SmallMatrix<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..N {
            write!(f, "\n\t")?;
            for col in self.cols.iter() {
                write!(f, "{}, ", col[row])?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> Serialize for SmallMatrix<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cols.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for SmallMatrix<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v: Vec<SVector<N>> = Vec::deserialize(deserializer)?;
        let len = v.len();
        let cols: [SVector<N>; N] = v.try_into().map_err(|_| {
            serde::de::Error::invalid_length(len, &format!("{} columns", N).as_str())
        })?;
        Ok(Self { cols })
    }
}

/* OPERATORS */

impl<const N: usize> std::ops::Index<usize> for SmallMatrix<N> {
    type Output = SVector<N>;
    fn index(&self, i: usize) -> &Self::Output {
        if let Err(e) = LinAlgError::check_index(i, N) {
            panic!("{}", e)
        }
        &self.cols[i]
    }
}

impl<const N: usize> std::ops::IndexMut<usize> for SmallMatrix<N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        if let Err(e) = LinAlgError::check_index(i, N) {
            panic!("{}", e)
        }
        &mut self.cols[i]
    }
}

impl<const N: usize> std::ops::AddAssign for SmallMatrix<N> {
    fn add_assign(&mut self, other: Self) {
        if let Err(e) = matrix_ops::add_assign(self, &other) {
            panic!("Matrices being added are of different sizes... {}", e)
        }
    }
}

impl<const N: usize> std::ops::SubAssign for SmallMatrix<N> {
    fn sub_assign(&mut self, other: Self) {
        if let Err(e) = matrix_ops::sub_assign(self, &other) {
            panic!("Matrices being substracted are of different sizes... {}", e)
        }
    }
}

impl<const N: usize> std::ops::MulAssign<Float> for SmallMatrix<N> {
    fn mul_assign(&mut self, s: Float) {
        matrix_ops::scale_assign(self, s)
    }
}

impl<const N: usize> std::ops::DivAssign<Float> for SmallMatrix<N> {
    fn div_assign(&mut self, s: Float) {
        if let Err(e) = matrix_ops::unscale_assign(self, s) {
            panic!("Matrix being divided... {}", e)
        }
    }
}

impl<const N: usize> std::ops::MulAssign for SmallMatrix<N> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<const N: usize> std::ops::Add for SmallMatrix<N> {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<const N: usize> std::ops::Sub for SmallMatrix<N> {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<const N: usize> std::ops::Neg for SmallMatrix<N> {
    type Output = Self;
    fn neg(self) -> Self {
        matrix_ops::negate(&self)
    }
}

impl<const N: usize> std::ops::Mul<Float> for SmallMatrix<N> {
    type Output = Self;
    fn mul(mut self, s: Float) -> Self {
        self *= s;
        self
    }
}

impl<const N: usize> std::ops::Mul<SmallMatrix<N>> for Float {
    type Output = SmallMatrix<N>;
    fn mul(self, m: SmallMatrix<N>) -> SmallMatrix<N> {
        m * self
    }
}

impl<const N: usize> std::ops::Div<Float> for SmallMatrix<N> {
    type Output = Self;
    fn div(mut self, s: Float) -> Self {
        self /= s;
        self
    }
}

impl<const N: usize> std::ops::Mul for SmallMatrix<N> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        matrix_ops::multiply(&self, &other)
            .unwrap_or_else(|e| panic!("Size mismatch for SmallMatrix multiplication... {}", e))
    }
}

impl<const N: usize> std::ops::Mul<SVector<N>> for SmallMatrix<N> {
    type Output = SVector<N>;
    fn mul(self, v: SVector<N>) -> SVector<N> {
        matrix_ops::multiply_vector(&self, &v).unwrap_or_else(|e| {
            panic!("Size mismatch for SmallMatrix-vector multiplication... {}", e)
        })
    }
}
