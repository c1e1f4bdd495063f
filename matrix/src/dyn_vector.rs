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
use crate::small_vector::SVector;
use crate::traits::Vectorish;
use crate::vector_ops;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A heap allocated vector whose length is only known at runtime.
///
/// If the length is 2, 3 or 4 (and known when compiling) prefer
/// [`crate::Vector2`], [`crate::Vector3`] or [`crate::Vector4`], which
/// live on the stack.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynVector {
    data: Vec<Float>,
}

impl DynVector {
    /// Creates a `DynVector` of length `len` full of values `v`
    #[must_use]
    pub fn new(len: usize, v: Float) -> Self {
        Self {
            data: vec![v; len],
        }
    }

    /// The number of elements
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Computes the dot product with `other`.
    pub fn dot(&self, other: &Self) -> Result<Float, LinAlgError> {
        vector_ops::dot(self, other)
    }

    /// The euclidean length of the vector
    pub fn magnitude(&self) -> Float {
        vector_ops::magnitude(self)
    }

    /// Iterates the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Float> {
        self.data.iter()
    }
}

impl Vectorish for DynVector {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[Float] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [Float] {
        &mut self.data
    }

    fn with_length(len: usize, v: Float) -> Result<Self, LinAlgError> {
        Ok(Self::new(len, v))
    }
}

impl From<Vec<Float>> for DynVector {
    fn from(data: Vec<Float>) -> Self {
        Self { data }
    }
}

impl From<&[Float]> for DynVector {
    fn from(data: &[Float]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<const N: usize> From<SVector<N>> for DynVector {
    fn from(v: SVector<N>) -> Self {
        Self::from(v.as_slice())
    }
}

impl From<DynVector> for Vec<Float> {
    fn from(v: DynVector) -> Self {
        v.data
    }
}

impl std::fmt::Display for DynVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/* OPERATORS */

impl std::ops::Index<usize> for DynVector {
    type Output = Float;
    fn index(&self, i: usize) -> &Self::Output {
        if let Err(e) = LinAlgError::check_index(i, self.length()) {
            panic!("{}", e)
        }
        &self.data[i]
    }
}

impl std::ops::IndexMut<usize> for DynVector {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        if let Err(e) = LinAlgError::check_index(i, self.length()) {
            panic!("{}", e)
        }
        &mut self.data[i]
    }
}

impl std::ops::AddAssign<&DynVector> for DynVector {
    fn add_assign(&mut self, other: &DynVector) {
        if let Err(e) = vector_ops::add_assign(self, other) {
            panic!("Vectors being added are of different sizes... {}", e)
        }
    }
}

impl std::ops::SubAssign<&DynVector> for DynVector {
    fn sub_assign(&mut self, other: &DynVector) {
        if let Err(e) = vector_ops::sub_assign(self, other) {
            panic!("Vectors being substracted are of different sizes... {}", e)
        }
    }
}

impl std::ops::MulAssign<Float> for DynVector {
    fn mul_assign(&mut self, s: Float) {
        vector_ops::scale_assign(self, s)
    }
}

impl std::ops::DivAssign<Float> for DynVector {
    fn div_assign(&mut self, s: Float) {
        if let Err(e) = vector_ops::unscale_assign(self, s) {
            panic!("Vector being divided... {}", e)
        }
    }
}

impl std::ops::Add<&DynVector> for &DynVector {
    type Output = DynVector;
    fn add(self, other: &DynVector) -> DynVector {
        let mut ret = self.clone();
        ret += other;
        ret
    }
}

impl std::ops::Add for DynVector {
    type Output = DynVector;
    fn add(mut self, other: DynVector) -> DynVector {
        self += &other;
        self
    }
}

impl std::ops::Sub<&DynVector> for &DynVector {
    type Output = DynVector;
    fn sub(self, other: &DynVector) -> DynVector {
        let mut ret = self.clone();
        ret -= other;
        ret
    }
}

impl std::ops::Sub for DynVector {
    type Output = DynVector;
    fn sub(mut self, other: DynVector) -> DynVector {
        self -= &other;
        self
    }
}

impl std::ops::Neg for &DynVector {
    type Output = DynVector;
    fn neg(self) -> DynVector {
        vector_ops::negate(self)
    }
}

impl std::ops::Neg for DynVector {
    type Output = DynVector;
    fn neg(self) -> DynVector {
        -&self
    }
}

impl std::ops::Mul<Float> for &DynVector {
    type Output = DynVector;
    fn mul(self, s: Float) -> DynVector {
        vector_ops::scale(self, s)
    }
}

impl std::ops::Mul<Float> for DynVector {
    type Output = DynVector;
    fn mul(mut self, s: Float) -> DynVector {
        self *= s;
        self
    }
}

impl std::ops::Mul<&DynVector> for Float {
    type Output = DynVector;
    fn mul(self, v: &DynVector) -> DynVector {
        v * self
    }
}

impl std::ops::Mul<DynVector> for Float {
    type Output = DynVector;
    fn mul(self, v: DynVector) -> DynVector {
        v * self
    }
}

impl std::ops::Div<Float> for &DynVector {
    type Output = DynVector;
    fn div(self, s: Float) -> DynVector {
        let mut ret = self.clone();
        ret /= s;
        ret
    }
}

impl std::ops::Div<Float> for DynVector {
    type Output = DynVector;
    fn div(mut self, s: Float) -> DynVector {
        self /= s;
        self
    }
}
