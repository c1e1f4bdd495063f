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
use crate::traits::Vectorish;
use crate::vector_ops;
use crate::Float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A vector of `N` components, stored inline (i.e., no heap).
///
/// Most vectors in a geometry or physics engine have 2, 3 or 4
/// components, so [`Vector2`], [`Vector3`] and [`Vector4`] are what
/// you will normally use. When the length is only known at runtime,
/// use [`DynVector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SVector<const N: usize> {
    data: [Float; N],
}

/// A vector with 2 components
pub type Vector2 = SVector<2>;

/// A vector with 3 components
pub type Vector3 = SVector<3>;

/// A vector with 4 components
pub type Vector4 = SVector<4>;

impl<const N: usize> Default for SVector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> SVector<N> {
    /// The number of components
    pub const LEN: usize = N;

    /// Creates a vector from its components
    pub const fn from_array(data: [Float; N]) -> Self {
        Self { data }
    }

    /// Creates a vector with all components equal to `v`
    pub const fn splat(v: Float) -> Self {
        Self { data: [v; N] }
    }

    /// Creates a vector full of zeroes
    pub const fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// The number of components (i.e., `N`)
    pub const fn length(&self) -> usize {
        N
    }

    /// Computes the dot product with `other`
    pub fn dot(&self, other: &Self) -> Float {
        vector_ops::dot(self, other)
            .unwrap_or_else(|e| panic!("Vectors being multiplied are of different sizes... {}", e))
    }

    /// The euclidean length of the vector
    pub fn magnitude(&self) -> Float {
        vector_ops::magnitude(self)
    }

    /// Returns a vector pointing in the same direction, but of
    /// magnitude 1.
    pub fn normalize(&self) -> Result<Self, LinAlgError> {
        vector_ops::normalize(self)
    }
}

impl SVector<2> {
    /// Creates a new [`Vector2`]
    pub const fn new(x: Float, y: Float) -> Self {
        Self { data: [x, y] }
    }
    /// The first component
    pub fn x(&self) -> Float {
        self.data[0]
    }
    /// The second component
    pub fn y(&self) -> Float {
        self.data[1]
    }
}

impl SVector<3> {
    /// Creates a new [`Vector3`]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { data: [x, y, z] }
    }
    /// The first component
    pub fn x(&self) -> Float {
        self.data[0]
    }
    /// The second component
    pub fn y(&self) -> Float {
        self.data[1]
    }
    /// The third component
    pub fn z(&self) -> Float {
        self.data[2]
    }

    /// The [cross product](https://en.wikipedia.org/wiki/Cross_product)
    pub fn cross(&self, other: &Self) -> Self {
        vector_ops::cross(self, other)
            .unwrap_or_else(|e| panic!("Cross product of the wrong vectors... {}", e))
    }
}

impl SVector<4> {
    /// Creates a new [`Vector4`]
    pub const fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }
    /// The first component
    pub fn x(&self) -> Float {
        self.data[0]
    }
    /// The second component
    pub fn y(&self) -> Float {
        self.data[1]
    }
    /// The third component
    pub fn z(&self) -> Float {
        self.data[2]
    }
    /// The fourth component
    pub fn w(&self) -> Float {
        self.data[3]
    }
}

impl<const N: usize> Vectorish for SVector<N> {
    fn length(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[Float] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [Float] {
        &mut self.data
    }

    fn with_length(len: usize, v: Float) -> Result<Self, LinAlgError> {
        LinAlgError::check_dimension(N, len)?;
        Ok(Self::splat(v))
    }
}

impl<const N: usize> From<[Float; N]> for SVector<N> {
    fn from(data: [Float; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize> TryFrom<&DynVector> for SVector<N> {
    type Error = LinAlgError;

    fn try_from(v: &DynVector) -> Result<Self, Self::Error> {
        LinAlgError::check_dimension(N, v.length())?;
        vector_ops::resize(v, N)
    }
}

impl<const N: usize> std::fmt::Display for SVector<N> {
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

// serde only implements arrays of concrete sizes, so go through a sequence.
impl<const N: usize> Serialize for SVector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for SVector<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v: Vec<Float> = Vec::deserialize(deserializer)?;
        let len = v.len();
        let data: [Float; N] = v.try_into().map_err(|_| {
            serde::de::Error::invalid_length(len, &format!("{} elements", N).as_str())
        })?;
        Ok(Self { data })
    }
}

/* OPERATORS */

impl<const N: usize> std::ops::Index<usize> for SVector<N> {
    type Output = Float;
    fn index(&self, i: usize) -> &Self::Output {
        if let Err(e) = LinAlgError::check_index(i, N) {
            panic!("{}", e)
        }
        &self.data[i]
    }
}

impl<const N: usize> std::ops::IndexMut<usize> for SVector<N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        if let Err(e) = LinAlgError::check_index(i, N) {
            panic!("{}", e)
        }
        &mut self.data[i]
    }
}

impl<const N: usize> std::ops::AddAssign for SVector<N> {
    fn add_assign(&mut self, other: Self) {
        if let Err(e) = vector_ops::add_assign(self, &other) {
            panic!("Vectors being added are of different sizes... {}", e)
        }
    }
}

impl<const N: usize> std::ops::SubAssign for SVector<N> {
    fn sub_assign(&mut self, other: Self) {
        if let Err(e) = vector_ops::sub_assign(self, &other) {
            panic!("Vectors being substracted are of different sizes... {}", e)
        }
    }
}

impl<const N: usize> std::ops::MulAssign<Float> for SVector<N> {
    fn mul_assign(&mut self, s: Float) {
        vector_ops::scale_assign(self, s)
    }
}

impl<const N: usize> std::ops::DivAssign<Float> for SVector<N> {
    fn div_assign(&mut self, s: Float) {
        if let Err(e) = vector_ops::unscale_assign(self, s) {
            panic!("Vector being divided... {}", e)
        }
    }
}

impl<const N: usize> std::ops::Add for SVector<N> {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<const N: usize> std::ops::Sub for SVector<N> {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<const N: usize> std::ops::Neg for SVector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        vector_ops::negate(&self)
    }
}

impl<const N: usize> std::ops::Mul<Float> for SVector<N> {
    type Output = Self;
    fn mul(mut self, s: Float) -> Self {
        self *= s;
        self
    }
}

impl<const N: usize> std::ops::Mul<SVector<N>> for Float {
    type Output = SVector<N>;
    fn mul(self, v: SVector<N>) -> SVector<N> {
        v * self
    }
}

impl<const N: usize> std::ops::Div<Float> for SVector<N> {
    type Output = Self;
    fn div(mut self, s: Float) -> Self {
        self /= s;
        self
    }
}
