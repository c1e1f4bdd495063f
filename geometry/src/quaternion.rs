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

use crate::Float;
use matrix::{LinAlgError, Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A quaternion; that is, a real part plus an imaginary [`Vector3`] over
/// the basis $`\{i, j, k\}`$, where $`i^2 = j^2 = k^2 = ijk = -1`$.
///
/// Quaternions here are meant to represent rotations. For this reason the
/// `*` operator does **not** perform the formal quaternion product
/// (use [`Quaternion::multiply`] for that) but rotates the right-hand side
/// by the left-hand side.
///
/// ```
/// use geometry::{radians, Quaternion};
/// use matrix::Vector3;
///
/// let x = Vector3::new(1., 0., 0.);
/// let y = Vector3::new(0., 1., 0.);
/// let z = Vector3::new(0., 0., 1.);
///
/// // 90 degrees around the X axis
/// let q = Quaternion::from_axis_angle(x, radians(90.)).unwrap();
///
/// // ... takes Y into Z
/// let rotated = q * y;
/// assert!((rotated - z).magnitude() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    real: Float,
    imag: Vector3,
}

impl Default for Quaternion {
    /// The identity rotation
    fn default() -> Self {
        Self::new(1., 0., 0., 0.)
    }
}

impl Quaternion {
    /// Creates a new [`Quaternion`] from its real part and the
    /// coefficients of $`i`$, $`j`$ and $`k`$.
    pub const fn new(real: Float, i: Float, j: Float, k: Float) -> Self {
        Self {
            real,
            imag: Vector3::new(i, j, k),
        }
    }

    /// Creates a new [`Quaternion`] from its real and imaginary parts
    pub const fn from_parts(real: Float, imag: Vector3) -> Self {
        Self { real, imag }
    }

    /// Creates a [`Quaternion`] representing a rotation of `angle` radians
    /// around `axis`. The axis does not need to be normalized, but it cannot
    /// be zero.
    pub fn from_axis_angle(axis: Vector3, angle: Float) -> Result<Self, LinAlgError> {
        let axis = axis.normalize()?;
        let half_angle = 0.5 * angle;
        Ok(Self {
            real: half_angle.cos(),
            imag: axis * half_angle.sin(),
        })
    }

    /// A [`Quaternion`] can be thought of as a vector of 4 elements.
    pub const fn length(&self) -> usize {
        4
    }

    /// The real part
    pub fn scalar(&self) -> Float {
        self.real
    }

    /// The imaginary part
    pub fn vector(&self) -> Vector3 {
        self.imag
    }

    /// The real part, mutably
    pub fn scalar_mut(&mut self) -> &mut Float {
        &mut self.real
    }

    /// The imaginary part, mutably
    pub fn vector_mut(&mut self) -> &mut Vector3 {
        &mut self.imag
    }

    /// The formal [quaternion product](https://en.wikipedia.org/wiki/Quaternion#Multiplication_of_basis_elements),
    /// computed through dot and cross products.
    ///
    /// ```
    /// use geometry::Quaternion;
    /// let i = Quaternion::new(0., 1., 0., 0.);
    /// let j = Quaternion::new(0., 0., 1., 0.);
    /// let k = Quaternion::new(0., 0., 0., 1.);
    /// assert_eq!(Quaternion::multiply(&i, &j), k);
    /// assert_eq!(Quaternion::multiply(&i, &i), Quaternion::new(-1., 0., 0., 0.));
    /// ```
    pub fn multiply(lhs: &Quaternion, rhs: &Quaternion) -> Quaternion {
        Quaternion {
            real: lhs.real * rhs.real - lhs.imag.dot(&rhs.imag),
            imag: rhs.imag * lhs.real + lhs.imag * rhs.real + lhs.imag.cross(&rhs.imag),
        }
    }

    /// The norm: $`\sqrt{r^2 + v \cdot v}`$
    ///
    /// Components are divided by the largest one before squaring, so
    /// very small or very large quaternions do not underflow or overflow.
    pub fn magnitude(&self) -> Float {
        let largest = [self.imag.x(), self.imag.y(), self.imag.z()]
            .iter()
            .fold(self.real.abs(), |acc, v| acc.max(v.abs()));
        if largest == 0.0 {
            return 0.0;
        }
        let r = self.real / largest;
        let v = self.imag / largest;
        largest * (r * r + v.dot(&v)).sqrt()
    }

    /// Returns the same quaternion divided by its magnitude. Fails
    /// if the magnitude is zero.
    pub fn normalize(&self) -> Result<Quaternion, LinAlgError> {
        let mag = self.magnitude();
        LinAlgError::check_divisor(mag)?;
        Ok(Quaternion {
            real: self.real / mag,
            imag: self.imag / mag,
        })
    }

    /// Negates the imaginary part
    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// The multiplicative inverse; i.e., the conjugate divided by the
    /// squared magnitude. Fails if the magnitude is zero.
    pub fn inverse(&self) -> Result<Quaternion, LinAlgError> {
        let mag = self.magnitude();
        LinAlgError::check_divisor(mag)?;
        // Dividing twice, as mag * mag can underflow
        let c = self.conjugate();
        Ok(Quaternion {
            real: c.real / mag / mag,
            imag: c.imag / mag / mag,
        })
    }

    /// Rotates `other` by `self`; i.e., computes $`q p q^{-1}`$.
    ///
    /// `self` does not need to be normalized, as its magnitude cancels out.
    /// Fails if it is zero.
    pub fn rotate(&self, other: &Quaternion) -> Result<Quaternion, LinAlgError> {
        // The inverse of a unit quaternion is its conjugate
        let q = self.normalize()?;
        Ok(Self::multiply(&q, &Self::multiply(other, &q.conjugate())))
    }

    /// Rotates a vector by `self`, by lifting it into a quaternion with
    /// no real part and keeping the imaginary part of the result.
    pub fn rotate_vector(&self, v: Vector3) -> Result<Vector3, LinAlgError> {
        let p = Quaternion::from_parts(0.0, v);
        Ok(self.rotate(&p)?.imag)
    }

    /// Converts into a rotation [`Matrix3`], so that `m * v` equals
    /// `self.rotate_vector(v)` (up to rounding). Uses the closed form in
    /// [here](https://en.wikipedia.org/wiki/Quaternions_and_spatial_rotation#Quaternion-derived_rotation_matrix),
    /// after normalizing.
    pub fn to_rotation_matrix(&self) -> Result<Matrix3, LinAlgError> {
        let q = self.normalize()?;
        let (w, x, y, z) = (q.real, q.imag.x(), q.imag.y(), q.imag.z());

        Ok(Matrix3::from_columns([
            Vector3::new(
                1. - 2. * (y * y + z * z),
                2. * (x * y + z * w),
                2. * (x * z - y * w),
            ),
            Vector3::new(
                2. * (x * y - z * w),
                1. - 2. * (x * x + z * z),
                2. * (y * z + x * w),
            ),
            Vector3::new(
                2. * (x * z + y * w),
                2. * (y * z - x * w),
                1. - 2. * (x * x + y * y),
            ),
        ]))
    }
}

impl std::ops::Index<usize> for Quaternion {
    type Output = Float;
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.real,
            1..=3 => &self.imag[i - 1],
            _ => panic!("{}", LinAlgError::IndexOutOfRange { index: i, length: 4 }),
        }
    }
}

impl std::ops::IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, i: usize) -> &mut Float {
        match i {
            0 => &mut self.real,
            1..=3 => &mut self.imag[i - 1],
            _ => panic!("{}", LinAlgError::IndexOutOfRange { index: i, length: 4 }),
        }
    }
}

impl std::ops::MulAssign for Quaternion {
    /// Replaces `self` by `other` rotated by `self`.
    fn mul_assign(&mut self, other: Quaternion) {
        *self = *self * other;
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Quaternion;

    /// Rotates `other` by `self`. Panics if `self` is zero.
    fn mul(self, other: Quaternion) -> Quaternion {
        self.rotate(&other)
            .unwrap_or_else(|e| panic!("Rotating by a zero quaternion... {}", e))
    }
}

impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Vector3;

    /// Rotates `v` by `self`. Panics if `self` is zero.
    fn mul(self, v: Vector3) -> Vector3 {
        self.rotate_vector(v)
            .unwrap_or_else(|e| panic!("Rotating by a zero quaternion... {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{radians, PI};
    use rand::Rng;

    const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[test]
    fn test_default_is_identity() {
        let q = Quaternion::default();
        assert_eq!(q.scalar(), 1.0);
        assert_eq!(q.vector(), Vector3::zeros());
        assert_eq!(q * Y, Y);
    }

    #[test]
    fn test_index() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.length(), 4);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[1], 2.0);
        assert_eq!(q[3], 4.0);
        q[2] = 9.0;
        assert_eq!(q.vector(), Vector3::new(2.0, 9.0, 4.0));
        *q.scalar_mut() = 0.5;
        *q.vector_mut() = Vector3::splat(1.0);
        assert_eq!(q, Quaternion::new(0.5, 1.0, 1.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let q = Quaternion::default();
        let _ = q[4];
    }

    #[test]
    fn test_multiply_basis() {
        let one = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(Quaternion::multiply(&i, &i), minus_one);
        assert_eq!(Quaternion::multiply(&j, &j), minus_one);
        assert_eq!(Quaternion::multiply(&k, &k), minus_one);
        let ijk = Quaternion::multiply(&Quaternion::multiply(&i, &j), &k);
        assert_eq!(ijk, minus_one);

        assert_eq!(Quaternion::multiply(&i, &j), k);
        assert_eq!(Quaternion::multiply(&j, &i), Quaternion::new(0.0, 0.0, 0.0, -1.0));

        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::multiply(&one, &q), q);
        assert_eq!(Quaternion::multiply(&q, &one), q);
    }

    #[test]
    fn test_conjugate_inverse() -> Result<(), LinAlgError> {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
        assert!((q.magnitude() - (30.0 as Float).sqrt()).abs() < 1e-6);

        let prod = Quaternion::multiply(&q, &q.inverse()?);
        assert!((prod.scalar() - 1.0).abs() < 1e-6);
        assert!(prod.vector().magnitude() < 1e-6);

        let n = q.normalize()?;
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_zero_quaternion() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Err(LinAlgError::DivisionByZero));
        assert_eq!(zero.inverse(), Err(LinAlgError::DivisionByZero));
        assert_eq!(zero.rotate_vector(X), Err(LinAlgError::DivisionByZero));
        assert_eq!(zero.to_rotation_matrix(), Err(LinAlgError::DivisionByZero));
    }

    #[test]
    #[should_panic]
    fn test_rotate_by_zero_panics() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let _ = zero * X;
    }

    #[test]
    fn test_zero_axis() {
        assert_eq!(
            Quaternion::from_axis_angle(Vector3::zeros(), 1.0),
            Err(LinAlgError::DivisionByZero)
        );
    }

    #[test]
    fn test_axis_angle() -> Result<(), LinAlgError> {
        // Axis is normalized
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 10.0), PI)?;
        assert!(q.scalar().abs() < 1e-6);
        assert!((q.vector() - Z).magnitude() < 1e-6);
        assert!((q.magnitude() - 1.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_rotations() -> Result<(), LinAlgError> {
        // This rotates 90 degrees around the X axis
        let q = Quaternion::from_axis_angle(X, radians(90.0))?;

        // ... so Y becomes Z
        let rotated_y = q * Y;
        assert!((rotated_y - Z).magnitude() < 1e-5);

        // This rotates 180 degrees around the Y axis
        let p = Quaternion::from_axis_angle(Y, radians(180.0))?;

        // ... so X points the other way
        let rotated_x = p * X;
        assert!((rotated_x + X).magnitude() < 1e-5);

        // Both ways of rotating agree
        let quat_rotated = q * Z;
        let matrix_rotated = q.to_rotation_matrix()? * Z;
        assert!((quat_rotated - matrix_rotated).magnitude() < 1e-5);

        let quat_rotated = q * Y;
        let matrix_rotated = q.to_rotation_matrix()? * Y;
        assert!((quat_rotated - Z).magnitude() < 1e-5);
        assert!((matrix_rotated - Z).magnitude() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_rotate_quaternion() -> Result<(), LinAlgError> {
        let q = Quaternion::from_axis_angle(Z, radians(90.0))?;
        let mut p = Quaternion::from_parts(0.0, X);
        p = q * p;
        assert!(p.scalar().abs() < 1e-6);
        assert!((p.vector() - Y).magnitude() < 1e-5);

        // Compound version
        let mut q2 = q;
        q2 *= Quaternion::from_parts(0.0, Y);
        assert!((q2.vector() + X).magnitude() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_not_normalized_rotation() -> Result<(), LinAlgError> {
        // Scaling the quaternion does not change the rotation
        let q = Quaternion::from_axis_angle(X, radians(90.0))?;
        let big = Quaternion::from_parts(q.scalar() * 7.0, q.vector() * 7.0);
        assert!((big * Y - q * Y).magnitude() < 1e-5);
        assert!((big.to_rotation_matrix()? * Y - Z).magnitude() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_tiny_and_huge_quaternions() -> Result<(), LinAlgError> {
        // Squaring these under- or overflows, even though they are valid
        let tiny = Quaternion::new(1e-20, 0.0, 0.0, 0.0);
        assert!(tiny.magnitude() > 0.0);
        assert!((tiny.rotate_vector(Y)? - Y).magnitude() < 1e-5);
        assert!((tiny.to_rotation_matrix()? * Y - Y).magnitude() < 1e-5);

        let prod = Quaternion::multiply(&tiny, &tiny.inverse()?);
        assert!((prod.scalar() - 1.0).abs() < 1e-5);

        let q = Quaternion::from_axis_angle(X, radians(90.0))?;
        for scale in [1e-20, 1e-30, 1e20, 1e30] {
            let scaled = Quaternion::from_parts(q.scalar() * scale, q.vector() * scale);
            let by_quaternion = scaled.rotate_vector(Y)?;
            let by_matrix = scaled.to_rotation_matrix()? * Y;
            assert!((by_quaternion - Z).magnitude() < 1e-5, "scale {}", scale);
            assert!((by_matrix - Z).magnitude() < 1e-5, "scale {}", scale);
            assert!(((scaled.magnitude() / scale) - 1.0).abs() < 1e-5);
        }
        Ok(())
    }

    #[test]
    fn test_matrix_equivalence_random() -> Result<(), LinAlgError> {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let q = Quaternion::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            );
            if q.magnitude() < 0.1 {
                continue;
            }
            let v = Vector3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let m = q.to_rotation_matrix()?;
            let by_quaternion = q.rotate_vector(v)?;
            let by_matrix = m * v;
            assert!((by_quaternion - by_matrix).magnitude() < 1e-4);

            // Rotations preserve lengths
            assert!((by_quaternion.magnitude() - v.magnitude()).abs() < 1e-4);
        }
        Ok(())
    }

    #[test]
    fn test_serde() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"real":1.0,"imag":[2.0,3.0,4.0]}"#);
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
