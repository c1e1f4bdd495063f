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

//! Arithmetic written once for anything that is [`Vectorish`].
//!
//! The operators (`+`, `-`, `*`, ...) on [`crate::SVector`] and
//! [`crate::DynVector`] are thin wrappers over these functions.

use crate::error::LinAlgError;
use crate::traits::Vectorish;
use crate::Float;

/// Adds `other` into `this`, element by element.
pub fn add_assign<V: Vectorish>(this: &mut V, other: &V) -> Result<(), LinAlgError> {
    LinAlgError::check_dimension(this.length(), other.length())?;
    this.as_mut_slice()
        .iter_mut()
        .zip(other.as_slice())
        .for_each(|(a, b)| *a += *b);
    Ok(())
}

/// Substracts `other` from `this`, element by element.
pub fn sub_assign<V: Vectorish>(this: &mut V, other: &V) -> Result<(), LinAlgError> {
    LinAlgError::check_dimension(this.length(), other.length())?;
    this.as_mut_slice()
        .iter_mut()
        .zip(other.as_slice())
        .for_each(|(a, b)| *a -= *b);
    Ok(())
}

/// Multiplies every element of `this` by `s`.
pub fn scale_assign<V: Vectorish>(this: &mut V, s: Float) {
    this.as_mut_slice().iter_mut().for_each(|a| *a *= s);
}

/// Divides every element of `this` by `s`. Fails if `s` is zero.
pub fn unscale_assign<V: Vectorish>(this: &mut V, s: Float) -> Result<(), LinAlgError> {
    LinAlgError::check_divisor(s)?;
    this.as_mut_slice().iter_mut().for_each(|a| *a /= s);
    Ok(())
}

/// Returns `a + b`
pub fn add<V: Vectorish>(a: &V, b: &V) -> Result<V, LinAlgError> {
    let mut ret = a.clone();
    add_assign(&mut ret, b)?;
    Ok(ret)
}

/// Returns `a - b`
pub fn sub<V: Vectorish>(a: &V, b: &V) -> Result<V, LinAlgError> {
    let mut ret = a.clone();
    sub_assign(&mut ret, b)?;
    Ok(ret)
}

/// Returns `-a`
pub fn negate<V: Vectorish>(a: &V) -> V {
    let mut ret = a.clone();
    ret.as_mut_slice().iter_mut().for_each(|x| *x = -*x);
    ret
}

/// Returns `a * s`
pub fn scale<V: Vectorish>(a: &V, s: Float) -> V {
    let mut ret = a.clone();
    scale_assign(&mut ret, s);
    ret
}

/// Returns `a / s`, failing if `s` is zero.
pub fn unscale<V: Vectorish>(a: &V, s: Float) -> Result<V, LinAlgError> {
    let mut ret = a.clone();
    unscale_assign(&mut ret, s)?;
    Ok(ret)
}

/// Checks whether two vectors have the same length and exactly the
/// same elements (as in `element == other_element`... beware Floats).
pub fn equals<V: Vectorish>(a: &V, b: &V) -> bool {
    a.length() == b.length() && a.as_slice().iter().zip(b.as_slice()).all(|(x, y)| x == y)
}

// Callers check that both slices have the same length
pub(crate) fn dot_slices(a: &[Float], b: &[Float]) -> Float {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}

/// The dot product $`\sum_i a_i b_i`$
pub fn dot<V: Vectorish>(a: &V, b: &V) -> Result<Float, LinAlgError> {
    LinAlgError::check_dimension(a.length(), b.length())?;
    Ok(dot_slices(a.as_slice(), b.as_slice()))
}

/// The euclidean length; i.e., `sqrt(dot(a, a))`
pub fn magnitude<V: Vectorish>(a: &V) -> Float {
    dot_slices(a.as_slice(), a.as_slice()).sqrt()
}

/// Returns `a` divided by its magnitude. Fails if `a` has zero magnitude.
pub fn normalize<V: Vectorish>(a: &V) -> Result<V, LinAlgError> {
    unscale(a, magnitude(a))
}

/// The cross product of two vectors of length 3.
pub fn cross<V: Vectorish>(a: &V, b: &V) -> Result<V, LinAlgError> {
    LinAlgError::check_dimension(3, a.length())?;
    LinAlgError::check_dimension(3, b.length())?;
    let (l, r) = (a.as_slice(), b.as_slice());
    let mut ret = V::with_length(3, 0.0)?;
    let data = ret.as_mut_slice();
    data[0] = l[1] * r[2] - l[2] * r[1];
    data[1] = l[2] * r[0] - l[0] * r[2];
    data[2] = l[0] * r[1] - l[1] * r[0];
    Ok(ret)
}

/// Builds a vector of length `len` out of `source`. The first
/// `min(len, source.length())` elements are copied, and the rest are zero.
///
/// This is how a fixed vector becomes a dynamic one (or the other way
/// around), and how vectors are truncated or extended.
pub fn resize<V: Vectorish, S: Vectorish>(source: &S, len: usize) -> Result<V, LinAlgError> {
    let mut ret = V::with_length(len, 0.0)?;
    ret.as_mut_slice()
        .iter_mut()
        .zip(source.as_slice())
        .for_each(|(to, from)| *to = *from);
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DynVector, Vector3, Vector4};

    #[test]
    fn test_add_mismatch() {
        let a = DynVector::new(3, 1.0);
        let b = DynVector::new(4, 1.0);
        assert_eq!(
            add(&a, &b),
            Err(LinAlgError::DimensionMismatch {
                expected: 3,
                found: 4
            })
        );
        assert!(sub(&a, &b).is_err());
        assert!(dot(&a, &b).is_err());
    }

    #[test]
    fn test_unscale_by_zero() {
        let a = Vector3::splat(2.0);
        assert_eq!(unscale(&a, 0.0), Err(LinAlgError::DivisionByZero));

        let mut b = DynVector::new(5, 1.0);
        assert_eq!(unscale_assign(&mut b, 0.0), Err(LinAlgError::DivisionByZero));
        // left untouched
        assert_eq!(b, DynVector::new(5, 1.0));
    }

    #[test]
    fn test_negate() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(negate(&a), Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_equals() {
        let a = DynVector::new(3, 1.0);
        let b = DynVector::new(4, 1.0);
        assert!(!equals(&a, &b));
        assert!(equals(&a, &a.clone()));
        // -0.0 == 0.0
        assert!(equals(&Vector3::new(0.0, 0.0, 0.0), &Vector3::new(-0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_dot_magnitude() -> Result<(), LinAlgError> {
        let lhs = Vector4::splat(1.0);
        let rhs = Vector4::splat(5.0);
        assert_eq!(dot(&lhs, &rhs)?, 20.0);

        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(magnitude(&v), 5.0);
        assert_eq!(magnitude(&v), dot(&v, &v)?.sqrt());
        Ok(())
    }

    #[test]
    fn test_normalize() -> Result<(), LinAlgError> {
        let v = DynVector::from(vec![0.0, 3.0, 4.0]);
        let n = normalize(&v)?;
        assert!((magnitude(&n) - 1.0).abs() < 1e-6);
        assert_eq!(
            normalize(&DynVector::new(3, 0.0)),
            Err(LinAlgError::DivisionByZero)
        );
        Ok(())
    }

    #[test]
    fn test_cross_generic() -> Result<(), LinAlgError> {
        let i = DynVector::from(vec![1.0, 0.0, 0.0]);
        let j = DynVector::from(vec![0.0, 1.0, 0.0]);
        let k = DynVector::from(vec![0.0, 0.0, 1.0]);
        assert_eq!(cross(&i, &j)?, k);
        assert_eq!(cross(&j, &i)?, negate(&k));

        let four = DynVector::new(4, 1.0);
        assert!(cross(&four, &four).is_err());
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<(), LinAlgError> {
        let v = Vector3::new(1.0, 2.0, 3.0);

        // Promote
        let d: DynVector = resize(&v, 5)?;
        assert_eq!(d, DynVector::from(vec![1.0, 2.0, 3.0, 0.0, 0.0]));

        // Truncate
        let d: DynVector = resize(&v, 2)?;
        assert_eq!(d, DynVector::from(vec![1.0, 2.0]));

        // Extend into a fixed size
        let w: Vector4 = resize(&v, 4)?;
        assert_eq!(w, Vector4::new(1.0, 2.0, 3.0, 0.0));

        // Fixed vectors cannot take any other length
        let r: Result<Vector4, LinAlgError> = resize(&v, 3);
        assert!(r.is_err());
        Ok(())
    }
}
