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

use super::*;
use rand::Rng;

fn random_dyn(rng: &mut impl Rng, len: usize) -> DynVector {
    DynVector::from(
        (0..len)
            .map(|_| rng.gen_range(-100.0..100.0))
            .collect::<Vec<Float>>(),
    )
}

fn random_vector3(rng: &mut impl Rng) -> Vector3 {
    Vector3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

#[test]
fn test_add_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = random_vector3(&mut rng);
        let b = random_vector3(&mut rng);
        assert_eq!(a + b, b + a);

        let a = random_dyn(&mut rng, 17);
        let b = random_dyn(&mut rng, 17);
        assert_eq!(&a + &b, &b + &a);
    }
}

#[test]
fn test_add_associative() -> Result<(), LinAlgError> {
    // Small integers, so there is no rounding
    let a = DynVector::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = DynVector::from(vec![-3.0, 8.0, 0.0, 1.0, 2.0]);
    let c = DynVector::from(vec![7.0, 7.0, -7.0, 7.0, 7.0]);

    let left = vector_ops::add(&vector_ops::add(&a, &b)?, &c)?;
    let right = vector_ops::add(&a, &vector_ops::add(&b, &c)?)?;
    assert_eq!(left, right);

    let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vector4::new(0.5, 0.25, 8.0, 1.0);
    let c = Vector4::new(-1.0, 6.0, 2.0, 3.0);
    assert_eq!((a + b) + c, a + (b + c));
    Ok(())
}

#[test]
fn test_self_subtraction_is_zero() {
    let mut rng = rand::thread_rng();
    for len in 1..20 {
        let a = random_dyn(&mut rng, len);
        assert_eq!(&a - &a, DynVector::new(len, 0.0));
    }
    let a = random_vector3(&mut rng);
    assert_eq!(a - a, Vector3::zeros());
}

#[test]
fn test_dot_non_negative() -> Result<(), LinAlgError> {
    let mut rng = rand::thread_rng();
    for len in 1..20 {
        let a = random_dyn(&mut rng, len);
        let d = vector_ops::dot(&a, &a)?;
        assert!(d >= 0.0);
        assert_eq!(vector_ops::magnitude(&a), d.sqrt());
    }
    Ok(())
}

#[test]
fn test_cross_anticommutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = random_vector3(&mut rng);
        let b = random_vector3(&mut rng);
        assert_eq!(a.cross(&b), -b.cross(&a));
    }
}

#[test]
fn test_scalar_distribution() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, -5.0, 6.0);
    let s: Float = 3.0;
    assert_eq!(s * (a + b), s * a + s * b);
    assert_eq!(2.0 * a, a + a);

    let a = DynVector::from(vec![1.0, 2.0, 3.0, 4.0]);
    let b = DynVector::from(vec![4.0, -5.0, 6.0, 0.5]);
    assert_eq!(s * &(&a + &b), &(s * &a) + &(s * &b));
    assert_eq!(2.0 * &a, &a + &a);
}

#[test]
fn test_fixed_and_dynamic_agree() -> Result<(), LinAlgError> {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let a = random_vector3(&mut rng);
        let b = random_vector3(&mut rng);
        let da = DynVector::from(a);
        let db = DynVector::from(b);
        assert_eq!(DynVector::from(a + b), &da + &db);
        assert_eq!(DynVector::from(a - b), &da - &db);
        assert_eq!(DynVector::from(a * 3.0), &da * 3.0);
        assert_eq!(DynVector::from(a.cross(&b)), vector_ops::cross(&da, &db)?);
        assert_eq!(a.dot(&b), da.dot(&db)?);
    }

    let m = Matrix4::new(3.0);
    let d = DynMatrix::from(m);
    assert_eq!(DynMatrix::from(m * m), &d * &d);
    assert_eq!(DynMatrix::from(m.transpose()), d.transpose());
    Ok(())
}

#[test]
fn test_matrix_scaled_identity_properties() {
    let m = Matrix2::new(2.0);
    assert_eq!(m * 3.0, 3.0 * m);

    let m3 = Matrix3::new(2.0);
    assert_eq!(m3 * 2.0, m3 + m3);

    let l = Matrix4::new(2.0);
    let r = Matrix4::new(5.0);
    assert_eq!(l * r, Matrix4::new(10.0));
}

#[test]
fn test_matrix_vector() {
    let a = DynMatrix::new(2.0, 5, 5);
    let v = DynVector::from(vec![2.0; 5]);
    assert_eq!(&a * &v, 2.0 * &v);
}

#[test]
fn test_transpose_of_product() -> Result<(), LinAlgError> {
    // (AB)^T == B^T A^T
    let a = DynMatrix::from_columns(vec![
        DynVector::from(vec![1.0, 2.0]),
        DynVector::from(vec![3.0, 4.0]),
        DynVector::from(vec![5.0, 6.0]),
    ])?;
    let b = DynMatrix::from_columns(vec![
        DynVector::from(vec![1.0, 0.0, 2.0]),
        DynVector::from(vec![0.0, 1.0, 1.0]),
    ])?;
    let ab = matrix_ops::multiply(&a, &b)?;
    let bt_at = matrix_ops::multiply(&b.transpose(), &a.transpose())?;
    assert_eq!(ab.transpose(), bt_at);
    Ok(())
}

#[test]
fn test_solver_round_trip() -> Result<(), LinAlgError> {
    let a = DynMatrix::from_columns(vec![
        DynVector::from(vec![2.0, 1.0, 4.0, 0.0]),
        DynVector::from(vec![1.0, 6.0, 8.0, 5.0]),
        DynVector::from(vec![0.0, 7.0, 3.0, 0.0]),
        DynVector::from(vec![9.0, 0.0, 4.0, 2.0]),
    ])?;
    let x = DynVector::from(vec![4.0, 5.0, 2.0, 1.0]);
    let b = matrix_ops::multiply_vector(&a, &x)?;
    let found = solver::solve(&a, &b)?;
    assert!(vector_ops::magnitude(&vector_ops::sub(&found, &x)?) < 1e-5);
    Ok(())
}
