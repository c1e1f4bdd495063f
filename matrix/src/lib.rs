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

#![deny(missing_docs)]

//! A Library of vectors and matrices for geometry and physics.
//!
//! There are two kinds of containers. Small ones ([`Vector2`], [`Vector3`],
//! [`Vector4`], [`Matrix2`], [`Matrix3`], [`Matrix4`]) have their size fixed
//! when compiling and live on the stack. Dynamic ones ([`DynVector`],
//! [`DynMatrix`]) have their size set at runtime and live on the heap.
//!
//! Both kinds implement the same capabilities ([`Vectorish`] and [`Matrixish`]),
//! and the arithmetic in [`vector_ops`], [`matrix_ops`] and [`solver`] is written
//! once against those. Matrices are stored as columns, so elements are addressed
//! as `m[column][row]`.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

mod error;
pub use error::LinAlgError;

mod traits;
pub use traits::{Matrixish, Vectorish};

/// Operations over anything that is [`Vectorish`]
pub mod vector_ops;

/// Operations over anything that is [`Matrixish`]
pub mod matrix_ops;

mod small_vector;
pub use small_vector::{SVector, Vector2, Vector3, Vector4};

mod dyn_vector;
pub use dyn_vector::DynVector;

mod small_matrix;
pub use small_matrix::{Matrix2, Matrix3, Matrix4, SmallMatrix};

mod dyn_matrix;
pub use dyn_matrix::DynMatrix;

/// Gauss-Jordan elimination
pub mod solver;
pub use solver::solve;

#[cfg(test)]
mod test;
