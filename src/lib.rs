/*
MIT License
Copyright (c)  Germán Molina
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

//! Linear algebra primitives: small and dynamic vectors and matrices,
//! quaternions for rotations, and a linear system solver.
//!
//! This crate puts the [`matrix`] and [`geometry`] crates together, and
//! adds the reading of linear systems from JSON files used by the
//! `fsolve` binary.

pub use matrix::Float;

/// Linear systems read from files
pub mod linear_system;
pub use linear_system::LinearSystem;

// Re-exports
pub use geometry;
pub use geometry::{degrees, radians, Quaternion};
pub use matrix;
pub use matrix::{
    matrix_ops, solve, solver, vector_ops, DynMatrix, DynVector, LinAlgError, Matrix2, Matrix3,
    Matrix4, Matrixish, SVector, SmallMatrix, Vector2, Vector3, Vector4, Vectorish,
};
