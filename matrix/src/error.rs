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

/// The things that can go wrong when operating on vectors and matrices.
///
/// All of these are precondition violations of a single call (or a genuine
/// mathematical degeneracy), so they are returned straight to the caller.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LinAlgError {
    /// Two operands have incompatible shapes.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The size the operation required
        expected: usize,
        /// The size it got
        found: usize,
    },

    /// Index outside of `[0, length)`.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The index requested
        index: usize,
        /// The length of the indexed container
        length: usize,
    },

    /// Division by exactly zero (scalar division, or normalizing something
    /// with zero magnitude).
    #[error("division by zero")]
    DivisionByZero,

    /// Gauss-Jordan elimination could not find a non-zero pivot.
    #[error("unable to solve singular linear system (no non-zero pivot for row {pivot})")]
    SingularMatrix {
        /// The row whose pivot could not be found
        pivot: usize,
    },
}

impl LinAlgError {
    /// Returns `Ok(())` if `expected == found`, or a `DimensionMismatch` otherwise.
    pub fn check_dimension(expected: usize, found: usize) -> Result<(), LinAlgError> {
        if expected == found {
            Ok(())
        } else {
            Err(LinAlgError::DimensionMismatch { expected, found })
        }
    }

    /// Returns `Ok(())` if `index < length`, or an `IndexOutOfRange` otherwise.
    pub fn check_index(index: usize, length: usize) -> Result<(), LinAlgError> {
        if index < length {
            Ok(())
        } else {
            Err(LinAlgError::IndexOutOfRange { index, length })
        }
    }

    /// Returns `Ok(())` unless `divisor` is exactly zero.
    pub fn check_divisor(divisor: Float) -> Result<(), LinAlgError> {
        if divisor == 0.0 {
            Err(LinAlgError::DivisionByZero)
        } else {
            Ok(())
        }
    }
}
