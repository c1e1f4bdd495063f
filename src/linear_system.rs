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

use crate::Float;
use matrix::{solver, DynMatrix, DynVector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A linear system $`A \times x = b`$, as written in a JSON file.
///
/// `A` is given as a list of columns, which is how matrices
/// are stored.
///
/// ```json
/// {
///     "columns" : [[2, 0], [0, 4]],
///     "b" : [2, 8]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    /// The columns of the (square) matrix `A`
    pub columns: Vec<Vec<Float>>,

    /// The right-hand side
    pub b: Vec<Float>,
}

impl LinearSystem {
    /// Reads a [`LinearSystem`] from a JSON file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let filename = filename.as_ref();
        let data = std::fs::read_to_string(filename)
            .map_err(|e| format!("Could not read file '{}': {}", filename.display(), e))?;
        Self::from_json(&data)
    }

    /// Parses a [`LinearSystem`] from a JSON string
    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("Invalid linear system: {}", e))
    }

    /// Builds the matrix `A`
    pub fn matrix(&self) -> Result<DynMatrix, String> {
        let cols = self
            .columns
            .iter()
            .map(|c| DynVector::from(c.as_slice()))
            .collect();
        DynMatrix::from_columns(cols).map_err(|e| format!("Invalid matrix: {}", e))
    }

    /// Solves the system for `x`
    pub fn solve(&self) -> Result<Vec<Float>, String> {
        let a = self.matrix()?;
        let b = DynVector::from(self.b.as_slice());
        log::debug!("Solving a system with {} rows and {} columns", a.rows(), a.columns());
        let x = solver::solve(&a, &b).map_err(|e| e.to_string())?;
        Ok(x.into())
    }
}
