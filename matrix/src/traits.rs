use crate::error::LinAlgError;
use crate::Float;

/// The capability shared by every vector in this library, whether its
/// length is known at compile time ([`crate::SVector`]) or only at
/// runtime ([`crate::DynVector`]).
///
/// Everything in [`crate::vector_ops`] is written once against this trait.
pub trait Vectorish: Clone + PartialEq + Sized + Send + Sync + std::fmt::Debug {
    /// The number of components
    fn length(&self) -> usize;

    /// The components, in order
    fn as_slice(&self) -> &[Float];

    /// The components, in order, mutably
    fn as_mut_slice(&mut self) -> &mut [Float];

    /// Builds a vector of length `len` with every component equal to `v`.
    ///
    /// Vectors whose length is fixed return a `DimensionMismatch` when
    /// `len` is not their length.
    fn with_length(len: usize, v: Float) -> Result<Self, LinAlgError>;

    /// Gets the component at `index`
    fn get(&self, index: usize) -> Result<Float, LinAlgError> {
        LinAlgError::check_index(index, self.length())?;
        Ok(self.as_slice()[index])
    }

    /// Sets the component at `index`
    fn set(&mut self, index: usize, v: Float) -> Result<(), LinAlgError> {
        LinAlgError::check_index(index, self.length())?;
        self.as_mut_slice()[index] = v;
        Ok(())
    }

    /// Swaps components `i` and `j`
    fn swap(&mut self, i: usize, j: usize) -> Result<(), LinAlgError> {
        LinAlgError::check_index(i, self.length())?;
        LinAlgError::check_index(j, self.length())?;
        self.as_mut_slice().swap(i, j);
        Ok(())
    }
}

/// Only this crate can build a `Sealed`, so only this crate can call
/// [`Matrixish::cols_mut`] (or implement [`Matrixish`]).
#[derive(Debug, Clone, Copy)]
pub struct Sealed(());

pub(crate) const SEALED: Sealed = Sealed(());

/// The capability shared by every matrix in this library. A matrix is an
/// ordered list of `columns()` column vectors, each of length `rows()`.
///
/// Everything in [`crate::matrix_ops`] is written once against this trait.
pub trait Matrixish: Clone + PartialEq + Sized + Send + Sync + std::fmt::Debug {
    /// The kind of vector holding each column
    type Column: Vectorish;

    /// The number of rows (i.e., the length of each column)
    fn rows(&self) -> usize;

    /// The number of columns
    fn columns(&self) -> usize;

    /// The columns, in order
    fn cols(&self) -> &[Self::Column];

    /// The columns, in order, mutably. Whole columns could be replaced
    /// through this, breaking the shape of the matrix, so it is kept
    /// within this crate. Elements are written through `set` or indexing.
    fn cols_mut(&mut self, _: Sealed) -> &mut [Self::Column];

    /// Builds a `rows` by `cols` matrix with `v` in the diagonal
    /// and zeroes everywhere else.
    ///
    /// Matrices whose size is fixed return a `DimensionMismatch` when
    /// the requested shape is not theirs.
    fn with_shape(rows: usize, cols: usize, v: Float) -> Result<Self, LinAlgError>;

    /// Borrows column `index`
    fn column(&self, index: usize) -> Result<&Self::Column, LinAlgError> {
        LinAlgError::check_index(index, self.columns())?;
        Ok(&self.cols()[index])
    }

    /// Gets the element in column `col`, row `row`
    fn get(&self, col: usize, row: usize) -> Result<Float, LinAlgError> {
        self.column(col)?.get(row)
    }

    /// Sets the element in column `col`, row `row`
    fn set(&mut self, col: usize, row: usize, v: Float) -> Result<(), LinAlgError> {
        LinAlgError::check_index(col, self.columns())?;
        self.cols_mut(SEALED)[col].set(row, v)
    }
}
