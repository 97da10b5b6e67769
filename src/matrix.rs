//! Dense 2D matrix type

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, ConfigError, DEFAULT_CONFIG_FILE};

/// Errors raised by matrix construction and arithmetic.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A requested dimension was zero (or negative, via the config path).
    #[error("number of rows and columns must be greater than 0")]
    InvalidDimensions,

    /// A literal grid had no rows.
    #[error("matrix cannot be empty")]
    Empty,

    /// A literal grid had rows of differing lengths.
    #[error("inconsistent number of columns in matrix rows")]
    RaggedRows,

    /// Two matrices of different shapes were added.
    #[error("matrix dimensions do not match: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Reading the config file for default construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A dense matrix of `f64` values (row-major storage).
///
/// Construction validates shape up front; a `Matrix` is never observable in
/// a partially built state, and is immutable afterwards. Addition produces
/// a new matrix and leaves both operands untouched.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::filled(2, 3, 1.0).expect("positive dimensions");
/// let b = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("rectangular");
/// let sum = a.add(&b).expect("same shape");
/// assert_eq!(sum.get(1, 2), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions);
        }
        Ok(Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from literal row data. The grid is copied, never
    /// aliased; the first row's length is the reference column count.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Empty`] for an empty grid, [`MatrixError::RaggedRows`]
    /// if any row's length differs from the first row's.
    pub fn from_rows(grid: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let Some(first) = grid.first() else {
            return Err(MatrixError::Empty);
        };
        let cols = first.len();
        if grid.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::RaggedRows);
        }

        let data = grid.iter().flatten().copied().collect();
        Ok(Self {
            data,
            rows: grid.len(),
            cols,
        })
    }

    /// Creates a matrix from the defaults in [`DEFAULT_CONFIG_FILE`],
    /// resolved relative to the working directory.
    ///
    /// # Errors
    ///
    /// Config errors propagate as [`MatrixError::Config`]; the loaded
    /// dimensions then go through the same validation as [`Matrix::filled`],
    /// so a config declaring zero rows fails with
    /// [`MatrixError::InvalidDimensions`].
    pub fn from_default_config() -> Result<Self, MatrixError> {
        Self::from_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Creates a matrix from the defaults in the config file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_default_config`].
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let cfg = config::read_matrix_config(path)?;
        tracing::debug!(?cfg, "constructing matrix from config defaults");
        // Negative file values fold to zero here and are rejected by the
        // dimension check, the same failure a 0x0 request gets.
        let rows = usize::try_from(cfg.rows).unwrap_or(0);
        let cols = usize::try_from(cfg.cols).unwrap_or(0);
        Self::filled(rows, cols, cfg.init_value)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the element at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element-wise sum with another matrix of identical shape, as a new
    /// matrix. A chained sum is left-to-right binary application.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let data = self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Renders each row's elements space-separated with a trailing space, rows
/// joined by a single newline, no newline after the final row. Total for
/// every shape: a zero-row matrix renders as the empty string, a zero-column
/// row as nothing but its separating newlines.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for value in self.row(i) {
                write!(f, "{value} ")?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
