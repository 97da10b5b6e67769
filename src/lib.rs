//! densemat: minimal dense 2D matrix library
//!
//! Provides a naive dense matrix of `f64` values with validate-on-construct
//! semantics, element-wise addition, and a plain-text rendering, plus a
//! small key-value config reader that supplies default construction
//! parameters. No sparse storage, no broadcasting, no linear algebra
//! beyond addition.

pub mod config;
pub mod matrix;

pub use config::{read_matrix_config, ConfigError, MatrixConfig, DEFAULT_CONFIG_FILE};
pub use matrix::{Matrix, MatrixError};
