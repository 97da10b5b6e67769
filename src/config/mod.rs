//! Configuration loading for default matrix construction
//!
//! Reads a line-oriented `key=value` file into the three defaults a matrix
//! needs: row count, column count, and initial fill value.

pub mod reader;

pub use reader::{read_matrix_config, ConfigError, MatrixConfig, DEFAULT_CONFIG_FILE};
