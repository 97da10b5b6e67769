//! Key-value config file reading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventional config filename, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Errors raised while reading a matrix config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened or read.
    #[error("failed to open config file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A recognized key carried a value that is not valid for its type.
    #[error("invalid value {value:?} for config key {key:?}")]
    Parse { key: String, value: String },
}

/// Matrix construction defaults loaded from a config file.
///
/// Absent keys fall back to zero. No range validation happens here; a zero
/// or negative dimension is returned as-is and rejected downstream by the
/// matrix constructor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatrixConfig {
    pub rows: i64,
    pub cols: i64,
    pub init_value: f64,
}

/// Reads matrix defaults from a line-oriented `key=value` file.
///
/// Each line splits at its first `=`. A key is matched by substring
/// containment, checked in order: a key containing `rows` sets the row
/// count, else one containing `columns` sets the column count, else one
/// containing `initial_value` sets the fill value. Keys like `num_rows`
/// or `total_columns` therefore match too; this looseness is part of the
/// contract. Later matching lines overwrite earlier ones.
///
/// Lines without `=`, lines with nothing after the `=`, and lines whose
/// key matches no field are skipped silently.
///
/// # Errors
///
/// [`ConfigError::Open`] if the path cannot be read, [`ConfigError::Parse`]
/// if a matched value does not parse as its numeric type.
pub fn read_matrix_config(path: impl AsRef<Path>) -> Result<MatrixConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = MatrixConfig::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            // Matches the skip behavior for a bare "key=" line.
            continue;
        }

        if key.contains("rows") {
            config.rows = parse_value(key, value)?;
        } else if key.contains("columns") {
            config.cols = parse_value(key, value)?;
        } else if key.contains("initial_value") {
            config.init_value = parse_value(key, value)?;
        } else {
            tracing::warn!("skipping unrecognized config line: {line:?}");
        }
    }

    tracing::debug!(?config, "loaded matrix config from {}", path.display());
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key: key.to_string(),
        value: value.to_string(),
    })
}
