//! densemat demo driver
//!
//! Loads construction defaults from a config file, builds matrices through
//! each constructor, sums them, and prints the renderings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use densemat::{read_matrix_config, Matrix, DEFAULT_CONFIG_FILE};

/// Demonstrate dense matrix construction and addition
#[derive(Parser)]
#[command(name = "densemat")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Config file supplying default rows/columns/initial value
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls
    // back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let defaults = read_matrix_config(&cli.config)
        .with_context(|| format!("reading defaults from {}", cli.config.display()))?;
    println!("{} {} {}", defaults.rows, defaults.cols, defaults.init_value);

    let literal = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .context("building literal matrix")?;
    println!("Literal matrix:\n{literal}");

    let configured =
        Matrix::from_config_file(&cli.config).context("building matrix from config defaults")?;
    println!("Configured matrix:\n{configured}");

    let filled = Matrix::filled(configured.rows(), configured.cols(), 1.0)
        .context("building filled matrix")?;
    println!("Filled matrix:\n{filled}");

    let sum = configured.add(&filled).and_then(|s| s.add(&literal));
    match sum {
        Ok(sum) => println!("Sum of all three:\n{sum}"),
        Err(err) => println!("Matrices are not conformant for addition: {err}"),
    }

    Ok(())
}
