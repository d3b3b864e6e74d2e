use std::path::PathBuf;

use clap::Parser;

/// Browse a remote catalog from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-viewer", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file (overrides CV_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Route to open first: `/` or `/item/<id>`
    #[arg(long, default_value = "/")]
    pub route: String,
}
