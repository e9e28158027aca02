//! Command-line options for the `seekbar` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "seekbar",
    about = "SeekBar — drag a center-anchored seek bar or set its value from a text field"
)]
pub struct Cli {
    /// TOML config with optional [seek-bar] and [host] tables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file. Filter with SEEKBAR_LOG (default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Where to keep state between runs. Defaults to the user config dir.
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Neither load nor save state.
    #[arg(long, default_value_t = false)]
    pub no_persist: bool,
}
