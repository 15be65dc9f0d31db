//! Command-line interface for tictouch.

use clap::Parser;
use std::path::PathBuf;

/// Touch-driven tic-tac-toe. Reads presses as `x,y` lines on stdin.
#[derive(Parser, Debug)]
#[command(name = "tictouch")]
#[command(about = "Touch-driven tic-tac-toe for small displays", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "tictouch.toml")]
    pub config: PathBuf,

    /// Override panel width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override panel height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Echo raw touch coordinates on the status line
    #[arg(long)]
    pub show_readout: bool,
}
