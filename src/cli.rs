use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "followcheck",
    version,
    about = "Compare exported follow/follower lists and report who does not follow back",
    long_about = None
)]
pub struct Args {
    /// File with the accounts you follow, one handle per line
    #[arg(
        long = "following-file",
        value_name = "PATH",
        default_value = "following.txt",
        value_hint = ValueHint::FilePath
    )]
    pub following_file: PathBuf,

    /// File with the accounts following you, one handle per line
    #[arg(
        long = "followers-file",
        value_name = "PATH",
        default_value = "followers.txt",
        value_hint = ValueHint::FilePath
    )]
    pub followers_file: PathBuf,

    /// Output JSON instead of the text report
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV instead of the text report
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Verbose output; also prints the full contents of both lists
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if either input list cannot be read.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
