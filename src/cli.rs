//! Command-line interface definitions.
//!
//! Every run parameter can be supplied as an argument. When source,
//! destination, and extension are all given the run is headless; otherwise
//! the [`prompt`](crate::prompt) module collects the missing values
//! interactively.

use crate::tui::BANNER;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stamp")]
#[command(about = "Copy files into date-stamped folders derived from their modification time")]
#[command(before_help = BANNER)]
#[command(version)]
pub struct Args {
    /// Source directory to copy from (prompted for when omitted)
    pub source: Option<PathBuf>,

    /// Destination root directory (prompted for when omitted)
    pub dest: Option<PathBuf>,

    /// Filename suffix filter, matched case-insensitively (e.g. .jpg)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Copy buffer size in MiB
    #[arg(long)]
    pub buffer_size_mib: Option<u64>,

    /// Overwrite files that already exist in the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Recurse into subdirectories of the source
    #[arg(long)]
    pub recursive: bool,

    /// Skip timestamp propagation onto copied files
    #[arg(long)]
    pub no_preserve_times: bool,
}

impl Args {
    /// True when source, destination, and extension were all supplied on
    /// the command line; no prompts are shown in that case.
    pub fn is_headless(&self) -> bool {
        self.source.is_some() && self.dest.is_some() && self.extension.is_some()
    }
}
