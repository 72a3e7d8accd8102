//! # stamp - Date-Stamped File Copy Tool
//!
//! stamp copies files from a source directory into date-stamped subfolders
//! of a destination directory. Each file lands in a folder named after its
//! modification date (`YYYY.MM.DD`), which makes it easy to offload camera
//! cards, phone dumps, or scanner output into a chronological archive.
//!
//! ## Features
//!
//! - **Suffix Filtering**: Only files whose name ends with the configured
//!   extension are copied; matching is case-insensitive
//! - **Date Routing**: Destination folders are derived from each file's
//!   modification time and created on demand
//! - **Overwrite Control**: Existing destination files are skipped unless
//!   overwriting is explicitly enabled
//! - **Recursive Mode**: Optionally descends into subdirectories and routes
//!   every nested match by its own modification date
//! - **Timestamp Propagation**: Best-effort carry-over of access and
//!   modification times onto copied files
//! - **Run Log**: A plain-text `stamp.log` summarizing every run is written
//!   into the destination root
//!
//! ## Command Line Usage
//!
//! ```bash
//! # Fully interactive: every parameter is prompted for
//! stamp
//!
//! # Everything on the command line
//! stamp /photos/card /photos/sorted --extension .jpg --recursive
//!
//! # Overwrite existing files, larger copy buffer
//! stamp /photos/card /photos/sorted -e .jpg --overwrite --buffer-size-mib 8
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use stamp::config::{RunConfig, MEBIBYTE};
//! use stamp::{scanner, transfer};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> color_eyre::Result<()> {
//!     let config = RunConfig {
//!         source: PathBuf::from("/photos/card"),
//!         dest: PathBuf::from("/photos/sorted"),
//!         extension: ".jpg".to_string(),
//!         overwrite: false,
//!         recursive: false,
//!         buffer_size: MEBIBYTE,
//!         preserve_times: true,
//!     };
//!
//!     let listing = scanner::scan(&config.source, &config.extension, config.recursive).await?;
//!     let stats = transfer::run_copy(config, listing, |_| {}).await?;
//!
//!     println!("copied {} files", stats.copied);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! stamp uses a TOML configuration file located at `~/.config/stamp/config.toml`
//! for defaults that rarely change (buffer size, timestamp propagation, UI
//! theme). On first run, a default configuration is created automatically.
//!
//! ## Module Organization
//!
//! - [`attrs`]: Timestamp propagation onto copied files
//! - [`cli`]: Command-line argument parsing
//! - [`config`]: Persisted settings and the per-run configuration
//! - [`error`]: Error taxonomy for a copy run
//! - [`log`]: Run log generation
//! - [`prompt`]: Interactive parameter collection
//! - [`report`]: Outcome counters
//! - [`router`]: Date-folder derivation and creation
//! - [`scanner`]: Source directory enumeration
//! - [`transfer`]: Buffered copy and the per-file processing loop
//! - [`tui`]: Terminal output components

pub mod attrs;
pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod prompt;
pub mod report;
pub mod router;
pub mod scanner;
pub mod transfer;
pub mod tui;

// Re-export commonly used types
pub use config::{RunConfig, Settings};
pub use report::{Outcome, RunStats};
pub use scanner::{FileEntry, Listing};
