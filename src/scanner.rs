//! Source directory enumeration.
//!
//! Lists the source directory (immediate children, or the full tree when
//! recursion is requested), keeps entries whose name ends with the
//! configured suffix, and yields metadata only. File contents are never
//! opened here.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::task;
use walkdir::WalkDir;

use crate::error::Error;

/// Metadata for one file selected by the suffix filter.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub modified: SystemTime,
}

/// Result of enumerating the source directory.
///
/// Per-entry failures (unreadable metadata, unwalkable subdirectories) are
/// collected as strings rather than aborting the enumeration; only a source
/// directory that cannot be opened at all is fatal.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<FileEntry>,
    pub errors: Vec<String>,
}

/// Case-insensitive suffix match against the extension filter.
pub fn matches_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .to_lowercase()
        .ends_with(&extension.to_lowercase())
}

/// Enumerates the source directory and applies the suffix filter.
///
/// Without `recursive`, only immediate children are considered; with it,
/// the whole tree is walked and matching files from all levels are yielded.
/// Directories are never yielded as entries.
///
/// # Errors
///
/// Returns [`Error::DirectoryAccess`] when the source directory cannot be
/// opened or listed (non-existent, permission denied). Per-entry errors are
/// recorded in [`Listing::errors`] instead.
pub fn scan_source(source: &Path, extension: &str, recursive: bool) -> Result<Listing, Error> {
    // Open the directory up front so a missing or unreadable source fails
    // the whole run instead of surfacing as a mid-walk entry error.
    std::fs::read_dir(source).map_err(|e| Error::DirectoryAccess {
        path: source.to_path_buf(),
        source: e,
    })?;

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut listing = Listing::default();

    for entry in WalkDir::new(source).min_depth(1).max_depth(max_depth) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let file_name = entry.file_name().to_string_lossy().to_string();
                if !matches_extension(&file_name, extension) {
                    continue;
                }

                match entry.metadata() {
                    Ok(metadata) => match metadata.modified() {
                        Ok(modified) => listing.entries.push(FileEntry {
                            path: entry.into_path(),
                            file_name,
                            modified,
                        }),
                        Err(e) => listing.errors.push(format!(
                            "Error reading modification time of {}: {}",
                            entry.path().display(),
                            e
                        )),
                    },
                    Err(e) => listing.errors.push(format!(
                        "Error reading {}: {}",
                        entry.path().display(),
                        e
                    )),
                }
            }
            Ok(_) => {}
            Err(e) => listing
                .errors
                .push(format!("Error walking directory: {}", e)),
        }
    }

    Ok(listing)
}

/// Async wrapper around [`scan_source`] that runs the directory walk on a
/// blocking thread.
pub async fn scan(source: &Path, extension: &str, recursive: bool) -> color_eyre::Result<Listing> {
    let source = source.to_path_buf();
    let extension = extension.to_string();

    let listing =
        task::spawn_blocking(move || scan_source(&source, &extension, recursive)).await??;

    Ok(listing)
}
