//! File transfer and the per-file processing loop.
//!
//! Copies happen strictly one file at a time, in enumeration order. Each
//! file's handles are opened, used, and dropped before the next file is
//! touched. Per-file failures are converted into counter increments and the
//! run continues; only source enumeration and destination-root creation can
//! abort a run.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tokio::task;

use crate::attrs::select_propagator;
use crate::config::RunConfig;
use crate::error::Error;
use crate::report::{Outcome, RunStats};
use crate::router::{date_folder, ensure_date_dir};
use crate::scanner::Listing;

/// Per-file events emitted from the copy loop, in processing order.
#[derive(Debug, Clone)]
pub enum Progress {
    Copy { file_name: String, date_folder: String },
    Overwrite { file_name: String, date_folder: String },
    Skip { file_name: String, date_folder: String },
    Failed { file_name: String, error: String },
    AttributeWarning { file_name: String, error: String },
}

/// Copies the full byte content of `src` to `dst` through a bounded
/// in-memory buffer. Returns the number of bytes written.
///
/// The buffer size only affects memory use and syscall count; the output
/// bytes are identical for any size.
///
/// # Errors
///
/// Returns [`Error::Copy`] when the source cannot be read or the
/// destination cannot be created or written.
pub fn copy_file(src: &Path, dst: &Path, buffer_size: u64) -> Result<u64, Error> {
    let mut source = File::open(src).map_err(|e| Error::Copy {
        path: src.to_path_buf(),
        source: e,
    })?;
    let mut dest = File::create(dst).map_err(|e| Error::Copy {
        path: dst.to_path_buf(),
        source: e,
    })?;

    let mut buffer = vec![0u8; buffer_size.max(1) as usize];
    let mut written = 0u64;

    loop {
        let read = source.read(&mut buffer).map_err(|e| Error::Copy {
            path: src.to_path_buf(),
            source: e,
        })?;
        if read == 0 {
            break;
        }
        dest.write_all(&buffer[..read]).map_err(|e| Error::Copy {
            path: dst.to_path_buf(),
            source: e,
        })?;
        written += read as u64;
    }

    Ok(written)
}

/// Runs the copy pipeline over an already enumerated source listing.
///
/// Creates the destination root, then for each entry: routes it to its
/// per-date folder, applies the overwrite policy, copies the bytes, and
/// propagates timestamps when enabled. The `progress` callback receives one
/// event per file (plus attribute warnings) for display.
///
/// # Errors
///
/// Only destination-root creation can fail here; everything per-file is
/// contained and tallied into the returned [`RunStats`].
pub async fn run_copy<F>(
    config: RunConfig,
    listing: Listing,
    progress: F,
) -> color_eyre::Result<RunStats>
where
    F: Fn(Progress) + Send + Sync + 'static,
{
    // Destination root must exist before any per-date folder is derived
    tokio::fs::create_dir_all(&config.dest).await?;

    let stats = task::spawn_blocking(move || {
        let propagator = select_propagator(config.preserve_times);
        let mut stats = RunStats::new();

        for entry in &listing.entries {
            let folder = date_folder(entry.modified);
            let dest_path = config.dest.join(&folder).join(&entry.file_name);
            let exists = dest_path.exists();

            if exists && !config.overwrite {
                progress(Progress::Skip {
                    file_name: entry.file_name.clone(),
                    date_folder: folder,
                });
                stats.record(Outcome::SkippedExists);
                continue;
            }

            // Exactly one of Skip/Copy/Overwrite is emitted per file, before
            // any filesystem write; Failed and AttributeWarning are extra
            // lines on top.
            if exists {
                progress(Progress::Overwrite {
                    file_name: entry.file_name.clone(),
                    date_folder: folder.clone(),
                });
            } else {
                progress(Progress::Copy {
                    file_name: entry.file_name.clone(),
                    date_folder: folder.clone(),
                });
            }

            if let Err(e) = ensure_date_dir(&config.dest, &folder) {
                progress(Progress::Failed {
                    file_name: entry.file_name.clone(),
                    error: e.to_string(),
                });
                stats.add_error(e.to_string());
                stats.record(Outcome::Errored);
                continue;
            }

            match copy_file(&entry.path, &dest_path, config.buffer_size) {
                Ok(bytes) => {
                    stats.add_bytes(bytes);
                    if let Err(e) = propagator.propagate(&entry.path, &dest_path) {
                        progress(Progress::AttributeWarning {
                            file_name: entry.file_name.clone(),
                            error: e.to_string(),
                        });
                        stats.add_warning(e.to_string());
                    }
                    stats.record(if exists {
                        Outcome::Overwritten
                    } else {
                        Outcome::Copied
                    });
                }
                Err(e) => {
                    progress(Progress::Failed {
                        file_name: entry.file_name.clone(),
                        error: e.to_string(),
                    });
                    stats.add_error(e.to_string());
                    stats.record(Outcome::Errored);
                }
            }
        }

        // Enumeration problems surface alongside attribute warnings
        for error in listing.errors {
            stats.add_warning(error);
        }

        stats
    })
    .await?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MEBIBYTE;
    use crate::scanner::scan_source;
    use chrono::TimeZone;
    use filetime::FileTime;
    use std::fs;
    use std::time::SystemTime;

    fn local_time(y: i32, m: u32, d: u32) -> SystemTime {
        chrono::Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap()
            .into()
    }

    fn run_config(source: &Path, dest: &Path) -> RunConfig {
        RunConfig {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            extension: ".jpg".to_string(),
            overwrite: false,
            recursive: false,
            buffer_size: MEBIBYTE,
            preserve_times: false,
        }
    }

    #[test]
    fn test_copy_file_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        let content: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        fs::write(&src, &content).unwrap();

        let written = copy_file(&src, &dst, MEBIBYTE).unwrap();

        assert_eq!(written, content.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), content);
    }

    #[test]
    fn test_copy_file_output_independent_of_buffer_size() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let content: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
        fs::write(&src, &content).unwrap();

        let tiny = dir.path().join("tiny.bin");
        let large = dir.path().join("large.bin");
        copy_file(&src, &tiny, 1).unwrap();
        copy_file(&src, &large, MEBIBYTE).unwrap();

        assert_eq!(fs::read(&tiny).unwrap(), content);
        assert_eq!(fs::read(&large).unwrap(), content);
    }

    #[test]
    fn test_copy_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("gone.bin");
        let dst = dir.path().join("dst.bin");

        let err = copy_file(&src, &dst, MEBIBYTE).unwrap_err();
        assert!(matches!(err, Error::Copy { .. }));
        assert!(!dst.exists());
    }

    #[tokio::test]
    async fn test_run_copies_matching_file_into_date_folder() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        fs::write(src_dir.path().join("a.jpg"), b"jpeg bytes").unwrap();
        fs::write(src_dir.path().join("b.png"), b"png bytes").unwrap();
        filetime::set_file_mtime(
            src_dir.path().join("a.jpg"),
            FileTime::from_system_time(local_time(2024, 3, 7)),
        )
        .unwrap();

        let config = run_config(src_dir.path(), dest_dir.path());
        let listing = scan_source(&config.source, &config.extension, false).unwrap();
        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.copied, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.overwritten, 0);
        assert_eq!(stats.errored, 0);

        let copied = dest_dir.path().join("2024.03.07").join("a.jpg");
        assert_eq!(fs::read(&copied).unwrap(), b"jpeg bytes");

        // The .png must not appear anywhere under the destination
        let stray = walkdir::WalkDir::new(dest_dir.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .any(|e| e.file_name() == "b.png");
        assert!(!stray);
    }

    #[tokio::test]
    async fn test_run_skips_existing_without_overwrite() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        fs::write(src_dir.path().join("a.jpg"), b"new content").unwrap();
        filetime::set_file_mtime(
            src_dir.path().join("a.jpg"),
            FileTime::from_system_time(local_time(2024, 3, 7)),
        )
        .unwrap();

        let pre_existing = dest_dir.path().join("2024.03.07");
        fs::create_dir_all(&pre_existing).unwrap();
        fs::write(pre_existing.join("a.jpg"), b"old content").unwrap();

        let config = run_config(src_dir.path(), dest_dir.path());
        let listing = scan_source(&config.source, &config.extension, false).unwrap();
        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.copied, 0);
        assert_eq!(stats.overwritten, 0);
        assert_eq!(
            fs::read(pre_existing.join("a.jpg")).unwrap(),
            b"old content"
        );
    }

    #[tokio::test]
    async fn test_run_overwrites_existing_when_enabled() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        fs::write(src_dir.path().join("a.jpg"), b"new content").unwrap();
        filetime::set_file_mtime(
            src_dir.path().join("a.jpg"),
            FileTime::from_system_time(local_time(2024, 3, 7)),
        )
        .unwrap();

        let pre_existing = dest_dir.path().join("2024.03.07");
        fs::create_dir_all(&pre_existing).unwrap();
        fs::write(pre_existing.join("a.jpg"), b"old content").unwrap();

        let mut config = run_config(src_dir.path(), dest_dir.path());
        config.overwrite = true;
        let listing = scan_source(&config.source, &config.extension, false).unwrap();
        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.overwritten, 1);
        assert_eq!(stats.copied, 0);
        assert_eq!(stats.skipped, 0);
        assert_eq!(
            fs::read(pre_existing.join("a.jpg")).unwrap(),
            b"new content"
        );
    }

    #[tokio::test]
    async fn test_run_fresh_copy_counts_as_copied_even_with_overwrite_on() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        fs::write(src_dir.path().join("a.jpg"), b"content").unwrap();

        let mut config = run_config(src_dir.path(), dest_dir.path());
        config.overwrite = true;
        let listing = scan_source(&config.source, &config.extension, false).unwrap();
        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.copied, 1);
        assert_eq!(stats.overwritten, 0);
    }

    #[tokio::test]
    async fn test_run_propagates_mtime_when_enabled() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        let src_file = src_dir.path().join("a.jpg");
        fs::write(&src_file, b"content").unwrap();
        let stamp = FileTime::from_system_time(local_time(2024, 3, 7));
        filetime::set_file_mtime(&src_file, stamp).unwrap();

        let mut config = run_config(src_dir.path(), dest_dir.path());
        config.preserve_times = true;
        let listing = scan_source(&config.source, &config.extension, false).unwrap();
        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.copied, 1);
        assert!(stats.warnings.is_empty());

        let copied = dest_dir.path().join("2024.03.07").join("a.jpg");
        let copied_mtime =
            FileTime::from_last_modification_time(&fs::metadata(&copied).unwrap());
        assert_eq!(copied_mtime.unix_seconds(), stamp.unix_seconds());
    }

    #[tokio::test]
    async fn test_run_unreadable_entry_errors_and_continues() {
        let src_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        fs::write(src_dir.path().join("good.jpg"), b"fine").unwrap();
        fs::write(src_dir.path().join("bad.jpg"), b"gone").unwrap();

        let config = run_config(src_dir.path(), dest_dir.path());
        let mut listing = scan_source(&config.source, &config.extension, false).unwrap();
        // Simulate a source file that disappears between scan and copy
        for entry in &mut listing.entries {
            if entry.file_name == "bad.jpg" {
                entry.path = src_dir.path().join("vanished.jpg");
            }
        }

        let stats = run_copy(config, listing, |_| {}).await.unwrap();

        assert_eq!(stats.copied, 1);
        assert_eq!(stats.errored, 1);
        assert_eq!(stats.errors.len(), 1);
    }
}
