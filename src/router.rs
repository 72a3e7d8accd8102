//! Destination path routing.
//!
//! Each file lands in a subfolder of the destination root named after its
//! modification date, `YYYY.MM.DD`, zero-padded. Folders are created
//! idempotently before any file write targets them.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Error;

/// Formats a modification time as a `YYYY.MM.DD` folder name in local time.
pub fn date_folder(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format("%Y.%m.%d").to_string()
}

/// Ensures the per-date subfolder exists under the destination root and
/// returns its path. Creating an already existing folder is a no-op.
///
/// # Errors
///
/// Returns [`Error::DirectoryCreate`] when the folder cannot be created.
/// Callers treat this as a per-file error, not a fatal one.
pub fn ensure_date_dir(dest_root: &Path, folder: &str) -> Result<PathBuf, Error> {
    let dir = dest_root.join(folder);
    std::fs::create_dir_all(&dir).map_err(|e| Error::DirectoryCreate {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_time(y: i32, m: u32, d: u32) -> SystemTime {
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap()
            .into()
    }

    #[test]
    fn test_date_folder_format() {
        assert_eq!(date_folder(local_time(2024, 3, 7)), "2024.03.07");
    }

    #[test]
    fn test_date_folder_zero_padding() {
        assert_eq!(date_folder(local_time(2023, 1, 1)), "2023.01.01");
        assert_eq!(date_folder(local_time(2023, 12, 31)), "2023.12.31");
    }

    #[test]
    fn test_ensure_date_dir_creates_and_is_idempotent() {
        let root = tempfile::tempdir().unwrap();

        let first = ensure_date_dir(root.path(), "2024.03.07").unwrap();
        assert!(first.is_dir());
        assert_eq!(first, root.path().join("2024.03.07"));

        // Second call must succeed against the existing folder
        let second = ensure_date_dir(root.path(), "2024.03.07").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_date_dir_creates_missing_parents() {
        let root = tempfile::tempdir().unwrap();
        let deep_root = root.path().join("not").join("yet").join("there");

        let dir = ensure_date_dir(&deep_root, "2024.03.07").unwrap();
        assert!(dir.is_dir());
    }
}
