//! Error taxonomy for a copy run.
//!
//! Only a failure to list the source directory (or to create the destination
//! root) aborts a run. Everything else is contained at the per-file boundary
//! and surfaces as a counter increment plus a printed warning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source directory could not be opened or listed. Fatal: there is
    /// nothing to process.
    #[error("cannot read source directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A per-date destination folder could not be created. The affected file
    /// counts as errored and the run continues.
    #[error("cannot create date folder {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file could not be read or the destination file could not
    /// be written. Contained per file.
    #[error("copy failed for {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Timestamp propagation onto the copied file failed. Warning only; the
    /// copy itself still counts as a success.
    #[error("cannot propagate timestamps to {}: {source}", path.display())]
    AttributeCopy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
