//! Timestamp propagation onto copied files.
//!
//! Propagation is best-effort: a failure here is reported as a warning and
//! never changes the success/failure classification of the copy itself.
//! Platform differences live behind the [`AttributePropagator`] trait; the
//! implementation is selected once at startup rather than branched on
//! inline. Creation time is not portably settable, so only access and
//! modification times are carried over.

use filetime::FileTime;
use std::path::Path;

use crate::error::Error;

/// What was actually propagated onto the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Propagated {
    pub atime: bool,
    pub mtime: bool,
}

impl Propagated {
    pub fn none() -> Self {
        Self {
            atime: false,
            mtime: false,
        }
    }
}

/// Capability interface for carrying file attributes from source to
/// destination after a successful copy.
pub trait AttributePropagator {
    fn propagate(&self, src: &Path, dst: &Path) -> Result<Propagated, Error>;
}

/// Copies access and modification times using the `filetime` crate.
pub struct TimestampPropagator;

impl AttributePropagator for TimestampPropagator {
    fn propagate(&self, src: &Path, dst: &Path) -> Result<Propagated, Error> {
        let metadata = std::fs::metadata(src).map_err(|e| Error::AttributeCopy {
            path: src.to_path_buf(),
            source: e,
        })?;

        let atime = FileTime::from_last_access_time(&metadata);
        let mtime = FileTime::from_last_modification_time(&metadata);

        filetime::set_file_times(dst, atime, mtime).map_err(|e| Error::AttributeCopy {
            path: dst.to_path_buf(),
            source: e,
        })?;

        Ok(Propagated {
            atime: true,
            mtime: true,
        })
    }
}

/// Does nothing; used when propagation is disabled.
pub struct NoopPropagator;

impl AttributePropagator for NoopPropagator {
    fn propagate(&self, _src: &Path, _dst: &Path) -> Result<Propagated, Error> {
        Ok(Propagated::none())
    }
}

/// Selects the propagator for this run.
pub fn select_propagator(preserve_times: bool) -> Box<dyn AttributePropagator + Send + Sync> {
    if preserve_times {
        Box::new(TimestampPropagator)
    } else {
        Box::new(NoopPropagator)
    }
}
