mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use std::io;
use std::path::Path;

use crate::models::FsEntry;

/// Directory enumeration seam.
///
/// Errors stay as `io::Error` so callers can tell a permission failure
/// (recoverable, the directory just lists as empty) apart from everything
/// else (fatal).
pub trait FileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;
}
