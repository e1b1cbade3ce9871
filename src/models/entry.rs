use std::path::PathBuf;

/// One directory child as reported by a filesystem listing.
///
/// `is_dir` follows symlinks: a link whose target is a directory counts as
/// a directory, a broken link counts as a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}
