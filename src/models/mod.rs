mod entry;

pub use entry::FsEntry;
