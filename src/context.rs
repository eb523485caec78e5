//! Service context bundling the port trait objects.

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects commands need.
///
/// Constructors wire up different adapter implementations; tests substitute
/// an in-memory filesystem by building the struct directly.
pub struct ServiceContext {
    /// Filesystem for reading build models and writing documents.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }
}
