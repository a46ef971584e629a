//! Home directory resolution for locating the build tool.
//!
//! Directory discovery sits behind a trait so tests can substitute fixed
//! paths without touching the real environment.

use std::path::PathBuf;

/// Abstraction over platform base-directory discovery.
#[cfg_attr(test, mockall::automock)]
pub trait BaseDirs {
    /// Returns the user's home directory, if one is known.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Resolves directories from the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}
