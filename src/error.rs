//! Error types for the packager.
//!
//! This module defines the four failure kinds a packaging run can surface.
//! None of them are recovered locally; every error propagates to the binary
//! entrypoint, which prints it to stderr and exits non-zero.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a packaging run.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// The module manifest is missing or malformed.
    #[error("failed to load manifest {path}: {reason}")]
    Manifest {
        /// Path the manifest was expected at.
        path: Utf8PathBuf,
        /// Description of the read or parse failure.
        reason: String,
    },

    /// The external build tool exited with a non-zero status.
    #[error("wasm build failed ({status}): {stderr}")]
    Build {
        /// Exit status reported by the build tool.
        status: std::process::ExitStatus,
        /// Captured stderr of the build tool.
        stderr: String,
    },

    /// A file declared in a file group is absent at archive time.
    #[error("missing file: {path}")]
    MissingFile {
        /// Path of the absent file.
        path: Utf8PathBuf,
    },

    /// Directory creation or archive I/O failed.
    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl From<zip::result::ZipError> for PackagerError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Filesystem(err.into())
    }
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::exit_status;

    #[test]
    fn manifest_error_names_the_path() {
        let err = PackagerError::Manifest {
            path: Utf8PathBuf::from("module.json"),
            reason: "expected value at line 1".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("module.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn build_error_includes_status_and_stderr() {
        let err = PackagerError::Build {
            status: exit_status(1),
            stderr: "error[E0308]: mismatched types".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("wasm build failed"));
        assert!(msg.contains("mismatched types"));
    }

    #[test]
    fn missing_file_error_names_the_file() {
        let err = PackagerError::MissingFile {
            path: Utf8PathBuf::from("js/fog.js"),
        };
        assert!(err.to_string().contains("js/fog.js"));
    }

    #[test]
    fn zip_errors_fold_into_filesystem() {
        let err = PackagerError::from(zip::result::ZipError::FileNotFound);
        assert!(matches!(err, PackagerError::Filesystem(_)));
    }
}
