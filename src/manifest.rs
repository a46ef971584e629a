//! Module manifest loading.
//!
//! The manifest is the `module.json` document at the project root. Only
//! the `name` and `version` fields matter to the packager; everything else
//! the module declares is ignored.

use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

/// Module metadata read from `module.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleManifest {
    /// Package identifier; names the archive and its top-level directory.
    pub name: String,
    /// Module version; appears in the archive filename.
    pub version: String,
}

impl ModuleManifest {
    /// Filename of the output archive for this manifest.
    #[must_use]
    pub fn archive_filename(&self) -> String {
        format!("{}-{}.zip", self.name, self.version)
    }
}

/// Load and parse the manifest at `path`.
///
/// # Errors
///
/// Returns [`PackagerError::Manifest`] if the file cannot be read or does
/// not contain a JSON object with `name` and `version` string fields.
pub fn load_manifest(path: &Utf8Path) -> Result<ModuleManifest> {
    let contents = fs::read_to_string(path).map_err(|e| PackagerError::Manifest {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| PackagerError::Manifest {
        path: path.to_owned(),
        reason: e.to_string(),
    })
}
