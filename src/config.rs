//! Packager configuration.
//!
//! The deployment flow is driven entirely by a fixed layout: which files
//! ship at the archive root, which scripts ship under `js/`, and which
//! build artifacts ship under `wasm/`. This module gathers that layout
//! into an explicit configuration struct passed into the pipeline entry
//! point, with [`Default`] reproducing the canonical module layout.

use crate::dirs::{BaseDirs, SystemBaseDirs};
use camino::Utf8PathBuf;

/// Files shipped at the archive root.
pub const ROOT_FILES: &[&str] = &["module.json", "README.md", "CHANGELOG.md"];

/// Script files shipped under `js/` in the archive.
pub const SCRIPT_FILES: &[&str] = &["fog.js", "raycasting.js"];

/// Build artifacts shipped under `wasm/` in the archive.
pub const WASM_ARTIFACT_FILES: &[&str] =
    &["lichtgeschwindigkeit_bg.wasm", "lichtgeschwindigkeit.js"];

/// Configuration for a packaging run.
///
/// `manifest_path` anchors the run: the root and script file groups are
/// resolved relative to the manifest's directory.
#[derive(Debug, Clone)]
pub struct PackagerConfig {
    /// Path to the module manifest.
    pub manifest_path: Utf8PathBuf,
    /// Files placed at the archive root, in archive order.
    pub root_files: Vec<String>,
    /// Files placed under `js/` in the archive, in archive order.
    pub script_files: Vec<String>,
    /// Build artifacts placed under `wasm/` in the archive, in archive order.
    pub wasm_artifact_files: Vec<String>,
    /// Directory receiving the output archive.
    pub output_dir: Utf8PathBuf,
    /// Build tool executable to invoke.
    pub build_tool: Utf8PathBuf,
    /// Source tree handed to the build tool.
    pub rust_source_dir: Utf8PathBuf,
}

impl PackagerConfig {
    /// Build the canonical configuration, resolving the build tool through
    /// the given directory provider.
    #[must_use]
    pub fn with_dirs(dirs: &dyn BaseDirs) -> Self {
        Self {
            manifest_path: Utf8PathBuf::from("module.json"),
            root_files: to_owned_list(ROOT_FILES),
            script_files: to_owned_list(SCRIPT_FILES),
            wasm_artifact_files: to_owned_list(WASM_ARTIFACT_FILES),
            output_dir: Utf8PathBuf::from("artifact"),
            build_tool: default_build_tool(dirs),
            rust_source_dir: Utf8PathBuf::from("rust"),
        }
    }
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self::with_dirs(&SystemBaseDirs)
    }
}

/// Resolve the build tool the way the deployment flow expects it:
/// `~/.cargo/bin/wasm-pack`, falling back to a bare `wasm-pack` (PATH
/// lookup) when no home directory is known or its path is not UTF-8.
fn default_build_tool(dirs: &dyn BaseDirs) -> Utf8PathBuf {
    dirs.home_dir()
        .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
        .map(|home| home.join(".cargo").join("bin").join("wasm-pack"))
        .unwrap_or_else(|| Utf8PathBuf::from("wasm-pack"))
}

fn to_owned_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}
