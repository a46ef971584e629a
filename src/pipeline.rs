//! Packaging pipeline orchestration.
//!
//! Sequences the whole run: manifest load, external build, archive
//! assembly, success report. The ephemeral build directory lives exactly
//! as long as a run; it is removed when the [`TempDir`] drops, on success
//! and on every failure path.

use crate::archive::{assemble_archive, ensure_output_dir, file_groups};
use crate::builder::{CommandExecutor, run_wasm_build};
use crate::config::PackagerConfig;
use crate::error::{PackagerError, Result};
use crate::manifest::load_manifest;
use crate::output::{success_message, write_line};
use camino::Utf8PathBuf;
use std::io::Write;
use tempfile::TempDir;

/// Run the packaging pipeline and report the archive path on `out`.
///
/// Returns the path of the produced archive. The output directory is
/// created if absent; an archive from a previous run at the same path is
/// silently replaced. The build step runs before the archive file is
/// created, so a failed build never leaves a partial archive behind.
///
/// # Errors
///
/// Returns the first failure of manifest loading, the external build, or
/// archive assembly; no step is retried and nothing is recovered.
pub fn run(
    config: &PackagerConfig,
    executor: &dyn CommandExecutor,
    out: &mut dyn Write,
) -> Result<Utf8PathBuf> {
    let manifest = load_manifest(&config.manifest_path)?;
    log::debug!("packaging {} {}", manifest.name, manifest.version);

    let build_dir = TempDir::new()?;
    let build_path = utf8_temp_path(&build_dir)?;

    run_wasm_build(executor, config, &build_path)?;

    ensure_output_dir(&config.output_dir)?;

    let dest = config.output_dir.join(manifest.archive_filename());
    let groups = file_groups(config, &build_path);
    assemble_archive(&dest, &manifest.name, &groups)?;

    write_line(out, success_message(&dest));
    Ok(dest)
}

/// View a temporary directory as a UTF-8 path.
///
/// Temporary directories live under the platform temp root, which is
/// expected to be UTF-8; a non-UTF-8 path surfaces as a filesystem error
/// rather than a panic.
fn utf8_temp_path(dir: &TempDir) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).map_err(|path| {
        PackagerError::Filesystem(std::io::Error::other(format!(
            "temporary build directory path is not valid UTF-8: {}",
            path.display()
        )))
    })
}
