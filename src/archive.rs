//! Output directory handling and zip archive assembly.
//!
//! Collects the three file groups into a single deflate-compressed zip
//! archive rooted under the module name. Group order and in-group file
//! order are fixed; they determine archive entry order only.

use crate::config::PackagerConfig;
use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive sub-directory for script files.
pub const JS_SUBDIR: &str = "js";

/// Archive sub-directory for binary artifacts.
pub const WASM_SUBDIR: &str = "wasm";

/// A named, ordered list of files sharing a source directory and an
/// archive destination.
#[derive(Debug, Clone)]
pub struct FileGroup {
    /// Directory the files are read from.
    pub source_dir: Utf8PathBuf,
    /// Sub-path inside the archive; empty for the archive root.
    pub dest_subdir: &'static str,
    /// File names in archive order.
    pub files: Vec<String>,
}

/// Build the three canonical file groups for a run.
///
/// The root and script groups resolve relative to the manifest's
/// directory; the binary-artifact group reads from `build_dir`. Order is
/// fixed: root files, script files, then binary artifacts.
#[must_use]
pub fn file_groups(config: &PackagerConfig, build_dir: &Utf8Path) -> Vec<FileGroup> {
    let project_root = config
        .manifest_path
        .parent()
        .unwrap_or(Utf8Path::new(""))
        .to_owned();

    vec![
        FileGroup {
            source_dir: project_root.clone(),
            dest_subdir: "",
            files: config.root_files.clone(),
        },
        FileGroup {
            source_dir: project_root.join(JS_SUBDIR),
            dest_subdir: JS_SUBDIR,
            files: config.script_files.clone(),
        },
        FileGroup {
            source_dir: build_dir.to_owned(),
            dest_subdir: WASM_SUBDIR,
            files: config.wasm_artifact_files.clone(),
        },
    ]
}

/// Create the archive output directory if it does not already exist.
///
/// Idempotent; an existing directory (and any prior archives in it) is
/// left untouched.
///
/// # Errors
///
/// Returns [`PackagerError::Filesystem`] if directory creation fails.
pub fn ensure_output_dir(path: &Utf8Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Assemble the output archive at `dest`.
///
/// Every listed file is verified to exist before the destination is
/// created, so a missing input never leaves a fresh partial archive.
/// Entries are written as `<zip_root>/<dest_subdir>/<filename>` with
/// deflate compression at the maximum level, overwriting any existing
/// archive at `dest`.
///
/// # Errors
///
/// Returns [`PackagerError::MissingFile`] if a listed file is absent, and
/// [`PackagerError::Filesystem`] for other storage failures. A failure
/// during writing may leave a partial file at `dest`, which callers must
/// treat as invalid; re-running recreates the archive from scratch.
pub fn assemble_archive(dest: &Utf8Path, zip_root: &str, groups: &[FileGroup]) -> Result<()> {
    let entries = collect_entries(zip_root, groups)?;

    let file = fs::File::create(dest)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for (source, entry_name) in entries {
        log::trace!("adding {entry_name}");
        writer.start_file(entry_name, options)?;
        let mut reader = fs::File::open(&source)?;
        io::copy(&mut reader, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Resolve groups to `(source_path, entry_name)` pairs, rejecting absent
/// sources before anything is written.
fn collect_entries(zip_root: &str, groups: &[FileGroup]) -> Result<Vec<(Utf8PathBuf, String)>> {
    let mut entries = Vec::new();

    for group in groups {
        for name in &group.files {
            let source = group.source_dir.join(name);
            if !source.is_file() {
                return Err(PackagerError::MissingFile { path: source });
            }

            let entry_name = if group.dest_subdir.is_empty() {
                format!("{zip_root}/{name}")
            } else {
                format!("{zip_root}/{}/{name}", group.dest_subdir)
            };
            entries.push((source, entry_name));
        }
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
