//! Shared helpers for the packager behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use lichtgeschwindigkeit_packager::builder::CommandExecutor;
use lichtgeschwindigkeit_packager::config::{
    PackagerConfig, ROOT_FILES, SCRIPT_FILES, WASM_ARTIFACT_FILES,
};
use lichtgeschwindigkeit_packager::error::Result;
use lichtgeschwindigkeit_packager::test_utils::{failure_output, success_output};
use std::cell::RefCell;
use std::fs;
use std::process::Output;

/// A fake wasm-pack mimicking the build tool's side effect: on success it
/// writes the expected binary artifacts into the `--out-dir` it is given.
/// Invocations and observed out-dirs are recorded so scenarios can assert
/// on them after the run.
pub struct FakeWasmPack {
    exit_code: i32,
    invocations: RefCell<u32>,
    out_dirs: RefCell<Vec<Utf8PathBuf>>,
}

impl FakeWasmPack {
    /// A build tool that exits 0 and produces both binary artifacts.
    pub fn succeeding() -> Self {
        Self::with_exit_code(0)
    }

    /// A build tool that exits 1 and produces nothing.
    pub fn failing() -> Self {
        Self::with_exit_code(1)
    }

    fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: RefCell::new(0),
            out_dirs: RefCell::new(Vec::new()),
        }
    }

    /// Number of times the build tool was invoked.
    pub fn invocation_count(&self) -> u32 {
        *self.invocations.borrow()
    }

    /// Every `--out-dir` value the build tool was handed, in order.
    pub fn observed_out_dirs(&self) -> Vec<Utf8PathBuf> {
        self.out_dirs.borrow().clone()
    }
}

impl CommandExecutor for FakeWasmPack {
    fn run(&self, _cmd: &str, args: &[&str]) -> Result<Output> {
        *self.invocations.borrow_mut() += 1;

        let out_dir = args
            .windows(2)
            .find(|pair| pair[0] == "--out-dir")
            .map(|pair| Utf8PathBuf::from(pair[1]))
            .expect("build invocation always carries --out-dir");
        self.out_dirs.borrow_mut().push(out_dir.clone());

        if self.exit_code != 0 {
            return Ok(failure_output("fake wasm-pack refused to build"));
        }

        for name in WASM_ARTIFACT_FILES {
            fs::write(out_dir.join(name), format!("artifact {name}"))
                .expect("write fake build artifact");
        }
        Ok(success_output())
    }
}

/// Lay out a complete module project under `root`: manifest, root files,
/// and script files. The `rust/` source tree exists but stays empty; the
/// build tool is faked anyway.
pub fn seed_project(root: &Utf8Path, name: &str, version: &str) {
    fs::write(
        root.join("module.json"),
        format!(r#"{{"name": "{name}", "version": "{version}", "title": "Lichtgeschwindigkeit"}}"#),
    )
    .expect("write manifest");
    for file in ROOT_FILES.iter().filter(|&&file| file != "module.json") {
        fs::write(root.join(file), format!("contents of {file}")).expect("write root file");
    }

    let js_dir = root.join("js");
    fs::create_dir_all(&js_dir).expect("mkdir js");
    for file in SCRIPT_FILES {
        fs::write(js_dir.join(file), format!("// {file}")).expect("write script file");
    }

    fs::create_dir_all(root.join("rust")).expect("mkdir rust");
}

/// Configuration anchored on a seeded project directory.
pub fn project_config(root: &Utf8Path) -> PackagerConfig {
    PackagerConfig {
        manifest_path: root.join("module.json"),
        root_files: owned(ROOT_FILES),
        script_files: owned(SCRIPT_FILES),
        wasm_artifact_files: owned(WASM_ARTIFACT_FILES),
        output_dir: root.join("artifact"),
        build_tool: Utf8PathBuf::from("wasm-pack"),
        rust_source_dir: root.join("rust"),
    }
}

/// Entry names of a zip archive, in central directory order.
pub fn archive_entries(path: &Utf8Path) -> Vec<String> {
    let file = fs::File::open(path).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("read archive");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_owned())
        .collect()
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}
