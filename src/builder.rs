//! External wasm build invocation.
//!
//! The packager does not compile anything itself; it shells out to the
//! wasm-pack build tool and trusts it to populate the ephemeral build
//! directory with the binary artifacts. The subprocess boundary sits
//! behind [`CommandExecutor`] so tests can substitute a stub.

use crate::config::PackagerConfig;
use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use std::process::{Command, Output};

/// Target platform passed to the build tool.
const BUILD_TARGET: &str = "web";

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning or running the
    /// command.
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        Command::new(cmd)
            .args(args)
            .output()
            .map_err(PackagerError::from)
    }
}

/// Invoke the wasm build, populating `out_dir` with the binary artifacts.
///
/// The argument contract is fixed:
/// `build --target web --out-dir <out_dir> <rust_source_dir>`. The call
/// blocks until the tool exits; there is deliberately no timeout.
///
/// # Errors
///
/// Returns [`PackagerError::Build`] if the tool exits with a non-zero
/// status, or the executor's spawn failure.
pub fn run_wasm_build(
    executor: &dyn CommandExecutor,
    config: &PackagerConfig,
    out_dir: &Utf8Path,
) -> Result<()> {
    let args = [
        "build",
        "--target",
        BUILD_TARGET,
        "--out-dir",
        out_dir.as_str(),
        config.rust_source_dir.as_str(),
    ];

    log::debug!("running {} {}", config.build_tool, args.join(" "));
    let output = executor.run(config.build_tool.as_str(), &args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PackagerError::Build {
            status: output.status,
            stderr: stderr.trim().to_owned(),
        });
    }

    Ok(())
}
