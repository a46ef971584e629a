//! Lichtgeschwindigkeit packager CLI entrypoint.
//!
//! This binary builds the module's WebAssembly artifacts and bundles them
//! with the static module files into a versioned zip archive under
//! `artifact/`. It prints one line naming the archive on success and the
//! failure reason on stderr otherwise.

use clap::Parser;
use lichtgeschwindigkeit_packager::builder::SystemCommandExecutor;
use lichtgeschwindigkeit_packager::cli::Cli;
use lichtgeschwindigkeit_packager::config::PackagerConfig;
use lichtgeschwindigkeit_packager::error::Result;
use lichtgeschwindigkeit_packager::output::write_line;
use lichtgeschwindigkeit_packager::pipeline;
use std::io::Write;

fn main() {
    let _cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(out: &mut dyn Write) -> Result<()> {
    let config = PackagerConfig::default();
    pipeline::run(&config, &SystemCommandExecutor, out)?;
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}
