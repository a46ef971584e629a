//! CLI argument definitions for the packager.
//!
//! The packager deliberately has no operational surface: it is run with
//! no arguments from the module root. Parsing still goes through clap so
//! stray arguments are rejected and `--help`/`--version` behave like any
//! other tool.

use clap::Parser;

/// Bundle the Lichtgeschwindigkeit module into a versioned zip archive.
#[derive(Parser, Debug, Default)]
#[command(name = "lichtgeschwindigkeit-packager")]
#[command(version, about)]
#[command(long_about = concat!(
    "Bundle the Lichtgeschwindigkeit module into a versioned zip archive.\n\n",
    "Reads module.json for the package name and version, builds the Rust ",
    "sources to WebAssembly with wasm-pack, and collects the module files ",
    "and build artifacts into artifact/<name>-<version>.zip.\n\n",
    "The packager takes no options; run it from the module root.",
))]
pub struct Cli {}
