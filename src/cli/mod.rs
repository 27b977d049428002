//! Command-line subcommands.
//!
//! Each submodule owns its clap `Args` struct and a `run()` entry point;
//! failures are logged and the command returns without touching the
//! process exit path.

pub mod decode;
pub mod encode;
pub mod matrix;
pub mod seq;

use std::path::{Path, PathBuf};
use tracing::error;

/// Resolve the output file path for a command: make the output directory
/// absolute, create it if needed, and attach the filename and extension.
/// Logs and returns `None` on failure.
pub(crate) fn resolve_output(dir: &Path, filename: &str, extension: &str) -> Option<PathBuf> {
    let output_path = match std::path::absolute(dir) {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to resolve the output directory: {}", e);
            return None;
        }
    };
    if let Err(e) = std::fs::create_dir_all(&output_path) {
        error!("Failed to create the output directory: {}", e);
        return None;
    }
    Some(output_path.join(filename).with_extension(extension))
}

/// Read a structure file into its raw text, logging on failure.
pub(crate) fn read_input(input: &Path) -> Option<String> {
    let input_path = match Path::new(input).canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to retrieve input file: {}", e);
            return None;
        }
    };
    match std::fs::read_to_string(&input_path) {
        Ok(content) => Some(content),
        Err(e) => {
            error!("Failed to read {}: {}", input_path.display(), e);
            None
        }
    }
}
