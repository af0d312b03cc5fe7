//! virebuild: build-orchestration front end for the Vire toolchain.
//!
//! Drives the external configure/build toolchain for two target pipelines
//! (native, and browser-runtime WASM) and optionally runs the resulting
//! artifact. Stage sequencing, cache invalidation, and output routing are
//! the whole contract; the heavy lifting happens in the subprocesses.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::env;
use std::path::Path;

pub use domain::{AppError, BuildOptions, BuildTarget, BuildVariant, RunAction};

/// Parse `args` and drive the selected pipeline, treating `root` as the
/// repository root.
pub fn build(root: &Path, args: &[String]) -> Result<(), AppError> {
    let options = app::cli::parse_options(args);
    let target = BuildTarget::from_args(args);
    let runner = services::SubprocessRunner::new();
    app::pipeline::execute(root, target, &options, &runner)
}

/// Entry point for the `virebuild` binary: current directory as repository
/// root, process arguments as the flag list.
pub fn run() -> Result<(), AppError> {
    let root = env::current_dir()?;
    let args: Vec<String> = env::args().skip(1).collect();
    build(&root, &args)
}
