//! Browser-runtime driver: cross-compile, then package the module and its
//! loader into `wasm-build/`.
//!
//! The run action never applies here; this pipeline produces a deployable
//! artifact, not something to execute locally.

use std::path::Path;

use super::{cache, run_stage, stage_label};
use crate::domain::{AppError, BuildOptions, Stage};
use crate::ports::ProcessRunner;

pub fn execute<R: ProcessRunner>(
    root: &Path,
    options: &BuildOptions,
    runner: &R,
) -> Result<(), AppError> {
    println!("Building to wasm target...");
    println!("---");

    cache::clean(root, options)?;

    // No build-type define here: the cross-compilation toolchain pins its
    // own build type.
    let configure = Stage::WasmConfigure.command();
    let label = stage_label("CMake command", &configure, options.verbose_commands);
    run_stage(runner, root, Stage::WasmConfigure, configure, label, options.verbose)?;

    let build = Stage::WasmBuild.command();
    let label = stage_label("build command", &build, options.verbose_commands);
    run_stage(runner, root, Stage::WasmBuild, build, label, options.verbose)?;
    println!("Build succeeded");

    println!("Copying generated files to wasm-build directory");
    for stage in [Stage::WasmCopyModule, Stage::WasmCopyLoader] {
        runner.run(&stage.command(), &stage.dir().resolve(root), options.verbose)?;
    }
    println!("Copied generated files to wasm-build directory");

    println!("Compressing generated WASM file to .gz");
    let compress = Stage::WasmCompress.command();
    runner.run(&compress, &Stage::WasmCompress.dir().resolve(root), options.verbose)?;
    println!("Compressed generated WASM file to .gz");

    Ok(())
}
