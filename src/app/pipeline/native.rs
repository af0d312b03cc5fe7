//! Native-target driver: configure, build, then whatever the run action
//! asks for.

use std::path::Path;

use super::{cache, run_stage, stage_label};
use crate::domain::{AppError, BuildOptions, RunAction, Stage};
use crate::ports::ProcessRunner;

const DEBUG_WRAPPER: &str = "valgrind";

pub fn execute<R: ProcessRunner>(
    root: &Path,
    options: &BuildOptions,
    runner: &R,
) -> Result<(), AppError> {
    println!("Building to native target...");
    println!("---");

    cache::clean(root, options)?;

    // The quoted announcement carries the registry command; the build-type
    // define is appended after the label is rendered.
    let base = Stage::NativeConfigure.command();
    let label = stage_label("CMake command", &base, options.verbose_commands);
    let configure =
        base.arg(format!("-DCMAKE_BUILD_TYPE={}", options.build_variant.build_type()));
    run_stage(runner, root, Stage::NativeConfigure, configure, label, options.verbose)?;

    let build = Stage::NativeBuild.command();
    let label = stage_label("build command", &build, options.verbose_commands);
    run_stage(runner, root, Stage::NativeBuild, build, label, options.verbose)?;
    println!("Build succeeded");

    if options.run_action == RunAction::None {
        return Ok(());
    }

    println!("Running executable");
    let mut run = Stage::NativeRun.command();
    if options.debug_wrap {
        run = run.wrapped_in(DEBUG_WRAPPER);
    }
    // The run phase is always shown, whatever the verbosity setting.
    let build_dir = Stage::NativeRun.dir().resolve(root);
    runner.run(&run, &build_dir, true)?;

    if options.run_action == RunAction::GenerateAndExecute {
        runner.run(&Stage::CompileGenerated.command(), &build_dir, true)?;
        runner.run(&Stage::RunGenerated.command(), &build_dir, true)?;
    }

    Ok(())
}
