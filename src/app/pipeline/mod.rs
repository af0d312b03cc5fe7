//! Pipeline drivers: the fixed stage sequence for each build target.

pub mod cache;
pub mod native;
pub mod wasm;

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, BuildOptions, BuildTarget, Stage, StageCommand};
use crate::ports::ProcessRunner;

/// Entry dispatcher: honor `--clean`, then hand control to the driver for
/// the selected target.
pub fn execute<R: ProcessRunner>(
    root: &Path,
    target: BuildTarget,
    options: &BuildOptions,
    runner: &R,
) -> Result<(), AppError> {
    if options.clean_build {
        reset_build_dir(root)?;
    }

    match target {
        BuildTarget::Native => native::execute(root, options, runner),
        BuildTarget::Wasm => wasm::execute(root, options, runner),
    }
}

/// Remove and recreate `build/`. Removal tolerates the directory being
/// absent; any other filesystem error propagates.
fn reset_build_dir(root: &Path) -> Result<(), AppError> {
    let build_dir = root.join("build");
    match fs::remove_dir_all(&build_dir) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir(&build_dir)?;
    Ok(())
}

/// Announce and run one stage.
///
/// The stage's own exit status is deliberately not escalated: a failing
/// external tool reports through its own output and the pipeline carries
/// on. Only a failure to launch propagates.
fn run_stage<R: ProcessRunner>(
    runner: &R,
    root: &Path,
    stage: Stage,
    command: StageCommand,
    label: String,
    visible: bool,
) -> Result<(), AppError> {
    println!("Executing {label}");
    runner.run(&command, &stage.dir().resolve(root), visible)?;
    println!("Executed {label}");
    Ok(())
}

/// Stage label for announcements, quoting the literal command text when
/// requested.
fn stage_label(name: &str, command: &StageCommand, verbose_commands: bool) -> String {
    if verbose_commands {
        format!("{name}: \"{}\"", command.display_line())
    } else {
        name.to_string()
    }
}
