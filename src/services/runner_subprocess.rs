use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{AppError, StageCommand};
use crate::ports::ProcessRunner;

/// `ProcessRunner` backed by `std::process::Command`.
///
/// Relative programs such as `./VIRELANG` resolve against `dir`, since the
/// working directory is switched before the child executes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubprocessRunner;

impl SubprocessRunner {
    pub fn new() -> Self {
        SubprocessRunner
    }
}

impl ProcessRunner for SubprocessRunner {
    fn run(&self, command: &StageCommand, dir: &Path, visible: bool) -> Result<bool, AppError> {
        let mut child = Command::new(&command.program);
        child.args(&command.args).current_dir(dir);

        if !visible {
            child.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = child.status().map_err(|e| AppError::CommandSpawn {
            command: command.display_line(),
            details: e.to_string(),
        })?;

        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    #[test]
    fn reports_child_exit_status() {
        let dir = tempdir().unwrap();
        let runner = SubprocessRunner::new();

        let ok = runner.run(&StageCommand::new("sh", &["-c", "exit 0"]), dir.path(), false);
        assert!(ok.unwrap());

        let failed = runner.run(&StageCommand::new("sh", &["-c", "exit 3"]), dir.path(), false);
        assert!(!failed.unwrap());
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let dir = tempdir().unwrap();
        let runner = SubprocessRunner::new();

        let err = runner
            .run(&StageCommand::new("virebuild-no-such-tool", &[]), dir.path(), false)
            .unwrap_err();
        assert!(matches!(err, AppError::CommandSpawn { .. }));
        assert!(err.to_string().contains("virebuild-no-such-tool"));
    }

    #[test]
    fn relative_programs_resolve_against_the_working_directory() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello.sh");
        fs::write(&script, "#!/bin/sh\ntouch ran\n").unwrap();
        let mut perms = fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).unwrap();

        let runner = SubprocessRunner::new();
        let ok = runner.run(&StageCommand::new("./hello.sh", &[]), dir.path(), false).unwrap();

        assert!(ok);
        assert!(dir.path().join("ran").exists());
    }
}
