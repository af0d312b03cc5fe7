use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, StageCommand};
use crate::ports::ProcessRunner;

/// One recorded `ProcessRunner::run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
    pub visible: bool,
}

/// In-memory `ProcessRunner` for tests.
///
/// Records every call instead of spawning anything, and can be told to
/// report failure (as if the child exited non-zero) for selected programs.
// Arc<Mutex> so clones observe the same call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_programs: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that reports failure for the given programs.
    pub fn failing(programs: &[&str]) -> Self {
        Self {
            calls: Arc::default(),
            fail_programs: programs.iter().map(|program| program.to_string()).collect(),
        }
    }

    /// Snapshot of every call recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Programs invoked, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.program).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &StageCommand, dir: &Path, visible: bool) -> Result<bool, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: command.program.clone(),
            args: command.args.clone(),
            dir: dir.to_path_buf(),
            visible,
        });
        Ok(!self.fail_programs.contains(&command.program))
    }
}
