//! Shared testing utilities for virebuild CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated repository root with a stub toolchain fronting PATH.
///
/// Each stub appends `<name> <args> [<cwd>]` to a shared log and echoes
/// `<name>-output` on stdout, so tests can assert stage order, arguments,
/// working directories, and output routing without a real CMake, Ninja, or
/// Emscripten install.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    bin_dir: PathBuf,
    log_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let bin_dir = root.path().join("stub-bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create stub bin directory");
        let log_path = root.path().join("calls.log");

        let ctx = Self { root, bin_dir, log_path };
        for tool in ["cmake", "emcmake", "ninja", "gzip", "valgrind", "clang++"] {
            ctx.stub_tool(tool, 0);
        }
        ctx
    }

    /// Repository root the binary runs in.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding the PATH stubs.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Install (or replace) a PATH stub that exits with `code`.
    pub fn stub_tool(&self, name: &str, code: i32) {
        let script = format!(
            "#!/bin/sh\necho \"{name} $* [$PWD]\" >> \"{log}\"\necho \"{name}-output\"\nexit {code}\n",
            log = self.log_path.display(),
        );
        write_executable(&self.bin_dir.join(name), &script);
    }

    /// Remove a PATH stub so the tool cannot be found.
    pub fn remove_tool(&self, name: &str) {
        fs::remove_file(self.bin_dir.join(name)).expect("Failed to remove stub script");
    }

    /// Install a stub executable inside the repository, e.g. `build/VIRELANG`.
    pub fn stub_repo_executable(&self, rel: &str, name: &str) {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create stub parent directory");
        }
        let script = format!(
            "#!/bin/sh\necho \"{name} $* [$PWD]\" >> \"{log}\"\necho \"{name}-output\"\n",
            log = self.log_path.display(),
        );
        write_executable(&path, &script);
    }

    /// Build a command for the compiled binary with stubs fronting PATH.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("virebuild").expect("Failed to locate virebuild binary");
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.current_dir(self.root.path())
            .env("PATH", format!("{}:{}", self.bin_dir.display(), path));
        cmd
    }

    /// Build a command whose PATH holds only the stub directory.
    pub fn cli_isolated(&self) -> Command {
        let mut cmd = Command::cargo_bin("virebuild").expect("Failed to locate virebuild binary");
        cmd.current_dir(self.root.path()).env("PATH", self.bin_dir.display().to_string());
        cmd
    }

    /// Recorded stub invocations, one `<name> <args> [<cwd>]` line each.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_path) {
            Ok(content) => content.lines().map(|line| line.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Recorded tool names, in invocation order.
    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|line| line.split_whitespace().next().map(|name| name.to_string()))
            .collect()
    }
}

fn write_executable(path: &Path, script: &str) {
    fs::write(path, script).expect("Failed to write stub script");
    let mut perms = fs::metadata(path).expect("Failed to stat stub script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub script");
}
