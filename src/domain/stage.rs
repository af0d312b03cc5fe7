//! The stage registry: every external operation a pipeline can perform,
//! with its literal command line and working directory.
//!
//! The argument lists are a frozen contract with the toolchain. Drivers
//! only ever decorate them (build-type define, valgrind prefix), never
//! rewrite them.

use std::path::{Path, PathBuf};

/// Identifier for one external-process invocation within a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NativeConfigure,
    NativeBuild,
    NativeRun,
    CompileGenerated,
    RunGenerated,
    WasmConfigure,
    WasmBuild,
    WasmCopyModule,
    WasmCopyLoader,
    WasmCompress,
}

/// Directory a stage command runs in, relative to the repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageDir {
    Root,
    Build,
    WasmBuild,
}

impl StageDir {
    pub fn resolve(&self, root: &Path) -> PathBuf {
        match self {
            StageDir::Root => root.to_path_buf(),
            StageDir::Build => root.join("build"),
            StageDir::WasmBuild => root.join("wasm-build"),
        }
    }
}

/// A structured stage command: program plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl StageCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Append one argument, consuming and returning the command.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Prefix the command with a wrapper tool such as valgrind.
    pub fn wrapped_in(self, tool: &str) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self { program: tool.to_string(), args }
    }

    /// Single-line rendering used for announcements.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Stage {
    /// The literal command this stage executes.
    pub fn command(&self) -> StageCommand {
        match self {
            Stage::NativeConfigure => StageCommand::new("cmake", &[".", "-GNinja", "-Bbuild"]),
            Stage::NativeBuild | Stage::WasmBuild => {
                StageCommand::new("ninja", &["-Cbuild", "-j8"])
            }
            Stage::NativeRun => StageCommand::new("./VIRELANG", &[]),
            Stage::CompileGenerated => {
                StageCommand::new("clang++", &["res/test.cpp", "test.o", "-o", "test", "-no-pie"])
            }
            Stage::RunGenerated => StageCommand::new("./test", &[]),
            Stage::WasmConfigure => StageCommand::new(
                "emcmake",
                &[
                    "cmake",
                    "./wasm-lib",
                    "-Wno-dev",
                    "-GNinja",
                    "-Bbuild",
                    "-DZLIB_LIBRARY=/home/dev0/Programming/emsdk/upstream/emscripten/cache/sysroot/lib/wasm32-emscripten/libz.a",
                    "-DZLIB_INCLUDE_DIR=/usr/include/",
                    "-DLLVM_DIR=/home/dev0/Programming/llvm-project/build-wasm/lib/cmake/llvm",
                ],
            ),
            Stage::WasmCopyModule => {
                StageCommand::new("cp", &["./build/VIRELANG.wasm", "./wasm-build/VIRELANG.wasm"])
            }
            Stage::WasmCopyLoader => {
                StageCommand::new("cp", &["./build/VIRELANG.js", "./wasm-build/VIRELANG.js"])
            }
            Stage::WasmCompress => {
                StageCommand::new("gzip", &["-k", "--best", "-f", "./VIRELANG.wasm"])
            }
        }
    }

    /// Where the command runs, relative to the repository root.
    pub fn dir(&self) -> StageDir {
        match self {
            Stage::NativeConfigure
            | Stage::NativeBuild
            | Stage::WasmConfigure
            | Stage::WasmBuild
            | Stage::WasmCopyModule
            | Stage::WasmCopyLoader => StageDir::Root,
            Stage::NativeRun | Stage::CompileGenerated | Stage::RunGenerated => StageDir::Build,
            Stage::WasmCompress => StageDir::WasmBuild,
        }
    }
}
