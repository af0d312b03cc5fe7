/// Toolchain build profile, as passed to the configure stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    Release,
    Debug,
    MinSizeRel,
}

impl BuildVariant {
    /// All recognized variants.
    pub const ALL: [BuildVariant; 3] =
        [BuildVariant::Release, BuildVariant::Debug, BuildVariant::MinSizeRel];

    /// Map a command-line spelling to its variant.
    ///
    /// `--debug` also enables valgrind wrapping elsewhere; both meanings of
    /// the token are honored.
    pub fn from_flag(flag: &str) -> Option<BuildVariant> {
        match flag {
            "--release" | "-r" => Some(BuildVariant::Release),
            "--debug" | "-d" => Some(BuildVariant::Debug),
            "--minsize" | "-minsz" => Some(BuildVariant::MinSizeRel),
            _ => None,
        }
    }

    /// CMake build-type name for this variant.
    pub fn build_type(&self) -> &'static str {
        match self {
            BuildVariant::Release => "Release",
            BuildVariant::Debug => "Debug",
            BuildVariant::MinSizeRel => "MinSizeRel",
        }
    }
}

/// What to do with the artifact once the native build finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    /// Compile only; run nothing afterwards.
    None,
    /// Run the produced executable.
    Execute,
    /// Run the executable, then compile and run the harness it generates.
    GenerateAndExecute,
}

impl RunAction {
    /// Map a command-line spelling to its action.
    pub fn from_flag(flag: &str) -> Option<RunAction> {
        match flag {
            "--compile" | "-c" => Some(RunAction::None),
            "--run-exec" | "-re" => Some(RunAction::Execute),
            "--run-gen" | "-rg" => Some(RunAction::GenerateAndExecute),
            _ => None,
        }
    }
}

/// Build target selected by the raw argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    Native,
    Wasm,
}

impl BuildTarget {
    /// `--wasm` anywhere in the arguments selects the browser-runtime
    /// pipeline; everything else builds natively.
    pub fn from_args(args: &[String]) -> BuildTarget {
        if args.iter().any(|arg| arg == "--wasm") { BuildTarget::Wasm } else { BuildTarget::Native }
    }
}

/// User-selectable behavior switches, fixed for the whole invocation.
///
/// Constructed once by the argument scanner and passed by reference from
/// there on; nothing mutates it after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Stream subprocess output live instead of discarding it.
    pub verbose: bool,
    /// Quote the literal command line in stage announcements.
    pub verbose_commands: bool,
    /// Post-build behavior for the native pipeline.
    pub run_action: RunAction,
    /// Build profile handed to the configure stage.
    pub build_variant: BuildVariant,
    /// Wipe and recreate the build directory before any stage runs.
    pub clean_build: bool,
    /// Preserve the configure cache between runs.
    pub keep_cache: bool,
    /// Wrap the run stage in valgrind.
    pub debug_wrap: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            verbose_commands: true,
            run_action: RunAction::GenerateAndExecute,
            build_variant: BuildVariant::Debug,
            clean_build: false,
            keep_cache: true,
            debug_wrap: false,
        }
    }
}
