//! CLI adapter: the frozen flag surface.
//!
//! The surface predates this tool (multi-character short spellings such as
//! `-cln` and `-minsz`, unknown tokens ignored, first match wins per switch
//! group, `--debug` feeding two groups at once), so it is scanned by hand
//! rather than declared through a parser library.

use crate::domain::{BuildOptions, BuildVariant, RunAction};

/// Populate options from the raw argument list.
///
/// Each switch group is scanned left to right; the first recognized token
/// sets the field and later tokens in the same group are ignored. Tokens
/// that belong to no group are ignored without complaint.
pub fn parse_options(args: &[String]) -> BuildOptions {
    let mut options = BuildOptions::default();

    if let Some(variant) = args.iter().find_map(|arg| BuildVariant::from_flag(arg)) {
        options.build_variant = variant;
    }

    // `--clean` is the single authoritative cache override: when present it
    // wins no matter where `-kc` appears.
    if args.iter().any(|arg| arg == "--clean" || arg == "-cln") {
        options.clean_build = true;
    } else if args.iter().any(|arg| arg == "--keep-cache" || arg == "-kc") {
        options.keep_cache = true;
    }

    if let Some(action) = args.iter().find_map(|arg| RunAction::from_flag(arg)) {
        options.run_action = action;
    }

    if let Some((verbose, verbose_commands)) =
        args.iter().find_map(|arg| verbosity_from_flag(arg))
    {
        options.verbose = verbose;
        options.verbose_commands = verbose_commands;
    }

    // `--debug` doubles as a build-variant spelling; both meanings are
    // honored from the same token.
    if args.iter().any(|arg| arg == "-dbg" || arg == "--debug") {
        options.debug_wrap = true;
    }

    options
}

/// `(verbose, verbose_commands)` for a verbosity-group spelling.
fn verbosity_from_flag(flag: &str) -> Option<(bool, bool)> {
    match flag {
        "--verbose-all" | "-va" => Some((true, true)),
        "--verbose" | "-v" => Some((false, true)),
        "--silent" | "-s" => Some((false, false)),
        _ => None,
    }
}
