//! Configure-cache invalidation shared by both pipelines.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, BuildOptions};

const CACHE_FILE: &str = "CMakeCache.txt";
const CACHE_DIR: &str = "CMakeFiles";

/// Drop the configure cache unless the options say to keep it.
///
/// `clean_build` is checked first: a clean build always starts from an
/// empty cache, whatever the keep-cache setting. Absent cache artifacts
/// are not an error.
pub fn clean(root: &Path, options: &BuildOptions) -> Result<(), AppError> {
    if options.keep_cache && !options.clean_build {
        return Ok(());
    }

    let build_dir = root.join("build");
    remove_file_if_present(&build_dir.join(CACHE_FILE))?;
    remove_dir_if_present(&build_dir.join(CACHE_DIR))?;
    println!("Cleaned CMakeCache");
    Ok(())
}

fn remove_file_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

fn remove_dir_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
