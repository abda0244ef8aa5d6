//! Environment variable utilities for the benchmark parameter data
//!
//! This module provides utilities for handling environment variables,
//! particularly the CEC2005_DATA_DIR variable that points to the directory
//! holding the precomputed `input_data/` tree.

use crate::constants::{DATA_DIR_VAR, INPUT_DATA, problem_key};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "CEC2005_DATA_DIR environment variable is not set. Please set it to the directory containing input_data/ (e.g., export CEC2005_DATA_DIR=/path/to/cec2005)"
    )]
    DataDirNotSet,

    #[error("CEC2005_DATA_DIR points to a non-existent directory: {0}")]
    DataDirNotFound(PathBuf),

    #[error("No input_data directory under {0}")]
    InputDataNotFound(PathBuf),
}

/// Get the CEC2005_DATA_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - CEC2005_DATA_DIR is not set
/// - CEC2005_DATA_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use cecbench_env::env_utils::get_data_dir;
///
/// let data_dir = get_data_dir()?;
/// println!("Benchmark data: {}", data_dir.display());
/// # Ok::<(), cecbench_env::env_utils::EnvError>(())
/// ```
pub fn get_data_dir() -> Result<PathBuf, EnvError> {
    let data_dir = env::var(DATA_DIR_VAR).map_err(|_| EnvError::DataDirNotSet)?;

    let path = PathBuf::from(data_dir);

    if !path.exists() {
        return Err(EnvError::DataDirNotFound(path));
    }

    Ok(path)
}

/// Locate `input_data/` below `root`
///
/// Unlike a results directory this is never created: the parameter files are
/// static inputs and a missing tree is a configuration error.
pub fn input_data_dir(root: &Path) -> Result<PathBuf, EnvError> {
    let input_data = root.join(INPUT_DATA);
    if !input_data.is_dir() {
        return Err(EnvError::InputDataNotFound(root.to_path_buf()));
    }
    Ok(input_data)
}

/// Get the path to `input_data/` using the CEC2005_DATA_DIR variable
///
/// # Errors
///
/// Returns an error if the variable is unset or invalid, or if the directory
/// has no `input_data/` child.
pub fn get_input_data_dir() -> Result<PathBuf, EnvError> {
    let root = get_data_dir()?;
    input_data_dir(&root)
}

/// Folder holding the files of one problem, e.g. `input_data/f16`
pub fn problem_data_dir(input_data: &Path, id: u32) -> PathBuf {
    input_data.join(problem_key(id))
}

/// Check if CEC2005_DATA_DIR is properly configured and log where it points
///
/// # Example
///
/// ```no_run
/// use cecbench_env::env_utils::check_data_env;
///
/// if let Err(e) = check_data_env() {
///     eprintln!("Environment setup error: {}", e);
///     std::process::exit(1);
/// }
/// ```
pub fn check_data_env() -> Result<(), EnvError> {
    let root = get_data_dir()?;
    let input_data = input_data_dir(&root)?;

    log::info!("CEC2005_DATA_DIR: {}", root.display());
    log::info!("Parameter files: {}", input_data.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Both cases share one test so they never race on the process environment.
    #[test]
    fn test_data_dir_resolution() {
        let original = env::var(DATA_DIR_VAR).ok();

        unsafe { env::remove_var(DATA_DIR_VAR) };
        assert!(matches!(get_data_dir(), Err(EnvError::DataDirNotSet)));

        unsafe { env::set_var(DATA_DIR_VAR, "/this/path/should/not/exist") };
        assert!(matches!(get_data_dir(), Err(EnvError::DataDirNotFound(_))));

        let tmp = tempfile::tempdir().unwrap();
        unsafe { env::set_var(DATA_DIR_VAR, tmp.path()) };
        assert_eq!(get_data_dir().unwrap(), tmp.path());
        assert!(matches!(get_input_data_dir(), Err(EnvError::InputDataNotFound(_))));

        std::fs::create_dir(tmp.path().join(INPUT_DATA)).unwrap();
        assert_eq!(get_input_data_dir().unwrap(), tmp.path().join(INPUT_DATA));

        match original {
            Some(value) => unsafe { env::set_var(DATA_DIR_VAR, value) },
            None => unsafe { env::remove_var(DATA_DIR_VAR) },
        }
    }

    #[test]
    fn test_problem_data_dir() {
        let dir = problem_data_dir(Path::new("/data/input_data"), 7);
        assert_eq!(dir, PathBuf::from("/data/input_data/f07"));
    }
}
