//! XDG-compliant path resolution for configuration files.
//!
//! This module locates the optional config file and the tool's own `.env`
//! file following the XDG Base Directory Specification, with the current
//! directory checked first.

use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::app::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOCAL_CONFIG_FILE_NAME};

/// Config file locations in lookup order.
///
/// 1. `config_path_env` (the value of CONFIG_PATH)
/// 2. `cwd/hf-space-secrets.toml`
/// 3. `home/.config/hf-space-secrets/config.toml`
/// 4. `xdg_config_home/hf-space-secrets/config.toml`
pub fn config_candidates(
    config_path_env: Option<&str>,
    cwd: Option<&Path>,
    home: Option<&Path>,
    xdg_config_home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = config_path_env.filter(|p| !p.is_empty()) {
        candidates.push(PathBuf::from(path));
    }
    if let Some(cwd) = cwd {
        candidates.push(cwd.join(LOCAL_CONFIG_FILE_NAME));
    }
    if let Some(home) = home {
        candidates.push(home.join(".config").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    if let Some(xdg) = xdg_config_home {
        candidates.push(xdg.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    candidates
}

/// Find the first existing config file, if any.
pub fn find_config_file() -> Option<PathBuf> {
    let config_path = env::var("CONFIG_PATH").ok();
    let cwd = env::current_dir().ok();
    let home = dirs::home_dir();
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    config_candidates(
        config_path.as_deref(),
        cwd.as_deref(),
        home.as_deref(),
        xdg.as_deref(),
    )
    .into_iter()
    .find(|path| path.is_file())
}

/// Locations of the tool's own `.env` file in lookup order.
///
/// 1. `home/.config/hf-space-secrets/.env`
/// 2. `xdg_config_home/hf-space-secrets/.env`
/// 3. `cwd/.env`
///
/// A candidate that is the same file as `exclude` (the secrets source) is
/// left out, so source values never leak into the process environment.
pub fn env_file_candidates(
    cwd: Option<&Path>,
    home: Option<&Path>,
    xdg_config_home: Option<&Path>,
    exclude: &Path,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home {
        candidates.push(home.join(".config").join(CONFIG_DIR_NAME).join(".env"));
    }
    if let Some(xdg) = xdg_config_home {
        candidates.push(xdg.join(CONFIG_DIR_NAME).join(".env"));
    }
    if let Some(cwd) = cwd {
        candidates.push(cwd.join(".env"));
    }

    candidates.retain(|candidate| !is_same_file(candidate, exclude));
    candidates
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Load the tool's own `.env` file into the process environment.
///
/// Used for `HF_TOKEN` and `HF_ENDPOINT`; existing variables are not
/// overridden. The secrets source file `exclude` is never loaded.
///
/// # Returns
///
/// The path that was loaded, if any.
pub fn load_env_file(exclude: &Path) -> Option<PathBuf> {
    let cwd = env::current_dir().ok();
    let home = dirs::home_dir();
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    let path = env_file_candidates(cwd.as_deref(), home.as_deref(), xdg.as_deref(), exclude)
        .into_iter()
        .find(|p| p.is_file())?;

    match dotenv::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "failed to load environment file");
            None
        }
    }
}
