use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".redux-demos.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.redux-demos.toml` in the current working directory
/// 2. `~/.redux-demos.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }

    match crate::paths::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No platform config path: {}", e),
    }

    paths
}
