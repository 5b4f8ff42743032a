use std::path::PathBuf;

/// Returns the directory holding the state and config files.
///
/// Resolution order:
/// 1. `TCK_STATE_DIR` environment variable (if set)
/// 2. Platform data directory (e.g. `~/.local/share/tck` on Linux)
/// 3. `.tck` under the current working directory as a last resort
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TCK_STATE_DIR") {
        PathBuf::from(dir)
    } else if let Some(dirs) = directories::ProjectDirs::from("io", "fieldline", "tck") {
        dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".tck")
    }
}

/// Returns the path to the persisted ticket state document.
pub fn state_file() -> PathBuf {
    state_dir().join("state.json")
}

/// Returns the path to the optional user configuration file.
pub fn config_file() -> PathBuf {
    state_dir().join("config.yaml")
}
