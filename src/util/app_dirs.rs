use std::path::PathBuf;

use directories::ProjectDirs;

const APPLICATION: &str = "ag2latin";

/// Path of `name` inside the per-user config directory, if the platform has one.
pub(crate) fn config_file(name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", APPLICATION).map(|dirs| dirs.config_dir().join(name))
}
