use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Returns the base data directory for QuickGen files.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "QuickGen", "QuickGen") {
        let dir = proj_dirs.data_dir();
        if let Err(err) = fs::create_dir_all(dir) {
            tracing::warn!(%err, dir = %dir.display(), "could not create data directory");
        }
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// Location of the persisted settings.
pub fn settings_path() -> PathBuf {
    data_dir().join("settings.json")
}
