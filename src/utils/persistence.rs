//! JSON persistence helpers for files under ~/.sustainabuddy/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.sustainabuddy/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".sustainabuddy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.sustainabuddy/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

/// Load a JSON file from ~/.sustainabuddy/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_file_or_default(&path),
        Err(_) => T::default(),
    }
}

/// Same as [`load_json_or_default`] for an explicit path.
pub fn load_json_file_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable JSON file");
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON to ~/.sustainabuddy/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_file(&save_path(filename)?, data)
}

pub fn save_json_file<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
