//! JSON persistence helpers for ~/.battle-snake/ save files.
//!
//! Used by the high-score store and the optional config file.

use crate::constants::GAME_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.battle-snake/ directory path, creating it if needed.
pub fn game_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(GAME_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.battle-snake/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(game_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(json.trim()).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "unreadable save file, using defaults");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("battle-snake-persistence-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&scratch_path("nonexistent_12345.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = scratch_path("roundtrip.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let path = scratch_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let loaded: u32 = load_json_or_default(&path);
        assert_eq!(loaded, 0);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_plain_integer_file_is_valid_json() {
        let path = scratch_path("plain_integer.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "42\n").unwrap();

        let loaded: u32 = load_json_or_default(&path);
        assert_eq!(loaded, 42);

        fs::remove_file(path).ok();
    }
}
