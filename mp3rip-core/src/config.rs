//! Settings loading for mp3rip.
//!
//! The only setting is the default root directory. It comes from, in order of
//! precedence: the `MP3RIP_DEFAULT_DIR` environment variable, the `DEFAULT_DIR`
//! key of an optional `KEY=VALUE` file at `../.env`, and finally the user's
//! Downloads directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Location of the optional settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "../.env";

/// Settings-file key overriding the default root directory.
pub const DEFAULT_DIR_KEY: &str = "DEFAULT_DIR";

/// Environment variable overriding the default root directory.
pub const DEFAULT_DIR_ENV: &str = "MP3RIP_DEFAULT_DIR";

/// Session settings, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory offered as the root directory at the first prompt.
    pub default_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_dir: builtin_default_dir(),
        }
    }
}

impl Settings {
    /// Loads settings from [`SETTINGS_FILE`], then applies the environment override.
    #[must_use]
    pub fn load() -> Self {
        let mut settings = Self::load_from(Path::new(SETTINGS_FILE));
        settings.default_dir = get_env_path(DEFAULT_DIR_ENV, settings.default_dir);
        settings
    }

    /// Loads settings from the file at `path`.
    ///
    /// A missing file is silently ignored. An unreadable file is reported as a
    /// warning; in both cases the built-in defaults are kept.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let mut settings = Self::default();

        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return settings;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                if let Some(dir) = parse_settings(&content)
                    .remove(DEFAULT_DIR_KEY)
                    .filter(|dir| !dir.is_empty())
                {
                    log::debug!("Default directory from {}: {}", path.display(), dir);
                    settings.default_dir = PathBuf::from(dir);
                }
            }
            Err(e) => {
                log::warn!(
                    "Could not read settings file {}: {}; using defaults",
                    path.display(),
                    e
                );
            }
        }

        settings
    }
}

/// Parses `KEY=VALUE` lines.
///
/// Blank lines, lines starting with `#` and lines without `=` are skipped.
/// Keys and values are trimmed. Later keys replace earlier ones.
#[must_use]
pub fn parse_settings(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Get a path value from an environment variable or use the default
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => PathBuf::from(val.trim()),
        _ => default,
    }
}

/// The user's Downloads directory, or `.` when no home directory is known.
#[must_use]
pub fn builtin_default_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_trims_and_skips() {
        let content = "# media settings\n\nDEFAULT_DIR = /x/y  \n";
        let parsed = parse_settings(content);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(DEFAULT_DIR_KEY).map(String::as_str), Some("/x/y"));
    }

    #[test]
    fn test_parse_settings_ignores_lines_without_equals() {
        let parsed = parse_settings("JUSTAKEY\nOTHER=1\n   # DEFAULT_DIR=/nope\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("OTHER").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_parse_settings_value_keeps_inner_equals_and_spaces() {
        let parsed = parse_settings("DEFAULT_DIR=/media/My Videos/a=b");
        assert_eq!(
            parsed.get(DEFAULT_DIR_KEY).map(String::as_str),
            Some("/media/My Videos/a=b")
        );
    }

    #[test]
    fn test_load_from_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join(".env"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file_overrides_default_dir() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "# comment\n\nDEFAULT_DIR = /x/y\nUNRELATED=1\n").unwrap();

        let settings = Settings::load_from(&env_file);
        assert_eq!(settings.default_dir, PathBuf::from("/x/y"));
    }

    #[test]
    fn test_load_from_ignores_empty_default_dir() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "DEFAULT_DIR=\n").unwrap();

        let settings = Settings::load_from(&env_file);
        assert_eq!(settings, Settings::default());
        assert_ne!(settings.default_dir, PathBuf::new());
    }

    #[test]
    fn test_builtin_default_dir_is_never_relative_downloads() {
        let dir = builtin_default_dir();
        assert!(dir.is_absolute() || dir == Path::new("."), "got {}", dir.display());
    }

    #[test]
    fn test_load_from_unreadable_path_uses_default() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(dir.path());
        assert_eq!(settings, Settings::default());
    }
}
