//! Scanner configuration.
//!
//! Stored as TOML at `<config dir>/gamescan/config.toml`:
//! - Linux: `~/.config/gamescan/config.toml`
//! - Windows: `%APPDATA%\gamescan\config.toml`
//! - macOS: `~/Library/Application Support/gamescan/config.toml`
//!
//! The file is optional and never written by the scanner.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Scanner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directories probed in addition to the built-in locations.
    /// A leading `~` expands to the home directory.
    #[serde(default)]
    pub extra_library_paths: Vec<String>,

    /// Consult the Windows registry for the Steam install path.
    #[serde(default = "default_true")]
    pub use_registry: bool,

    /// Pretty-print the JSON document.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_library_paths: Vec::new(),
            use_registry: default_true(),
            pretty: default_true(),
        }
    }
}

impl Config {
    /// Loads the default config file, or defaults if there is none.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = config_path() else {
            return Ok(Config::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Returns the configured extra paths with `~` expanded.
    pub fn library_paths(&self) -> Vec<PathBuf> {
        let home = dirs::home_dir();
        self.extra_library_paths
            .iter()
            .map(|p| expand_path(p, home.as_deref()))
            .collect()
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamescan").join("config.toml"))
}

/// Expands a leading `~` against `home`.
fn expand_path(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with(['/', '\\']) => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.extra_library_paths.is_empty());
        assert!(config.use_registry);
        assert!(config.pretty);
    }

    #[test]
    fn config_partial_toml() {
        // Only specify paths, rest should use defaults.
        let toml_str = r#"extra_library_paths = ["/mnt/games"]"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.extra_library_paths, vec!["/mnt/games"]);
        assert!(config.use_registry);
        assert!(config.pretty);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = Config {
            extra_library_paths: vec!["~/Games".into(), "/data/steam".into()],
            use_registry: false,
            pretty: false,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "use_registry = false\npretty = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.use_registry);
        assert!(!config.pretty);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&tmp.path().join("nope.toml")).is_err());
    }

    #[test]
    fn load_from_invalid_toml_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "pretty = \"yes\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn tilde_expansion() {
        let home = Path::new("/home/deck");
        assert_eq!(
            expand_path("~/Games", Some(home)),
            PathBuf::from("/home/deck/Games")
        );
        assert_eq!(expand_path("~", Some(home)), PathBuf::from("/home/deck"));
        assert_eq!(expand_path("/abs", Some(home)), PathBuf::from("/abs"));
        assert_eq!(expand_path("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_path("~/Games", None), PathBuf::from("~/Games"));
    }

    #[test]
    fn config_path_not_empty() {
        if let Some(path) = config_path() {
            assert!(path.to_string_lossy().contains("gamescan"));
        }
    }
}
