use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{NOT_FOUND_SENTINEL, SOURCE_STEAM};

/// Where an application's files live on disk.
///
/// Serialized as a plain string: the absolute directory path, or
/// [`NOT_FOUND_SENTINEL`] when the manifest names a directory that is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstallLocation {
    Found(PathBuf),
    NotFound,
}

impl InstallLocation {
    /// Returns the install directory when it exists.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InstallLocation::Found(p) => Some(p),
            InstallLocation::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }
}

impl From<String> for InstallLocation {
    fn from(s: String) -> Self {
        if s == NOT_FOUND_SENTINEL {
            InstallLocation::NotFound
        } else {
            InstallLocation::Found(PathBuf::from(s))
        }
    }
}

impl From<InstallLocation> for String {
    fn from(loc: InstallLocation) -> Self {
        match loc {
            InstallLocation::Found(p) => p.to_string_lossy().into_owned(),
            InstallLocation::NotFound => NOT_FOUND_SENTINEL.into(),
        }
    }
}

impl fmt::Display for InstallLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallLocation::Found(p) => write!(f, "{}", p.display()),
            InstallLocation::NotFound => f.write_str(NOT_FOUND_SENTINEL),
        }
    }
}

/// An installed application extracted from one `appmanifest_*.acf` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    #[serde(rename = "appid")]
    pub app_id: String,
    pub name: String,
    #[serde(rename = "installdir")]
    pub install_dir: String,
    #[serde(rename = "full_install_path")]
    pub location: InstallLocation,
    pub source: String,
}

impl ApplicationInfo {
    /// Creates a record tagged with the Steam source.
    pub fn steam(
        app_id: impl Into<String>,
        name: impl Into<String>,
        install_dir: impl Into<String>,
        location: InstallLocation,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            name: name.into(),
            install_dir: install_dir.into(),
            location,
            source: SOURCE_STEAM.into(),
        }
    }
}

/// A confirmed library folder (a `steamapps` directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub path: String,
}

impl From<&Path> for LibraryEntry {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
        }
    }
}

/// The document produced by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub games: Vec<ApplicationInfo>,
    pub libraries: Vec<LibraryEntry>,
}

impl ScanReport {
    /// Returns true if the scan found neither libraries nor games.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty() && self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_json_field_names() {
        let app = ApplicationInfo::steam(
            "252490",
            "Rust",
            "Rust",
            InstallLocation::Found(PathBuf::from("/lib/steamapps/common/Rust")),
        );
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["appid"], "252490");
        assert_eq!(json["installdir"], "Rust");
        assert_eq!(json["full_install_path"], "/lib/steamapps/common/Rust");
        assert_eq!(json["source"], "Steam");
    }

    #[test]
    fn not_found_serializes_as_sentinel() {
        let app = ApplicationInfo::steam("1", "Gone", "Gone", InstallLocation::NotFound);
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["full_install_path"], NOT_FOUND_SENTINEL);
        assert!(!json["full_install_path"].is_null());
    }

    #[test]
    fn sentinel_deserializes_to_not_found() {
        let json = r#"{"appid":"1","name":"n","installdir":"d","full_install_path":"N/A - Not Found","source":"Steam"}"#;
        let app: ApplicationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(app.location, InstallLocation::NotFound);
        assert!(app.location.path().is_none());
    }

    #[test]
    fn install_location_display() {
        assert_eq!(InstallLocation::NotFound.to_string(), "N/A - Not Found");
        assert!(InstallLocation::Found(PathBuf::from("/x")).is_found());
    }

    #[test]
    fn empty_report() {
        let report = ScanReport::default();
        assert!(report.is_empty());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"games":[],"libraries":[]}"#);
    }
}
