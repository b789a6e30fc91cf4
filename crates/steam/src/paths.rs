//! Candidate directories that may hold a Steam library, per platform.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ScanError;

/// Name of the library folder that holds manifests and `common/`.
pub const STEAMAPPS_DIR: &str = "steamapps";

/// Directory name users give to secondary libraries (`X:\SteamLibrary`).
pub const LIBRARY_MARKER_DIR: &str = "SteamLibrary";

/// Install area inside a `steamapps` folder.
pub const COMMON_DIR: &str = "common";

/// Operating system families with a known Steam layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Parses an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Result<Self, ScanError> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            other => Err(ScanError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Returns the platform of the running host.
    pub fn current() -> Result<Self, ScanError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Whether candidate generation needs the user's home directory.
    pub fn requires_home(&self) -> bool {
        !matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::MacOs => write!(f, "macos"),
        }
    }
}

/// Subfolders checked on every Windows drive.
const WINDOWS_DRIVE_SUBDIRS: &[&str] = &["Steam", "SteamLibrary", r"Games\Steam", "Games"];

/// Returns the directories worth probing as Steam libraries or their parents.
///
/// Never touches the filesystem: the result depends only on `platform` and
/// `home`. Verifying which candidates exist is the caller's job.
pub fn candidate_paths(platform: Platform, home: Option<&Path>) -> Result<Vec<PathBuf>, ScanError> {
    match platform {
        Platform::Windows => Ok(windows_candidates()),
        Platform::Linux => {
            let home = home.ok_or(ScanError::HomeDirectoryUnavailable)?;
            Ok(linux_candidates(home))
        }
        Platform::MacOs => {
            let home = home.ok_or(ScanError::HomeDirectoryUnavailable)?;
            Ok(macos_candidates(home))
        }
    }
}

/// Resolves the home directory once and returns the candidates for `os`.
pub fn discover_candidates(os: &str) -> Result<Vec<PathBuf>, ScanError> {
    host_candidates(Platform::from_os(os)?)
}

/// Like [`discover_candidates`] for an already parsed platform.
pub fn host_candidates(platform: Platform) -> Result<Vec<PathBuf>, ScanError> {
    let home = if platform.requires_home() {
        Some(dirs::home_dir().ok_or(ScanError::HomeDirectoryUnavailable)?)
    } else {
        None
    };
    candidate_paths(platform, home.as_deref())
}

// Built from strings so the result is the same on any host.
fn windows_candidates() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(r"C:\Program Files (x86)\Steam"),
        PathBuf::from(r"C:\Program Files\Steam"),
    ];
    // A: and B: are floppy letters.
    for drive in 'C'..='Z' {
        for sub in WINDOWS_DRIVE_SUBDIRS {
            paths.push(PathBuf::from(format!(r"{drive}:\{sub}")));
        }
    }
    paths
}

fn linux_candidates(home: &Path) -> Vec<PathBuf> {
    vec![
        // Primary location: ~/.steam/steam (usually a symlink)
        home.join(".steam").join("steam"),
        home.join(".local").join("share").join("Steam"),
        // Flatpak
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam"),
        PathBuf::from("/opt/steam"),
        PathBuf::from("/usr/share/steam"),
        PathBuf::from("/mnt"),
        PathBuf::from("/media"),
    ]
}

fn macos_candidates(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join("Library").join("Application Support").join("Steam"),
        PathBuf::from("/Applications/Steam.app/Contents/MacOS"),
        PathBuf::from("/Volumes"),
    ]
}
