//! Library folders: confirmed `steamapps` directories and the
//! `libraryfolders.vdf` file that points from a main Steam folder to the
//! secondary ones.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexSet;
use normpath::PathExt;
use regex::Regex;
use tracing::{debug, warn};

use crate::paths::{COMMON_DIR, Platform, STEAMAPPS_DIR};

/// File inside `steamapps` that lists every library folder.
pub const LIBRARY_FOLDERS_VDF: &str = "libraryfolders.vdf";

/// Matches both the legacy `"1" "D:\\Lib"` shape and the newer
/// `"path" "D:\\Lib"` shape nested under each numbered block. Key and value
/// must share a line, otherwise a numeric value followed by the next key
/// would read as an entry.
static LIBRARY_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"(?:\d+|path)"[ \t]+"([^"\r\n]+)""#).expect("library entry pattern is valid")
});

/// A confirmed `steamapps` directory.
///
/// Two roots are equal when their on-disk paths are equal, so a library
/// reached through `~/.steam/steam` and through its symlink target is the
/// same root, and on Windows so are spellings that differ only in case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryRoot(PathBuf);

impl LibraryRoot {
    /// Creates a root from the path as stored on disk. Paths that cannot be
    /// resolved are normalized lexically.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let resolved = dunce::canonicalize(path)
            .or_else(|_| path.normalize().map(|np| np.into_path_buf()))
            .unwrap_or_else(|_| path.to_path_buf());
        Self(resolved)
    }

    /// Returns the `steamapps` directory.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Returns the Steam or library folder that contains this `steamapps`.
    pub fn main_folder(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// Returns the directory that holds installed games.
    pub fn common_dir(&self) -> PathBuf {
        self.0.join(COMMON_DIR)
    }

    /// Returns the path to this library's `libraryfolders.vdf`.
    pub fn library_folders_path(&self) -> PathBuf {
        self.0.join(LIBRARY_FOLDERS_VDF)
    }
}

/// Reads `<main_folder>/steamapps/libraryfolders.vdf` and returns every
/// declared library whose `steamapps` directory exists.
///
/// A missing or unreadable file yields an empty list; entries that don't
/// match are ignored without affecting the others.
pub fn resolve_libraries(main_folder: &Path, platform: Platform) -> Vec<LibraryRoot> {
    let vdf_path = LibraryRoot::new(main_folder.join(STEAMAPPS_DIR)).library_folders_path();

    let data = match fs::read(&vdf_path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %vdf_path.display(), "no libraryfolders.vdf");
            return Vec::new();
        }
        Err(e) => {
            warn!(path = %vdf_path.display(), error = %e, "failed to read libraryfolders.vdf");
            return Vec::new();
        }
    };

    let text = String::from_utf8_lossy(&data);
    library_paths_from_text(&text)
        .into_iter()
        .filter_map(|raw| {
            let steamapps =
                PathBuf::from(normalize_separators(&raw, platform)).join(STEAMAPPS_DIR);
            if steamapps.is_dir() {
                Some(LibraryRoot::new(&steamapps))
            } else {
                debug!(path = %steamapps.display(), "declared library has no steamapps folder");
                None
            }
        })
        .collect()
}

/// Extracts raw library paths from `libraryfolders.vdf` text, in file order
/// and without duplicates.
///
/// Purely numeric values are dropped: in the newer format they are app sizes
/// inside `"apps"` blocks, not paths.
pub fn library_paths_from_text(text: &str) -> Vec<String> {
    let paths: IndexSet<String> = LIBRARY_ENTRY_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|value| !value.chars().all(|c| c.is_ascii_digit()))
        .collect();
    paths.into_iter().collect()
}

/// Turns VDF-escaped separators (`\\`) into the platform's separator.
pub fn normalize_separators(raw: &str, platform: Platform) -> String {
    match platform {
        Platform::Windows => raw.replace(r"\\", r"\"),
        Platform::Linux | Platform::MacOs => raw.replace(r"\\", "/"),
    }
}
