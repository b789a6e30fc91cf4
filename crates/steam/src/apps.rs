//! Installed apps of one library, read from its `appmanifest_*.acf` files.

use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use gamescan_protocol::{ApplicationInfo, InstallLocation};
use normpath::PathExt;
use tracing::{debug, warn};

use crate::ScanError;
use crate::library::LibraryRoot;
use crate::vdf::find_value;

/// File name pattern of per-app manifests inside `steamapps`.
pub const APP_MANIFEST_GLOB: &str = "appmanifest_*.acf";

/// Manifest keys every emitted record needs.
const KEY_APP_ID: &str = "appid";
const KEY_NAME: &str = "name";
const KEY_INSTALL_DIR: &str = "installdir";

/// Scans one library for installed apps.
///
/// Unreadable manifests and manifests missing a required key are skipped
/// and logged. Only an invalid glob pattern fails the whole library.
pub fn scan_library(root: &LibraryRoot) -> Result<Vec<ApplicationInfo>, ScanError> {
    let manifests = manifest_files(root)?;
    debug!(
        library = %root.path().display(),
        count = manifests.len(),
        "found app manifests"
    );

    let mut apps = Vec::with_capacity(manifests.len());
    for path in manifests {
        match load_app_manifest(&path, root) {
            Ok(app) => apps.push(app),
            Err(e @ ScanError::ManifestUnreadable { .. }) => {
                warn!(error = %e, "skipping unreadable manifest");
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping incomplete manifest");
            }
        }
    }
    Ok(apps)
}

/// Returns the library's `appmanifest_*.acf` files in sorted order.
fn manifest_files(root: &LibraryRoot) -> Result<Vec<PathBuf>, ScanError> {
    let dir = glob::Pattern::escape(&root.path().to_string_lossy());
    let pattern = format!("{dir}{MAIN_SEPARATOR}{APP_MANIFEST_GLOB}");

    let entries = glob::glob(&pattern).map_err(|e| ScanError::GlobPattern(e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => warn!(error = %e, "failed to list manifest"),
        }
    }
    files.sort();
    Ok(files)
}

/// Reads one manifest file and builds its record.
pub fn load_app_manifest(path: &Path, root: &LibraryRoot) -> Result<ApplicationInfo, ScanError> {
    let data = fs::read(path).map_err(|source| ScanError::ManifestUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    app_from_manifest(&String::from_utf8_lossy(&data), root)
}

/// Builds a record from manifest text. Fails with `KeyNotFound` if any of
/// `appid`, `name` or `installdir` is missing or empty.
pub fn app_from_manifest(text: &str, root: &LibraryRoot) -> Result<ApplicationInfo, ScanError> {
    let app_id = find_value(text, KEY_APP_ID)?;
    let name = find_value(text, KEY_NAME)?;
    let install_dir = find_value(text, KEY_INSTALL_DIR)?;

    let location = install_location(root, &install_dir);
    if !location.is_found() {
        debug!(app_id = %app_id, install_dir = %install_dir, "install directory not found");
    }

    Ok(ApplicationInfo::steam(app_id, name, install_dir, location))
}

/// Resolves `steamapps/common/<install_dir>` if it is an existing directory.
fn install_location(root: &LibraryRoot, install_dir: &str) -> InstallLocation {
    let full = root.common_dir().join(install_dir);
    if !full.is_dir() {
        return InstallLocation::NotFound;
    }
    let full = full
        .normalize()
        .map(|np| np.into_path_buf())
        .unwrap_or(full);
    InstallLocation::Found(full)
}
