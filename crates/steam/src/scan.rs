//! Full host scan: candidate paths → confirmed libraries →
//! `libraryfolders.vdf` expansion → per-library app manifests.

use std::path::{Path, PathBuf};

use gamescan_protocol::{ApplicationInfo, LibraryEntry, ScanReport};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use crate::ScanError;
use crate::apps::scan_library;
use crate::library::{LibraryRoot, resolve_libraries};
use crate::paths::{LIBRARY_MARKER_DIR, Platform, STEAMAPPS_DIR, host_candidates};
use crate::registry;

/// Settings for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub platform: Platform,
    /// User-supplied directories probed after the built-in candidates.
    pub extra_paths: Vec<PathBuf>,
    /// Prepend the install path recorded in the Windows registry.
    pub use_registry: bool,
}

impl ScanOptions {
    /// Options for the running host.
    pub fn for_host() -> Result<Self, ScanError> {
        Ok(Self::new(Platform::current()?))
    }

    /// Options for an OS identifier such as `"linux"`.
    pub fn for_os(os: &str) -> Result<Self, ScanError> {
        Ok(Self::new(Platform::from_os(os)?))
    }

    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            extra_paths: Vec::new(),
            use_registry: true,
        }
    }
}

/// Accumulates libraries and apps for one scan.
///
/// Libraries are unique by normalized path and apps by app id. The first
/// occurrence wins and insertion order is kept.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    libraries: IndexSet<LibraryRoot>,
    applications: IndexMap<String, ApplicationInfo>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a library. Returns false if it was already known.
    pub fn add_library(&mut self, root: LibraryRoot) -> bool {
        self.libraries.insert(root)
    }

    /// Adds an app. Returns false if its app id was already known, in which
    /// case the earlier record is kept.
    pub fn add_application(&mut self, app: ApplicationInfo) -> bool {
        if self.applications.contains_key(&app.app_id) {
            return false;
        }
        self.applications.insert(app.app_id.clone(), app);
        true
    }

    /// Appends everything from `other` that is not already present.
    pub fn merge(&mut self, other: ScanResult) {
        for root in other.libraries {
            self.add_library(root);
        }
        for app in other.applications.into_values() {
            self.add_application(app);
        }
    }

    pub fn libraries(&self) -> impl Iterator<Item = &LibraryRoot> {
        self.libraries.iter()
    }

    pub fn applications(&self) -> impl Iterator<Item = &ApplicationInfo> {
        self.applications.values()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty() && self.applications.is_empty()
    }
}

impl From<ScanResult> for ScanReport {
    fn from(result: ScanResult) -> Self {
        ScanReport {
            games: result.applications.into_values().collect(),
            libraries: result
                .libraries
                .iter()
                .map(|root| LibraryEntry::from(root.path()))
                .collect(),
        }
    }
}

/// Decides whether a candidate directory holds a library.
///
/// Checked in order: the candidate is itself `steamapps`, it contains
/// `steamapps`, or it contains `SteamLibrary/steamapps`. In every case the
/// library's main folder is the parent of the returned root.
pub fn classify_candidate(path: &Path) -> Option<LibraryRoot> {
    if !path.is_dir() {
        return None;
    }

    if is_named(path, STEAMAPPS_DIR) {
        return Some(LibraryRoot::new(path));
    }

    let nested = path.join(STEAMAPPS_DIR);
    if nested.is_dir() {
        return Some(LibraryRoot::new(nested));
    }

    let marked = path.join(LIBRARY_MARKER_DIR).join(STEAMAPPS_DIR);
    if marked.is_dir() {
        return Some(LibraryRoot::new(marked));
    }

    None
}

fn is_named(path: &Path, name: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case(name))
}

/// Runs the discovery pipeline.
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans the host and returns the result document.
    ///
    /// Fails only when no candidates can be produced (unsupported platform,
    /// missing home directory). Finding nothing is a successful empty report.
    pub fn run(&self) -> Result<ScanReport, ScanError> {
        let candidates = self.candidates()?;
        let result = self.scan_candidates(&candidates);
        info!(
            libraries = result.libraries.len(),
            games = result.applications.len(),
            "scan complete"
        );
        Ok(result.into())
    }

    /// Registry hint, then built-in candidates, then user paths.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut candidates = Vec::new();
        if self.options.use_registry && self.options.platform == Platform::Windows {
            candidates.extend(registry::steam_install_dirs());
        }
        candidates.extend(host_candidates(self.options.platform)?);
        candidates.extend(self.options.extra_paths.iter().cloned());
        Ok(candidates)
    }

    /// Runs every filesystem stage over an explicit candidate list.
    pub fn scan_candidates(&self, candidates: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::new();
        let mut main_folders: IndexSet<PathBuf> = IndexSet::new();

        for candidate in candidates {
            let Some(root) = classify_candidate(candidate) else {
                continue;
            };
            debug!(
                candidate = %candidate.display(),
                library = %root.path().display(),
                "confirmed library"
            );
            if let Some(main) = root.main_folder() {
                main_folders.insert(main.to_path_buf());
            }
            result.add_library(root);
        }

        for main in &main_folders {
            for root in resolve_libraries(main, self.options.platform) {
                if result.add_library(root.clone()) {
                    debug!(
                        main_folder = %main.display(),
                        library = %root.path().display(),
                        "added library from libraryfolders.vdf"
                    );
                }
            }
        }

        let roots: Vec<LibraryRoot> = result.libraries().cloned().collect();
        for root in &roots {
            match scan_library(root) {
                Ok(apps) => {
                    for app in apps {
                        result.add_application(app);
                    }
                }
                Err(e) => {
                    warn!(library = %root.path().display(), error = %e, "skipping library");
                }
            }
        }

        result
    }
}
