pub mod apps;
pub mod library;
pub mod paths;
pub mod registry;
pub mod scan;
pub mod vdf;

use std::path::PathBuf;

// Re-export primary types.
pub use apps::{app_from_manifest, load_app_manifest, scan_library};
pub use library::{LibraryRoot, resolve_libraries};
pub use paths::{Platform, candidate_paths, discover_candidates};
pub use scan::{ScanOptions, ScanResult, Scanner, classify_candidate};
pub use vdf::{ManifestRecord, find_value, parse_pairs};

/// Errors for Steam library discovery.
///
/// Only `UnsupportedPlatform` and `HomeDirectoryUnavailable` reach the caller
/// of a full scan. The others are recovered per file or per library.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("home directory unavailable")]
    HomeDirectoryUnavailable,

    #[error("key {0} not found")]
    KeyNotFound(String),

    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest pattern: {0}")]
    GlobPattern(String),
}
