pub mod constants;
pub mod types;

// Re-export primary types for convenience.
pub use constants::{NOT_FOUND_SENTINEL, SOURCE_STEAM};
pub use types::{ApplicationInfo, InstallLocation, LibraryEntry, ScanReport};
