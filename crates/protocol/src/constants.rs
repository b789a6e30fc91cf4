//! Stable values that downstream consumers match on.

/// Source tag attached to every record found in a Steam library.
pub const SOURCE_STEAM: &str = "Steam";

/// Written in place of an install path when the declared directory is absent.
pub const NOT_FOUND_SENTINEL: &str = "N/A - Not Found";
