//! Targeted lookups in text VDF (`.acf` / `.vdf`) manifests.
//!
//! This does not build the brace-delimited tree. It pattern-matches
//! `"key" "value"` pairs anywhere in the text, so the first match wins
//! regardless of nesting depth. Callers should only ask for keys that appear
//! once at the top level (`appid`, `name`, `installdir`).

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::ScanError;

/// Matches any `"key" "value"` pair. Empty values are allowed here so that
/// `parse_pairs` keeps its alignment over entries like `"LastOwner" ""`.
static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\r\n]+)"\s+"([^"\r\n]*)""#).expect("pair pattern is valid")
});

/// Returns the first non-empty value stored under `key`.
///
/// Keys are matched ASCII case-insensitively, like Steam itself does.
pub fn find_value(text: &str, key: &str) -> Result<String, ScanError> {
    let pattern = format!(r#""{}"\s+"([^"\r\n]+)""#, regex::escape(key));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|_| ScanError::KeyNotFound(key.into()))?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ScanError::KeyNotFound(key.into()))
}

/// Every `"key" "value"` pair from one manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestRecord {
    pairs: Vec<(String, String)>,
}

impl ManifestRecord {
    /// Returns the first value for `key` (ASCII case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Collects every flat `"key" "value"` pair in the text. Section headers
/// (`"AppState" {`) are not pairs and are skipped.
pub fn parse_pairs(text: &str) -> ManifestRecord {
    let pairs = PAIR_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();
    ManifestRecord { pairs }
}
