//! Command implementations.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use gamescan_protocol::ScanReport;
use gamescan_steam::{ScanOptions, Scanner, parse_pairs};

use crate::ScanArgs;
use crate::config::Config;

/// Scans the host and prints the JSON document on stdout.
pub fn scan(args: &ScanArgs, config: &Config) -> anyhow::Result<()> {
    let scanner = Scanner::new(scan_options(args, config)?);
    let options = scanner.options();
    tracing::debug!(
        platform = %options.platform,
        extra_paths = options.extra_paths.len(),
        use_registry = options.use_registry,
        "scanning"
    );

    let report = scanner.run()?;
    let json = render(&report, config.pretty && !args.compact)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

/// Combines config and command-line flags. Flags win; paths from both are
/// probed, config paths first.
fn scan_options(args: &ScanArgs, config: &Config) -> anyhow::Result<ScanOptions> {
    let mut options = match &args.os {
        Some(os) => ScanOptions::for_os(os)?,
        None => ScanOptions::for_host()?,
    };
    options.use_registry = config.use_registry && !args.no_registry;
    options.extra_paths = config.library_paths();
    options.extra_paths.extend(args.paths.iter().cloned());
    Ok(options)
}

fn render(report: &ScanReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

/// Prints every `key: value` pair of one manifest, in file order.
pub fn dump_manifest(file: &Path) -> anyhow::Result<()> {
    let data =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let record = parse_pairs(&String::from_utf8_lossy(&data));
    if record.is_empty() {
        tracing::warn!(path = %file.display(), "no key/value pairs found");
    }

    let mut out = std::io::stdout().lock();
    for (key, value) in record.iter() {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}
