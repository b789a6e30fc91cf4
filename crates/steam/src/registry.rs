//! Steam install location recorded in the Windows registry.

use std::path::PathBuf;

/// Returns the Steam install directories recorded in the registry, most
/// authoritative first. Always empty on other hosts.
#[cfg(target_os = "windows")]
pub fn steam_install_dirs() -> Vec<PathBuf> {
    use winreg::RegKey;
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let lookups = [
        // 64-bit registry view first
        (&hklm, r"SOFTWARE\Wow6432Node\Valve\Steam", "InstallPath"),
        (&hklm, r"SOFTWARE\Valve\Steam", "InstallPath"),
        (&hkcu, r"Software\Valve\Steam", "SteamPath"),
    ];

    let mut dirs = Vec::new();
    for (hive, subkey, value) in lookups {
        match read_registry_path(hive, subkey, value) {
            Ok(path) if !dirs.contains(&path) => dirs.push(path),
            Ok(_) => {}
            Err(e) => tracing::debug!(subkey, value, error = %e, "steam registry key not readable"),
        }
    }
    dirs
}

#[cfg(not(target_os = "windows"))]
pub fn steam_install_dirs() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(target_os = "windows")]
fn read_registry_path(
    hive: &winreg::RegKey,
    subkey: &str,
    value: &str,
) -> std::io::Result<PathBuf> {
    let key = hive.open_subkey(subkey)?;
    let path: String = key.get_value(value)?;
    // HKCU SteamPath is stored lowercase with forward slashes.
    let path = PathBuf::from(path.replace('/', r"\"));
    Ok(dunce::canonicalize(&path).unwrap_or(path))
}
