fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use gamescan_protocol::{ApplicationInfo, InstallLocation, ScanReport};
    use gamescan_steam::{Platform, ScanOptions, Scanner};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values.
    fn roundtrip_test<T>(name: &str) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));
        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  Rust:    {reserialized}"
        );
        parsed
    }

    /// Returns the sorted key names of a JSON object.
    fn keys(v: &serde_json::Value) -> Vec<&str> {
        let mut keys: Vec<&str> = v
            .as_object()
            .expect("expected JSON object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn fixture_scan_report() {
        let report: ScanReport = roundtrip_test("scan_report.json");
        assert_eq!(report.games.len(), 2);
        assert!(report.games[0].location.is_found());
        assert_eq!(report.games[1].location, InstallLocation::NotFound);
        assert_eq!(report.libraries[0].path, r"D:\Steam test\steamapps");
    }

    #[test]
    fn fixture_application_info() {
        let app: ApplicationInfo = roundtrip_test("application_info.json");
        assert_eq!(app.app_id, "400");
        assert_eq!(
            app.location.path(),
            Some(std::path::Path::new(
                "/home/deck/.local/share/Steam/steamapps/common/Portal"
            ))
        );
    }

    #[test]
    fn fixture_application_info_not_found() {
        let app: ApplicationInfo = roundtrip_test("application_info_not_found.json");
        assert_eq!(app.location, InstallLocation::NotFound);
    }

    #[test]
    fn fixture_empty_report() {
        let report: ScanReport = roundtrip_test("empty_report.json");
        assert!(report.is_empty());
    }

    /// A real scan must produce exactly the field set the fixtures use.
    #[test]
    fn scanned_document_matches_fixture_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let steamapps = fs::canonicalize(tmp.path()).unwrap().join("steamapps");
        fs::create_dir_all(steamapps.join("common").join("Rust")).unwrap();
        fs::write(
            steamapps.join("appmanifest_252490.acf"),
            "\"appid\" \"252490\"\n\"name\" \"Rust\"\n\"installdir\" \"Rust\"",
        )
        .unwrap();
        fs::write(
            steamapps.join("appmanifest_570.acf"),
            "\"appid\" \"570\"\n\"name\" \"Dota 2\"\n\"installdir\" \"dota 2 beta\"",
        )
        .unwrap();

        let result = Scanner::new(ScanOptions::new(Platform::Linux))
            .scan_candidates(std::slice::from_ref(&steamapps));
        let report: ScanReport = result.into();
        let scanned = serde_json::to_value(&report).unwrap();
        let fixture = load_fixture("scan_report.json");

        assert_eq!(keys(&scanned), keys(&fixture));
        assert_eq!(keys(&scanned["games"][0]), keys(&fixture["games"][0]));
        assert_eq!(keys(&scanned["libraries"][0]), keys(&fixture["libraries"][0]));

        assert_eq!(scanned["games"][0]["appid"], "252490");
        assert_eq!(
            scanned["games"][0]["full_install_path"],
            steamapps.join("common").join("Rust").to_string_lossy().as_ref()
        );
        assert_eq!(scanned["games"][1]["full_install_path"], "N/A - Not Found");
        assert_eq!(scanned["games"][1]["source"], "Steam");
        assert_eq!(
            scanned["libraries"][0]["path"],
            steamapps.to_string_lossy().as_ref()
        );
    }
}
