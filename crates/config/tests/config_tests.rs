// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use debugtargets_config::TargetConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
schema_version: "1.0"
exposer:
  tick_interval_ms: 5
injector:
  sweep_delay_ms: 7
"#
    )
    .unwrap();

    let config = TargetConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.exposer.tick_interval(), Duration::from_millis(5));
    assert!(config.exposer.probe_memory);
    assert_eq!(config.injector.sweep_delay(), Duration::from_millis(7));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = TargetConfig::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.yaml"));
}

#[test]
fn test_malformed_yaml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "exposer: [not, a, map]").unwrap();

    let err = TargetConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse Target Config YAML"));
}
