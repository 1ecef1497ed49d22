// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn fast_config(probe_memory: bool) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
schema_version: "1.0"
exposer:
  tick_interval_ms: 0
  probe_memory: {}
"#,
        probe_memory
    )
    .unwrap();
    file
}

#[test]
fn test_prints_pid_prompt_and_progress() {
    let config = fast_config(false);
    let output = Command::cargo_bin("state-exposer")
        .unwrap()
        .args(["--iterations", "3", "--config"])
        .arg(config.path())
        .output()
        .expect("Failed to execute state-exposer");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    let pid_line = lines.next().unwrap();
    let pid: u32 = pid_line
        .strip_prefix("Pid of this process: ")
        .expect("pid line")
        .parse()
        .expect("numeric pid");
    assert!(pid > 0);
    assert_eq!(lines.next(), Some("Press any key..."));
    assert_eq!(lines.next(), Some("..."));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}

#[test]
fn test_memory_query_enabled() {
    let config = fast_config(true);
    Command::cargo_bin("state-exposer")
        .unwrap()
        .args(["--trace", "--iterations", "2", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Press any key..."))
        .stderr(predicate::str::contains("Installed system memory queried").count(2));
}

#[test]
fn test_memory_query_disabled() {
    let config = fast_config(false);
    Command::cargo_bin("state-exposer")
        .unwrap()
        .args(["--trace", "--iterations", "2", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Installed system memory queried").not());
}

#[test]
fn test_missing_config_exits_with_config_error() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("state-exposer")
        .unwrap()
        .args(["--iterations", "1", "--config"])
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .code(2);
}
