//! Shared helpers for the binary-level tests.
#![allow(dead_code)]

use assert_cmd::Command;

/// Build a command for the `copy-kibana-dashboard` binary.
pub fn copy_cmd() -> Command {
    Command::cargo_bin("copy-kibana-dashboard").expect("binary should be built")
}

/// Build a command for the `import-csv` binary.
pub fn import_cmd() -> Command {
    Command::cargo_bin("import-csv").expect("binary should be built")
}
