//! Shared helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Path to the checked-in catalog fixture.
pub fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/ship_data.json")
        .canonicalize()
        .expect("ship data fixture present")
}

/// `shipwright` command pointed at the fixture catalog with quiet logging.
pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("shipwright");
    cmd.env("SHIPWRIGHT_CATALOG", fixture_catalog())
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1");
    cmd
}
