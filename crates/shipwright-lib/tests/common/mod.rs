//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use shipwright_lib::Catalog;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in catalog fixture.
pub fn fixture_catalog_path() -> PathBuf {
    fixtures_dir().join("ship_data.json")
}

/// Load the checked-in catalog fixture.
#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(&fixture_catalog_path()).expect("load fixture ship_data.json")
}
