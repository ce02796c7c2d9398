//! Catalog location resolution and loading.
//!
//! A catalog lives in a local JSON file or behind an HTTP(S) URL. The location
//! comes from an explicit argument, then `SHIPWRIGHT_CATALOG`, then the
//! platform data directory.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV: &str = "SHIPWRIGHT_CATALOG";

/// Default filename for the catalog document.
pub const CATALOG_FILENAME: &str = "ship_data.json";

/// Where a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file.
    Path(PathBuf),
    /// Remote JSON document fetched once over HTTP(S).
    Url(String),
}

impl CatalogSource {
    /// Interpret a user-supplied location: `http://` and `https://` values are
    /// URLs, anything else is a filesystem path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(trimmed))
        }
    }

    /// Resolve the catalog location.
    ///
    /// The resolution order is:
    /// 1. Explicit `location` argument when provided.
    /// 2. `SHIPWRIGHT_CATALOG` environment variable.
    /// 3. Platform-specific project data directory.
    pub fn resolve(location: Option<&str>) -> Result<Self> {
        resolve_from(location, env::var(CATALOG_ENV).ok())
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

fn resolve_from(location: Option<&str>, env_value: Option<String>) -> Result<CatalogSource> {
    if let Some(explicit) = location.filter(|value| !value.trim().is_empty()) {
        return Ok(CatalogSource::parse(explicit));
    }

    if let Some(env_value) = env_value.filter(|value| !value.trim().is_empty()) {
        debug!("using catalog location from {}", CATALOG_ENV);
        return Ok(CatalogSource::parse(&env_value));
    }

    Ok(CatalogSource::Path(default_catalog_path()?))
}

/// Resolve the default catalog location using platform-specific project directories.
pub fn default_catalog_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "shipwright", "shipwright")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CATALOG_FILENAME))
}

/// Load the catalog from `source`, fetching it when the source is a URL.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    match source {
        CatalogSource::Path(path) => Catalog::from_path(path),
        CatalogSource::Url(url) => fetch_catalog(url),
    }
}

fn fetch_catalog(url: &str) -> Result<Catalog> {
    info!("fetching ship catalog from {}", url);
    let client = build_client()?;
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::CatalogFetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    let catalog = Catalog::from_json_str(&body)?;
    info!(
        ships = catalog.ships().len(),
        categories = catalog.categories().len(),
        facilities = catalog.facilities().len(),
        "loaded ship catalog from {}",
        url
    );
    Ok(catalog)
}

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("shipwright-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}
