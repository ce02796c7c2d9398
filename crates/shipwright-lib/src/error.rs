use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the shipwright library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be located at the resolved path.
    #[error("ship catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Raised when the catalog document does not have the expected top-level shape.
    #[error("invalid ship catalog: {message}")]
    CatalogParse { message: String },

    /// Raised when the catalog contains no ships at all.
    #[error("ship catalog does not contain any ships")]
    EmptyCatalog,

    /// Raised when fetching a remote catalog returns a non-success status.
    #[error("failed to fetch ship catalog from {url}: HTTP {status}")]
    CatalogFetch { url: String, status: u16 },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default catalog location")]
    ProjectDirsUnavailable,

    /// Raised when a ship id could not be found in the catalog.
    #[error("unknown ship id: {id}{}", format_suggestions(.suggestions))]
    UnknownShip {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when a component category key is not declared by the catalog.
    #[error("unknown component category: {key}")]
    UnknownCategory { key: String },

    /// Raised when a tier/part index pair does not resolve within a category.
    #[error("no part at tier {tier}, index {part} in category {category}")]
    UnknownPart {
        category: String,
        tier: usize,
        part: usize,
    },

    /// Raised when a facility index does not resolve to a catalog entry.
    #[error("no facility at index {index}")]
    UnknownFacility { index: usize },

    /// Raised when a facility slot is outside the configured slot range.
    #[error("facility slot {slot} is out of range (ship has {slots} slots)")]
    InvalidFacilitySlot { slot: usize, slots: usize },

    /// Raised when a manual selection is rejected by the active ship's eligibility rule.
    #[error("{what} is not available for ship {ship}")]
    IneligibleSelection { ship: String, what: String },

    /// Raised when a stored selection state does not fit the fixed slot layout
    /// or files a part under another category's key.
    #[error("invalid selection state: {message}")]
    InvalidSelectionState { message: String },

    /// Raised when a textual selection token does not parse.
    #[error("invalid selection token '{token}'")]
    InvalidSelectionToken { token: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Known ships: {}",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
