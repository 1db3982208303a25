use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Asset root not found or not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("No valid image files found under {}", root.display())]
    EmptyCatalog { root: PathBuf },

    #[error("Unable to write catalog to '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl CatalogError {
    /// Short tag used by the reporter banners
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::RootNotFound { .. } => "root-not-found",
            CatalogError::EmptyCatalog { .. } => "empty-catalog",
            CatalogError::WriteFailure { .. } => "write-failure",
            CatalogError::Scan { .. } => "scan",
            CatalogError::Json(_) => "json",
            CatalogError::Regex(_) => "regex",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
