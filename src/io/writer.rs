//! Manifest serialization
//!
//! The document is rendered fully in memory before the destination is
//! opened, so a failed render never truncates an existing manifest.

use crate::engine::manifest::Catalog;
use crate::{CatalogError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Pretty-printed JSON with a trailing newline; non-ASCII left as is
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let mut content = serde_json::to_string_pretty(catalog)?;
    content.push('\n');
    Ok(content)
}

/// Write `catalog` to `path`, replacing any previous content
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let content = render_catalog(catalog).map_err(|e| match e {
        CatalogError::Json(err) => CatalogError::WriteFailure {
            path: path.to_path_buf(),
            source: err.into(),
        },
        other => other,
    })?;

    debug!("Rendered catalog: {} bytes", content.len());

    let write_failure = |source: std::io::Error| CatalogError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_failure)?;
    file.write_all(content.as_bytes()).map_err(write_failure)?;
    file.flush().map_err(write_failure)?;

    info!("Catalog written to {:?}", path);
    Ok(())
}
