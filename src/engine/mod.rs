//! Catalog build pipeline
//!
//! discovery → enumeration → labels → assembly. The result is a
//! [`BuildReport`]; writing and console output are left to the caller.

pub mod labels;
pub mod manifest;
pub mod scanner;

use crate::config::CatalogConfig;
use crate::Result;
use labels::LabelNormalizer;
use manifest::{Catalog, CatalogAssembler};
use std::path::PathBuf;
use tracing::{debug, info};

/// What one showcase contributed to the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseSummary {
    pub name: String,
    pub images: usize,
    pub skipped: usize,
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub root: PathBuf,
    pub showcases: Vec<ShowcaseSummary>,
    pub catalog: Catalog,
}

impl BuildReport {
    pub fn total_items(&self) -> usize {
        self.catalog.items.len()
    }

    pub fn total_skipped(&self) -> usize {
        self.showcases.iter().map(|s| s.skipped).sum()
    }
}

/// Scans a gallery tree into a [`Catalog`]
pub struct CatalogBuilder {
    config: CatalogConfig,
    normalizer: LabelNormalizer,
}

impl CatalogBuilder {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Ok(Self {
            config,
            normalizer: LabelNormalizer::new()?,
        })
    }

    /// Run a full scan of the configured root
    pub fn build(&self) -> Result<BuildReport> {
        let root = &self.config.root;
        let showcases = scanner::discover_showcases(root, &self.config.showcase_marker)?;

        let mut assembler = CatalogAssembler::new(self.config.asset_folder.as_str());
        let mut summaries = Vec::with_capacity(showcases.len());

        for showcase in showcases {
            assembler.add_showcase(&showcase);

            let listing = scanner::enumerate_images(&root.join(&showcase))?;
            for filename in &listing.images {
                let label = self.normalizer.normalize(filename);
                debug!("{} -> {}", filename, label);
                assembler.add_item(&showcase, filename, label);
            }

            info!(
                showcase = %showcase,
                images = listing.images.len(),
                skipped = listing.skipped,
                "Showcase scanned"
            );

            summaries.push(ShowcaseSummary {
                name: showcase,
                images: listing.images.len(),
                skipped: listing.skipped,
            });
        }

        let catalog = assembler.finish(root)?;
        info!(
            "Build complete: {} showcases, {} items",
            catalog.showcases.len(),
            catalog.items.len()
        );

        Ok(BuildReport {
            root: root.clone(),
            showcases: summaries,
            catalog,
        })
    }
}
