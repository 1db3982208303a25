use crate::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// One gallery image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display label derived from the filename
    #[serde(rename = "name")]
    pub label: String,

    /// `<asset-folder>/<showcase>/<filename>`, always with forward slashes
    #[serde(rename = "image_path")]
    pub path: String,

    /// Name of the owning showcase directory
    #[serde(rename = "vetrina")]
    pub showcase: String,
}

/// The manifest consumed by the gallery site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Showcase names, sorted by code point
    #[serde(rename = "vetrine")]
    pub showcases: Vec<String>,

    /// Items in discovery order
    #[serde(rename = "birds")]
    pub items: Vec<Item>,
}

/// Accumulates showcases and items while the tree is scanned
#[derive(Debug, Default)]
pub struct CatalogAssembler {
    asset_folder: String,
    showcases: BTreeSet<String>,
    items: Vec<Item>,
}

impl CatalogAssembler {
    pub fn new(asset_folder: impl Into<String>) -> Self {
        Self {
            asset_folder: asset_folder.into(),
            ..Self::default()
        }
    }

    /// Register a showcase, even one that ends up contributing no items
    pub fn add_showcase(&mut self, showcase: &str) {
        if self.showcases.get(showcase).is_none() {
            self.showcases.insert(showcase.to_string());
        }
    }

    /// Append an item; its showcase is registered as well
    pub fn add_item(&mut self, showcase: &str, filename: &str, label: String) {
        self.add_showcase(showcase);
        self.items.push(Item {
            label,
            path: image_path(&self.asset_folder, showcase, filename),
            showcase: showcase.to_string(),
        });
    }

    /// Finish the catalog. Fails when no item was collected, reporting `root`
    /// as the scanned location.
    pub fn finish(self, root: &Path) -> Result<Catalog> {
        if self.items.is_empty() {
            return Err(CatalogError::EmptyCatalog {
                root: root.to_path_buf(),
            });
        }

        Ok(Catalog {
            showcases: self.showcases.into_iter().collect(),
            items: self.items,
        })
    }
}

/// Build the manifest path of an image, independent of the host separator
pub fn image_path(asset_folder: &str, showcase: &str, filename: &str) -> String {
    format!("{}/{}/{}", asset_folder, showcase, filename).replace('\\', "/")
}
