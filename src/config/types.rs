use std::path::{Path, PathBuf};

/// Folder name the presentation layer serves images from
pub const DEFAULT_ASSET_FOLDER: &str = "img";

/// Manifest filename read by the presentation layer
pub const DEFAULT_OUTPUT_FILE: &str = "data.json";

/// Directory-name prefix identifying a showcase
pub const DEFAULT_SHOWCASE_MARKER: &str = "VETRINA";

/// Settings for a single catalog build.
///
/// `Default` reproduces the layout the gallery site expects: showcases under
/// `img/`, manifest written to `data.json` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory scanned for showcase subdirectories
    pub root: PathBuf,

    /// Prefix of every `image_path` in the manifest, independent of `root`
    pub asset_folder: String,

    /// Destination of the manifest
    pub output: PathBuf,

    /// Case-insensitive prefix a subdirectory needs to count as a showcase
    pub showcase_marker: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ASSET_FOLDER),
            asset_folder: DEFAULT_ASSET_FOLDER.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            showcase_marker: DEFAULT_SHOWCASE_MARKER.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Config rooted at `root`, other settings left at their defaults
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    pub fn with_asset_folder(mut self, asset_folder: impl Into<String>) -> Self {
        self.asset_folder = asset_folder.into();
        self
    }

    pub fn with_showcase_marker(mut self, marker: impl Into<String>) -> Self {
        self.showcase_marker = marker.into();
        self
    }
}
