//! File system scanner for showcase directories and their images
//!
//! Discovery only looks one level below the asset root, and enumeration one
//! level below each showcase. Both listings are sorted by file name so that
//! repeated builds over the same tree produce the same manifest.

use crate::{CatalogError, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Extensions accepted as gallery images (compared lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Prefix of editor/OS captures that never belong in the gallery
const SCREENSHOT_PREFIX: &str = "screenshot";

const HIDDEN_MARKER: char = '.';

/// Images found in one showcase directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseListing {
    /// Eligible filenames, sorted
    pub images: Vec<String>,
    /// Entries rejected by [`is_eligible_image`] or not regular files
    pub skipped: usize,
}

/// Find the immediate subdirectories of `root` whose name starts with
/// `marker`, ignoring case.
pub fn discover_showcases(root: &Path, marker: &str) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(CatalogError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    info!("Scanning for showcases in: {:?}", root);

    let marker = marker.to_uppercase();
    let mut showcases = Vec::new();

    for entry in shallow_walk(root) {
        let Some(entry) = readable_entry(entry, root)? else {
            continue;
        };

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping entry with non UTF-8 name: {:?}", entry.path());
            continue;
        };

        if !name.to_uppercase().starts_with(&marker) {
            debug!("Not a showcase: {}", name);
            continue;
        }

        if !entry.file_type().is_dir() {
            debug!("Showcase-named entry is not a directory: {}", name);
            continue;
        }

        debug!("Found showcase: {}", name);
        showcases.push(name.to_string());
    }

    info!("Discovery complete: {} showcases", showcases.len());

    Ok(showcases)
}

/// List the eligible image files directly inside `dir`
pub fn enumerate_images(dir: &Path) -> Result<ShowcaseListing> {
    let mut listing = ShowcaseListing::default();

    for entry in shallow_walk(dir) {
        let Some(entry) = readable_entry(entry, dir)? else {
            listing.skipped += 1;
            continue;
        };

        if !entry.file_type().is_file() {
            listing.skipped += 1;
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) if is_eligible_image(name) => {
                debug!("Found image: {}", name);
                listing.images.push(name.to_string());
            }
            Some(_) => listing.skipped += 1,
            None => {
                warn!("Skipping file with non UTF-8 name: {:?}", entry.path());
                listing.skipped += 1;
            }
        }
    }

    Ok(listing)
}

/// Whether `filename` should appear in the gallery: not hidden, an allowed
/// image extension, and not a screenshot.
pub fn is_eligible_image(filename: &str) -> bool {
    if filename.starts_with(HIDDEN_MARKER) {
        return false;
    }

    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) && !lower.starts_with(SCREENSHOT_PREFIX)
}

/// Unwrap a walk result. Only a failure to read `dir` itself is fatal; an
/// unreadable child (dangling symlink, permission denied) is skipped.
fn readable_entry(
    entry: walkdir::Result<DirEntry>,
    dir: &Path,
) -> Result<Option<DirEntry>> {
    match entry {
        Ok(entry) => Ok(Some(entry)),
        Err(err) if err.depth() > 0 => {
            warn!("Skipping unreadable entry in {:?}: {}", dir, err);
            Ok(None)
        }
        Err(source) => Err(CatalogError::Scan {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Direct children of `dir`, symlinks resolved, sorted by name
fn shallow_walk(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}
