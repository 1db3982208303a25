//! Display labels derived from image filenames.
//!
//! A label is what the gallery shows for an image: the filename without its
//! extension, without a trailing variant marker (`_2`, ` F`, ` (m e f)`), with
//! `.` and `_` turned into spaces. Case, accents and Unicode forms are left
//! alone; the site folds those at query time.

use crate::Result;
use regex::Regex;

const EXTENSION_PATTERN: &str = r"(?i)\.(png|jpg|jpeg)$";
const VARIANT_PATTERN: &str = r"(?i)[_ ]?([1-9]|F|M|\(m ?e ?f\))$";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Compiled normalization rules
#[derive(Debug, Clone)]
pub struct LabelNormalizer {
    extension: Regex,
    variant: Regex,
    whitespace: Regex,
}

impl LabelNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extension: Regex::new(EXTENSION_PATTERN)?,
            variant: Regex::new(VARIANT_PATTERN)?,
            whitespace: Regex::new(WHITESPACE_PATTERN)?,
        })
    }

    /// Derive the display label for `filename`.
    ///
    /// Only one variant marker is removed, so `Falco_F_1.jpg` becomes
    /// `Falco F`.
    pub fn normalize(&self, filename: &str) -> String {
        let stem = self.strip_extension(filename);
        let base = self.variant.replace(&stem, "");
        let spaced = base.trim().replace(['.', '_'], " ");
        self.whitespace.replace_all(&spaced, " ").trim().to_string()
    }

    /// Strip the allow-listed extension only
    pub fn strip_extension<'a>(&self, filename: &'a str) -> std::borrow::Cow<'a, str> {
        self.extension.replace(filename, "")
    }
}
