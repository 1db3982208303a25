use crate::config::types::{
    CatalogConfig, DEFAULT_ASSET_FOLDER, DEFAULT_OUTPUT_FILE, DEFAULT_SHOWCASE_MARKER,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// vetrine: builds the gallery manifest from the showcase folders
#[derive(Parser, Debug)]
#[command(name = "vetrine")]
#[command(version = "0.1.0")]
#[command(about = "Builds the gallery manifest (data.json) from the showcase folders")]
#[command(
    long_about = "Scans every VETRINA* folder under the image root, derives a display name for each image and writes the showcase list plus the image list as JSON for the gallery site."
)]
pub struct Cli {
    /// Directory containing the showcase folders
    #[arg(long, default_value = DEFAULT_ASSET_FOLDER)]
    pub root: PathBuf,

    /// Folder prefix written into every image_path
    #[arg(long, default_value = DEFAULT_ASSET_FOLDER)]
    pub asset_folder: String,

    /// Manifest destination
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Folder-name prefix identifying a showcase (case-insensitive)
    #[arg(long, default_value = DEFAULT_SHOWCASE_MARKER)]
    pub marker: String,

    /// Print the manifest instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::for_root(&self.root)
            .with_asset_folder(self.asset_folder.as_str())
            .with_output(&self.output)
            .with_showcase_marker(self.marker.as_str())
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_catalog_config() {
        let cli = Cli::parse_from(["vetrine"]);

        assert_eq!(cli.catalog_config(), CatalogConfig::default());
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "vetrine",
            "--root",
            "site/img",
            "--output",
            "site/data.json",
            "--marker",
            "case",
            "--dry-run",
            "--log-level",
            "debug",
        ]);

        let config = cli.catalog_config();
        assert_eq!(config.root, PathBuf::from("site/img"));
        assert_eq!(config.asset_folder, "img");
        assert_eq!(config.output, PathBuf::from("site/data.json"));
        assert_eq!(config.showcase_marker, "case");
        assert!(cli.dry_run);
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["vetrine", "--log-level", "loud"]).is_err());
    }
}
