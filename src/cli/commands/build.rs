use super::{CommandHandler, CommandResult};
use crate::config::CatalogConfig;
use crate::engine::{BuildReport, CatalogBuilder};
use crate::{io, CatalogError, Result};
use tracing::error;

/// Handler for a catalog build: scan, report, write
pub struct BuildCommand {
    pub config: CatalogConfig,
    pub dry_run: bool,
}

impl CommandHandler for BuildCommand {
    fn execute(&self) -> Result<()> {
        self.say("--- Catalog build started ---");
        self.say(&format!("🔍 Scanning: {}", self.config.root.display()));

        let result = self.run();
        self.say(&result.banner());

        self.say("--- Catalog build finished ---");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "build"
    }
}

impl BuildCommand {
    pub fn new(config: CatalogConfig, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    /// Progress output. A dry run keeps stdout for the manifest alone.
    fn say(&self, line: &str) {
        if self.dry_run {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Build and persist the catalog, printing the per-showcase report.
    /// Every failure ends up in the returned [`CommandResult`].
    pub fn run(&self) -> CommandResult {
        let report = match CatalogBuilder::new(self.config.clone()).and_then(|b| b.build()) {
            Ok(report) => report,
            Err(e) => return Self::build_failure(e),
        };

        for line in report_lines(&report) {
            self.say(&line);
        }

        if self.dry_run {
            return match io::render_catalog(&report.catalog) {
                Ok(content) => {
                    print!("{}", content);
                    CommandResult::Success(Some("Dry run, nothing written".to_string()))
                }
                Err(e) => {
                    error!(kind = e.kind(), "{}", e);
                    CommandResult::Error(format!("Unable to render catalog: {}", e))
                }
            };
        }

        match io::write_catalog(&report.catalog, &self.config.output) {
            Ok(()) => CommandResult::Success(Some(format!(
                "Catalog written to: {}",
                self.config.output.display()
            ))),
            Err(e) => {
                error!(kind = e.kind(), "{}", e);
                CommandResult::Error(e.to_string())
            }
        }
    }

    fn build_failure(e: CatalogError) -> CommandResult {
        error!(kind = e.kind(), "{}", e);
        match e {
            CatalogError::EmptyCatalog { .. } => CommandResult::Warning(e.to_string()),
            other => CommandResult::Error(other.to_string()),
        }
    }
}

fn report_lines(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.showcases.len() * 2 + 3);
    for showcase in &report.showcases {
        lines.push(format!("  Showcase found: {}", showcase.name));
        lines.push(format!("    -> {} valid image files", showcase.images));
    }
    lines.push(String::new());
    lines.push(format!("Showcases found: {}", report.catalog.showcases.len()));
    lines.push(format!("Total images: {}", report.total_items()));
    lines
}
