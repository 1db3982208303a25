pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;

pub use config::CatalogConfig;
pub use engine::{BuildReport, CatalogBuilder};
pub use error::{CatalogError, Result};
