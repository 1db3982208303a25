pub mod types;

pub use types::CatalogConfig;
