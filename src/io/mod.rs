pub mod writer;

pub use writer::{render_catalog, write_catalog};
