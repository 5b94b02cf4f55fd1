pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

pub use shared::errors::{CatalogError, CatalogResult};
