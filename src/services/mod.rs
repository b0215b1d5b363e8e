// Service exports
pub mod catalog;
pub mod memory;
pub mod postgres;

pub use catalog::{BreedCatalog, CatalogError};
pub use memory::MemoryCatalog;
pub use postgres::PostgresCatalog;
