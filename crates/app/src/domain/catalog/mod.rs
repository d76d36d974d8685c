//! Catalog: categories and products.

pub mod errors;
pub mod models;
mod repository;
pub mod seed;
pub mod service;

pub(crate) use repository::MemCatalogRepository;

pub use errors::CatalogServiceError;
pub use service::*;
