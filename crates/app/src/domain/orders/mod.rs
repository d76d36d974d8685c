//! Orders: frozen checkout snapshots.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::MemOrdersRepository;

pub use errors::OrdersServiceError;
pub use service::*;
