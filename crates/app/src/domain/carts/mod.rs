//! Carts: per-session line items and derived totals.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::MemCartsRepository;

pub use errors::CartsServiceError;
pub use service::*;
