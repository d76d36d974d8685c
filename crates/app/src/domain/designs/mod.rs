//! Custom designs: per-product canvases of positioned text and image
//! elements.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::{LinkError, MemDesignsRepository};

pub use errors::DesignsServiceError;
pub use service::*;
