//! Shared application domain and in-memory persistence modules.

pub mod context;
pub mod domain;
pub mod store;

mod uuids;

pub use uuids::TypedUuid;
