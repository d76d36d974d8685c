//! Atelier Domain Concerns

pub mod carts;
pub mod catalog;
pub mod designs;
pub mod orders;
