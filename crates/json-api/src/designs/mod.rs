//! Custom Designs

mod errors;
mod handlers;

pub(crate) use handlers::*;
