//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

/// Obtains injected state from the depot, reporting a missing entry as a
/// server error rather than panicking inside a handler.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        // Absence means the affix-state middleware never ran for this route.
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
