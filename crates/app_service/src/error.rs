//! Service-level errors

use domain_directory::DirectoryError;
use infra_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the application service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A directory operation was rejected
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The snapshot store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
