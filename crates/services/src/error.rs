//! Shared error types for the services crate.

use thiserror::Error;

use gopher_core::model::{CatalogError, LedgerCodecError, NoteError};
use storage::StorageError;

/// Errors emitted by `ProgressService` write paths. Reads never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Ledger(#[from] LedgerCodecError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `NotesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotesError {
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
