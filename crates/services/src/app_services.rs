use std::path::Path;
use std::sync::Arc;

use gopher_core::model::TopicCatalog;
use storage::Storage;
use tracing::info;

use crate::Clock;
use crate::error::AppServicesError;
use crate::notes_service::NotesService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one storage backend and catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<TopicCatalog>,
    progress: Arc<ProgressService>,
    notes: Arc<NotesService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, catalog: TopicCatalog, clock: Clock) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&storage.kv),
            Arc::clone(&catalog),
        ));
        let notes = Arc::new(NotesService::new(Arc::clone(&storage.kv)));
        Self {
            catalog,
            progress,
            notes,
        }
    }

    /// Build services persisted to the JSON file at `data_path`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog file cannot be read or parsed.
    pub fn json_file(
        data_path: &Path,
        catalog_path: Option<&Path>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let catalog = load_catalog(catalog_path)?;
        info!(
            data = %data_path.display(),
            categories = catalog.len(),
            topics = catalog.topic_count(),
            "opening progress store"
        );
        Ok(Self::new(&Storage::json_file(data_path), catalog, clock))
    }

    #[must_use]
    pub fn in_memory(catalog: TopicCatalog, clock: Clock) -> Self {
        Self::new(&Storage::in_memory(), catalog, clock)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }
}

/// Read a catalog file, or fall back to the built-in catalog when no path is
/// configured.
///
/// # Errors
///
/// Returns `AppServicesError` if the file cannot be read or is not a valid
/// catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<TopicCatalog, AppServicesError> {
    let Some(path) = path else {
        return Ok(TopicCatalog::builtin());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| AppServicesError::CatalogRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(TopicCatalog::from_json(&raw)?)
}
