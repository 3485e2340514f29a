use std::sync::Arc;

use gopher_core::model::TopicCatalog;
use services::{NotesService, ProgressService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<TopicCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn notes(&self) -> Arc<NotesService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<TopicCatalog>,
    progress: Arc<ProgressService>,
    notes: Arc<NotesService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            notes: app.notes(),
        }
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

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
