#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod notes_service;
pub mod progress_service;

pub use gopher_core::Clock;

pub use app_services::{AppServices, load_catalog};
pub use error::{AppServicesError, NotesError, ProgressError};
pub use notes_service::NotesService;
pub use progress_service::{LEDGER_KEY, ProgressService};
