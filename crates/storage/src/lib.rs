#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::JsonFileStore;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
