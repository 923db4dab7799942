// Shared kernel: concerns used by every bounded context

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Storage backends (database pool, in-memory store)
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::{AppConfig, FilmPolicy, StorageBackend};
pub use infrastructure::database::Database;
pub use infrastructure::memory::MemoryStore;
