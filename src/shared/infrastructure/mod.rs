/// Shared infrastructure concerns
///
/// Storage backends that span several bounded contexts: the PostgreSQL
/// connection pool and the in-process store used by the memory backend.
pub mod database;
pub mod memory;

// Re-exports for convenience
pub use database::Database;
pub use memory::{MemoryState, MemoryStore};
