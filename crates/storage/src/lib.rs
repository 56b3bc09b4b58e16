//! Storage layer for notekeeper
//!
//! PostgreSQL-backed note persistence through a bounded sqlx pool, with an
//! in-memory backend behind the same [`NoteStore`] trait.

mod backend;
mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::{PgStorage, PoolConfig, connect_pool};
pub use traits::NoteStore;
