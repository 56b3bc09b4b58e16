//! Shared constants for notekeeper.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Timeout for calls to the remote keyword function.
pub const SAY_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_PG_MAX_CONNECTIONS: &str = "NOTEKEEPER_PG_MAX_CONNECTIONS";
pub const ENV_PG_ACQUIRE_TIMEOUT_SECS: &str = "NOTEKEEPER_PG_ACQUIRE_TIMEOUT_SECS";
pub const ENV_PG_IDLE_TIMEOUT_SECS: &str = "NOTEKEEPER_PG_IDLE_TIMEOUT_SECS";
pub const ENV_SAY_URL: &str = "NOTEKEEPER_SAY_URL";
pub const ENV_SAY_TIMEOUT_SECS: &str = "NOTEKEEPER_SAY_TIMEOUT_SECS";

pub const MSG_NOTE_CREATED: &str = "Note created successfully";
pub const MSG_NOTE_UPDATED: &str = "Note updated successfully";
pub const MSG_NOTE_DELETED: &str = "Note deleted successfully";
pub const MSG_NOTE_NOT_FOUND: &str = "Note not found";
