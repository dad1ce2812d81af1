//! Durable state storage adapters.

pub mod connection;
pub mod memory_store;
pub mod sqlite_store;

pub use connection::{create_pool, create_test_pool, ConnectionError};
pub use memory_store::InMemoryStateStore;
pub use sqlite_store::SqliteStateStore;
