//! Database layer - connection pool and snippet repository
//!
//! # Design Principles
//!
//! - One pool per process, constructed once and passed down explicitly
//! - Expiry filtering happens in SQL, against the database clock
//! - "No row" is a typed error, not an Option the caller has to remember
//! - Every query runs under a deadline

pub mod migrations;
pub mod pool;
pub mod snippets;

pub use pool::{ConnectionError, ConnectionPool, PoolSettings, SharedPool};
pub use snippets::{Snippet, SnippetStore, StoreError, DEFAULT_QUERY_TIMEOUT, LATEST_LIMIT};
