//! Application state shared across handlers

use std::sync::Arc;
use std::time::Duration;

use crate::db::{ConnectionPool, SnippetStore, DEFAULT_QUERY_TIMEOUT};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: ConnectionPool,
    query_timeout: Duration,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_query_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_query_timeout(pool: ConnectionPool, query_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                query_timeout,
            }),
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.inner.pool
    }

    /// A snippet store bound to this state's pool and deadline.
    pub fn snippets(&self) -> SnippetStore<'_> {
        SnippetStore::new(&self.inner.pool).with_timeout(self.inner.query_timeout)
    }
}
