//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is verified
//! with a ping before it is handed out, so a reachable-but-wrong server
//! fails at startup rather than on the first request.
//!
//! [`SharedPool`] is a one-shot cell for subsystems that may race to create
//! the pool. Whatever the first attempt produced, success or failure, is what
//! every caller gets back. There is no retry; restart the process instead.
//! The attempt is stored as a shared future, so a caller that gives up
//! mid-connect leaves it in place for the next caller to finish.

use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a checkout may wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool construction or liveness failure. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("unable to create connection pool: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database did not answer ping: {0}")]
    Ping(#[source] sqlx::Error),

    /// A cached failure from the first initialization attempt.
    #[error(transparent)]
    Init(Arc<ConnectionError>),
}

/// Pool sizing knobs
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolSettings {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// A live, bounded set of Postgres connections.
///
/// Cloning is cheap and shares the same underlying pool.
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    pool: PgPool,
}

impl ConnectionPool {
    /// Connect with default settings and verify the server answers.
    ///
    /// # Errors
    ///
    /// [`ConnectionError::Connect`] for a malformed connection string or an
    /// unreachable server, [`ConnectionError::Ping`] if the liveness check
    /// fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = ConnectionPool::open("postgres://localhost/snippetbox").await?;
    /// ```
    pub async fn open(database_url: &str) -> Result<Self, ConnectionError> {
        Self::open_with(database_url, &PoolSettings::default()).await
    }

    /// Connect with custom settings and verify the server answers.
    pub async fn open_with(
        database_url: &str,
        settings: &PoolSettings,
    ) -> Result<Self, ConnectionError> {
        let pool = settings
            .options()
            .connect(database_url)
            .await
            .map_err(ConnectionError::Connect)?;

        let pool = Self { pool };
        pool.ping().await?;

        tracing::debug!(
            max_connections = settings.max_connections,
            "database pool ready"
        );
        Ok(pool)
    }

    /// Build a pool that connects on first checkout.
    ///
    /// Only the connection string is validated here; nothing touches the
    /// network until a query runs.
    pub fn open_lazy(
        database_url: &str,
        settings: &PoolSettings,
    ) -> Result<Self, ConnectionError> {
        let pool = settings
            .options()
            .connect_lazy(database_url)
            .map_err(ConnectionError::Connect)?;
        Ok(Self { pool })
    }

    /// Liveness check: one round-trip on a pooled connection.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        let mut conn = self.pool.acquire().await.map_err(ConnectionError::Ping)?;
        conn.ping().await.map_err(ConnectionError::Ping)
    }

    /// Release every connection. Call once, after the server has drained.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    pub fn inner(&self) -> &PgPool {
        &self.pool
    }
}

impl From<PgPool> for ConnectionPool {
    fn from(pool: PgPool) -> Self {
        Self { pool }
    }
}

type InitAttempt = Shared<BoxFuture<'static, Result<ConnectionPool, Arc<ConnectionError>>>>;

/// One-shot, concurrency-safe pool initialization.
#[derive(Default)]
pub struct SharedPool {
    attempt: OnceLock<InitAttempt>,
    settings: PoolSettings,
}

impl SharedPool {
    pub fn new(settings: PoolSettings) -> Self {
        Self {
            attempt: OnceLock::new(),
            settings,
        }
    }

    /// Return the shared pool, opening it on the first call.
    ///
    /// Every caller receives a handle to the same underlying pool. Concurrent
    /// first callers wait on a single attempt. A failed attempt is cached and
    /// returned as [`ConnectionError::Init`] from then on.
    pub async fn get_or_open(
        &self,
        database_url: &str,
    ) -> Result<ConnectionPool, ConnectionError> {
        let database_url = database_url.to_owned();
        let settings = self.settings.clone();
        self.get_or_init_with(move || async move {
            ConnectionPool::open_with(&database_url, &settings).await
        })
        .await
    }

    async fn get_or_init_with<F, Fut>(&self, init: F) -> Result<ConnectionPool, ConnectionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ConnectionPool, ConnectionError>> + Send + 'static,
    {
        let attempt = self.attempt.get_or_init(|| {
            init()
                .map(|outcome| outcome.map_err(Arc::new))
                .boxed()
                .shared()
        });

        attempt.clone().await.map_err(ConnectionError::Init)
    }

    /// The pool, if the first attempt has finished and succeeded.
    pub fn get(&self) -> Option<&ConnectionPool> {
        match self.attempt.get().and_then(Shared::peek) {
            Some(Ok(pool)) => Some(pool),
            _ => None,
        }
    }

    /// Close the pool. A no-op if it was never successfully opened.
    pub async fn close(&self) {
        if let Some(pool) = self.get() {
            pool.close().await;
        }
    }
}
