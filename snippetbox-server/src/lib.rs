//! snippetbox-server: short-lived text snippets over HTTP
//!
//! Stores snippets in Postgres with server-side expiry and serves them
//! through a fixed interceptor pipeline.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{
    ConnectionError, ConnectionPool, PoolSettings, SharedPool, Snippet, SnippetStore, StoreError,
};
pub use http::{build_router, run_server, ApiError, Pipeline, PipelineBuilder, ServerConfig};
pub use state::AppState;
