//! HTTP server layer
//!
//! Axum server with:
//! - An explicit interceptor pipeline (recovery, logging, security headers)
//! - Request tracing with peer addresses
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use pipeline::{Interceptor, Next, Pipeline, PipelineBuilder};
pub use server::{build_router, run_server, ServerConfig, ServerError};
