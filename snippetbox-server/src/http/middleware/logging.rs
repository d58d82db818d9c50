//! Per-request access logging

use std::fmt;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::extract::{ConnectInfo, Request};
use axum::response::Response;

use crate::http::pipeline::{Interceptor, Next};

/// What gets logged for each request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Peer address, or `-` when the server was not started with connect info
    pub remote_addr: String,
    pub proto: String,
    pub method: String,
    /// Path plus query string
    pub uri: String,
}

impl RequestLine {
    pub fn from_request(req: &Request) -> Self {
        let remote_addr = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "-".to_owned());

        let uri = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_owned())
            .unwrap_or_else(|| "/".to_owned());

        Self {
            remote_addr,
            proto: format!("{:?}", req.version()),
            method: req.method().to_string(),
            uri,
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} {}",
            self.remote_addr, self.proto, self.method, self.uri
        )
    }
}

/// Logs a [`RequestLine`] at info level before delegating.
pub struct RequestLogging;

#[async_trait]
impl Interceptor for RequestLogging {
    fn name(&self) -> &'static str {
        "request_logging"
    }

    async fn handle(&self, req: Request, next: Next) -> Response {
        let line = RequestLine::from_request(&req);
        tracing::info!(
            remote_addr = %line.remote_addr,
            proto = %line.proto,
            method = %line.method,
            uri = %line.uri,
            "{}",
            line
        );

        next.run(req).await
    }
}
