//! Panic containment for request handling
//!
//! A panic inside any interceptor or handler further in is caught here,
//! logged through the normal 500 path, and the connection is marked for
//! closing since it may be left in an unknown state. The unwind skips the
//! security header stage, so the fault response gets those headers here.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use futures::FutureExt;

use super::headers::apply_security_headers;
use crate::http::error::ApiError;
use crate::http::pipeline::{Interceptor, Next};

/// A panic caught while handling a request
#[derive(Debug, thiserror::Error)]
#[error("panic while handling request: {message}")]
pub struct PanicFault {
    pub message: String,
}

impl PanicFault {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_owned()
        };
        Self { message }
    }
}

/// Converts panics into `500` responses with `Connection: close`.
pub struct Recovery;

#[async_trait]
impl Interceptor for Recovery {
    fn name(&self) -> &'static str {
        "recovery"
    }

    async fn handle(&self, req: Request, next: Next) -> Response {
        match AssertUnwindSafe(next.run(req)).catch_unwind().await {
            Ok(response) => response,
            Err(payload) => {
                let fault = PanicFault::from_payload(payload);
                let mut response = ApiError::from(fault).into_response();
                let headers = response.headers_mut();
                apply_security_headers(headers);
                headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
                response
            }
        }
    }
}
