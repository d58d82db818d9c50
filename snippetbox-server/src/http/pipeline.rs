//! Request pipeline: an ordered list of interceptors around the router
//!
//! The order is fixed by [`PipelineBuilder`], outermost first:
//!
//! 1. [`Recovery`] - turns a panic anywhere inside into a 500
//! 2. [`RequestLogging`] - one structured line per request
//! 3. [`SecurityHeaders`] - fixed response headers
//! 4. the optional session interceptor, innermost
//!
//! The whole chain is installed as a single axum middleware, so ordering is
//! visible in one place instead of in the nesting of `.layer()` calls.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::middleware;
use axum::response::Response;
use axum::Router;

use super::middleware::{Recovery, RequestLogging, SecurityHeaders};

/// A request-processing stage.
///
/// Implementations either call `next.run(req)` exactly once and return (a
/// possibly modified version of) its response, or short-circuit with their
/// own response.
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    /// Short name, used in logs and to inspect chain order.
    fn name(&self) -> &'static str;

    async fn handle(&self, req: Request, next: Next) -> Response;
}

/// The rest of the chain after the current interceptor.
pub struct Next {
    chain: Arc<[Arc<dyn Interceptor>]>,
    position: usize,
    endpoint: middleware::Next,
}

impl Next {
    /// Run the remaining interceptors, then the router.
    pub async fn run(self, req: Request) -> Response {
        let Some(interceptor) = self.chain.get(self.position).cloned() else {
            return self.endpoint.run(req).await;
        };

        let next = Next {
            position: self.position + 1,
            ..self
        };
        interceptor.handle(req, next).await
    }
}

/// An ordered, immutable interceptor chain.
#[derive(Clone)]
pub struct Pipeline {
    chain: Arc<[Arc<dyn Interceptor>]>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Interceptor names, outermost first.
    pub fn names(&self) -> Vec<&'static str> {
        self.chain.iter().map(|i| i.name()).collect()
    }

    /// Wrap every route of `router` in the chain.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self.clone(), dispatch))
    }
}

async fn dispatch(
    State(pipeline): State<Pipeline>,
    req: Request,
    endpoint: middleware::Next,
) -> Response {
    Next {
        chain: pipeline.chain,
        position: 0,
        endpoint,
    }
    .run(req)
    .await
}

/// Builds a [`Pipeline`] with the standard interceptors in their fixed order.
#[derive(Default)]
pub struct PipelineBuilder {
    session: Option<Arc<dyn Interceptor>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session-management interceptor.
    ///
    /// It always sits innermost, directly around the router; the standard
    /// interceptors keep their positions.
    pub fn with_session<I: Interceptor>(mut self, session: I) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    pub fn build(self) -> Pipeline {
        let mut chain: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(Recovery),
            Arc::new(RequestLogging),
            Arc::new(SecurityHeaders),
        ];
        chain.extend(self.session);

        Pipeline {
            chain: chain.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{HeaderValue, StatusCode};
    use axum::routing::get;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Records the order in which interceptors see the request.
    struct Recorder {
        name: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Interceptor for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn handle(&self, req: Request, next: Next) -> Response {
            self.seen.lock().unwrap().push(self.name);
            let mut response = next.run(req).await;
            response
                .headers_mut()
                .insert("x-session", HeaderValue::from_static("loaded"));
            response
        }
    }

    #[test]
    fn standard_order_is_fixed() {
        let pipeline = Pipeline::builder().build();
        assert_eq!(
            pipeline.names(),
            vec!["recovery", "request_logging", "security_headers"]
        );
    }

    #[test]
    fn session_sits_innermost() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = PipelineBuilder::new()
            .with_session(Recorder {
                name: "session",
                seen,
            })
            .build();

        assert_eq!(
            pipeline.names(),
            vec!["recovery", "request_logging", "security_headers", "session"]
        );
    }

    #[tokio::test]
    async fn session_runs_around_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::builder()
            .with_session(Recorder {
                name: "session",
                seen: Arc::clone(&seen),
            })
            .build();

        let app = pipeline.apply(Router::new().route("/", get(|| async { "ok" })));
        let response = app
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-session"], "loaded");
        assert_eq!(response.headers()["x-frame-options"], "deny");
        assert_eq!(*seen.lock().unwrap(), vec!["session"]);
    }
}
