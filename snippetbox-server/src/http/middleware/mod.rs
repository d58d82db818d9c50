//! Standard interceptors installed by [`PipelineBuilder`](super::pipeline::PipelineBuilder)

pub mod headers;
pub mod logging;
pub mod recovery;

pub use headers::{apply_security_headers, SecurityHeaders, SECURITY_HEADERS};
pub use logging::{RequestLine, RequestLogging};
pub use recovery::{PanicFault, Recovery};
