//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a snippet id from the path.
///
/// Anything that is not a positive integer is treated as a missing snippet,
/// so `/snippet/view/abc` and `/snippet/view/-1` are both 404s.
pub struct SnippetId(pub i32);

impl<S> FromRequestParts<S> for SnippetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(""))?;

        match raw.parse::<i32>() {
            Ok(id) if id >= 1 => Ok(Self(id)),
            _ => Err(not_found(&raw)),
        }
    }
}

fn not_found(raw: &str) -> ApiError {
    ApiError::NotFound {
        resource: "snippet",
        id: raw.to_owned(),
    }
}
