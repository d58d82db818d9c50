//! Snippet endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::Snippet;
use crate::http::error::ApiError;
use crate::http::extractors::SnippetId;
use crate::models::NewSnippet;
use crate::state::AppState;

/// Create snippet request
#[derive(Deserialize)]
pub struct CreateSnippetRequest {
    pub title: String,
    pub content: String,
    /// Lifetime in days: 1, 7 or 365
    pub expires: i32,
}

/// Created snippet response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// Snippet response
#[derive(Serialize)]
pub struct SnippetResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created: String,
    pub expires: String,
}

impl From<Snippet> for SnippetResponse {
    fn from(s: Snippet) -> Self {
        Self {
            id: s.id,
            title: s.title,
            content: s.content,
            created: s.created.to_rfc3339(),
            expires: s.expires.to_rfc3339(),
        }
    }
}

/// GET / - latest live snippets, newest first
async fn home(State(state): State<AppState>) -> Result<Json<Vec<SnippetResponse>>, ApiError> {
    let snippets = state.snippets().latest().await?;
    Ok(Json(snippets.into_iter().map(SnippetResponse::from).collect()))
}

/// GET /snippet/view/{id} - a single live snippet
async fn view(
    State(state): State<AppState>,
    SnippetId(id): SnippetId,
) -> Result<Json<SnippetResponse>, ApiError> {
    let snippet = state.snippets().get(id).await?;
    Ok(Json(SnippetResponse::from(snippet)))
}

/// POST /snippet/create - validate and store a new snippet
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateSnippetRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedResponse>), ApiError> {
    let form = NewSnippet::new(&req.title, &req.content, req.expires)?;

    let id = state
        .snippets()
        .insert(form.title.as_str(), form.content.as_str(), form.expires.days())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/snippet/view/{}", id))],
        Json(CreatedResponse { id }),
    ))
}

/// Snippet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/snippet/view/{id}", get(view))
        .route("/snippet/create", post(create))
}
