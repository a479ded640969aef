use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppError,
    models::search::{SearchQuery, SearchResult},
    services::search::search_content,
    state::AppState,
};

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let term = query.q.unwrap_or_default();
    let posts = state.posts.find_all().await?;
    let projects = state.projects.find_all().await?;
    let results = search_content(&posts, &projects, &term);
    tracing::debug!(term = %term, hits = results.len(), "search");
    Ok(Json(results))
}
