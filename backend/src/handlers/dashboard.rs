use axum::{extract::State, Json};

use crate::{
    error::AppError, models::dashboard::DashboardStats, services::dashboard::build_stats,
    state::AppState,
};

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let posts = state.posts.find_all().await?;
    let projects = state.projects.find_all().await?;
    Ok(Json(build_stats(posts, projects)))
}
