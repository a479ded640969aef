use axum::{
    extract::{Extension, State},
    Json,
};

use crate::{
    error::AppError,
    models::{profile::Profile, user::User},
    services::authoring::normalize_labels,
    state::AppState,
    validation::validate_payload,
};

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.profile.get().await?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(mut payload): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    validate_payload(&payload)?;
    for group in &mut payload.skills {
        group.skills = normalize_labels(std::mem::take(&mut group.skills));
    }
    let profile = state.profile.replace(payload).await?;
    tracing::info!(user_id = user.id, "profile updated");
    Ok(Json(profile))
}
