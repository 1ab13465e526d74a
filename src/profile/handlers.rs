use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{jwt::AuthUser, repo::User},
    error::ApiError,
    profile::dto::{ProfileResponse, UpdateProfileRequest},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).patch(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    // A valid token for a deleted user is the only way to miss here.
    let user = User::find_by_id(&state.db, identity.id)
        .await?
        .ok_or(ApiError::NotFound("User not found."))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name must not be empty.".into()));
        }
    }

    let user = User::update_profile(
        &state.db,
        identity.id,
        payload.name.as_deref(),
        payload.national_id.as_deref(),
        payload.birth_date,
    )
    .await?;
    Ok(Json(user.into()))
}
