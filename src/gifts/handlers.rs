use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{patch, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    authz::require_owner,
    error::ApiError,
    gifts::{
        dto::{GiftBody, SetStatusRequest, DEFAULT_CATEGORY},
        repo::Gift,
    },
    lists::repo::GiftList,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists/:list_id/gifts", post(create_gift))
        .route("/gifts/:id", put(update_gift).delete(delete_gift))
        .route("/gifts/:id/status", patch(set_status))
}

fn validate(body: &GiftBody) -> Result<(), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::Validation("Name must not be empty.".into()));
    }
    if body.price < 0.0 {
        return Err(ApiError::Validation("Price must not be negative.".into()));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_gift(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(list_id): Path<Uuid>,
    Json(payload): Json<GiftBody>,
) -> Result<(StatusCode, Json<Gift>), ApiError> {
    validate(&payload)?;

    // The target list must exist and belong to the caller before anything
    // is written under it.
    let list = GiftList::find_by_id(&state.db, list_id)
        .await?
        .ok_or(ApiError::NotFound("List not found."))?;
    require_owner(&identity, &list)?;

    let gift = Gift::create(
        &state.db,
        list_id,
        payload.name.trim(),
        payload.description.as_deref(),
        payload.price,
        payload.image_url.as_deref(),
        payload.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
    )
    .await?;

    info!(gift_id = %gift.id, list_id = %list_id, "gift created");
    Ok((StatusCode::CREATED, Json(gift)))
}

#[instrument(skip(state, payload))]
pub async fn update_gift(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<GiftBody>,
) -> Result<Json<Gift>, ApiError> {
    validate(&payload)?;

    let found = Gift::find_with_owner(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Gift not found."))?;
    require_owner(&identity, &found)?;

    let gift = Gift::update(
        &state.db,
        id,
        payload.name.trim(),
        payload.description.as_deref(),
        payload.price,
        payload.image_url.as_deref(),
        payload.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
    )
    .await?;
    Ok(Json(gift))
}

#[instrument(skip(state))]
pub async fn delete_gift(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = Gift::find_with_owner(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Gift not found."))?;
    require_owner(&identity, &found)?;

    Gift::delete(&state.db, id).await?;
    info!(gift_id = %id, "gift deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Owner-side status change. Deliberately unconstrained: the authorization
/// layer gates who, not which transition, so an owner can reset a
/// purchased gift back to AVAILABLE.
#[instrument(skip(state, payload))]
pub async fn set_status(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusRequest>,
) -> Result<Json<Gift>, ApiError> {
    let found = Gift::find_with_owner(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Gift not found."))?;
    require_owner(&identity, &found)?;

    let gift = Gift::set_status(&state.db, id, payload.status).await?;
    info!(gift_id = %id, status = ?gift.status, "gift status set by owner");
    Ok(Json(gift))
}
