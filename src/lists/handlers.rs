use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    authz::require_owner,
    error::{is_unique_violation, ApiError},
    gifts::repo::Gift,
    lists::{
        dto::{CreateListRequest, ListDetails, UpdateListRequest},
        repo::{GiftList, GiftListSummary},
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route(
            "/lists/:id",
            get(get_list).patch(update_list).delete(delete_list),
        )
}

#[instrument(skip(state))]
pub async fn list_lists(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<GiftListSummary>>, ApiError> {
    let lists = GiftList::list_by_owner(&state.db, identity.id).await?;
    Ok(Json(lists))
}

#[instrument(skip(state, payload))]
pub async fn create_list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<GiftList>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty.".into()));
    }
    if payload.slug.trim().is_empty() {
        return Err(ApiError::Validation("Slug must not be empty.".into()));
    }

    let list = GiftList::create(
        &state.db,
        identity.id,
        payload.title.trim(),
        payload.description.as_deref(),
        payload.slug.trim(),
        payload.event_date,
        payload.event_type.as_deref(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            warn!(slug = %payload.slug, "duplicate slug");
            ApiError::Conflict("Slug already exists.")
        } else {
            e.into()
        }
    })?;

    info!(list_id = %list.id, slug = %list.slug, "list created");
    Ok((StatusCode::CREATED, Json(list)))
}

#[instrument(skip(state))]
pub async fn get_list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ListDetails>, ApiError> {
    let list = GiftList::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("List not found."))?;
    require_owner(&identity, &list)?;

    let gifts = Gift::list_by_list(&state.db, list.id).await?;
    Ok(Json(ListDetails { list, gifts }))
}

#[instrument(skip(state, payload))]
pub async fn update_list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateListRequest>,
) -> Result<Json<GiftList>, ApiError> {
    let list = GiftList::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("List not found."))?;
    require_owner(&identity, &list)?;

    let updated = GiftList::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.is_private,
        payload.event_date,
        payload.event_type.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let list = GiftList::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("List not found."))?;
    require_owner(&identity, &list)?;

    GiftList::delete(&state.db, id).await?;
    info!(list_id = %id, "list deleted");
    Ok(StatusCode::NO_CONTENT)
}
