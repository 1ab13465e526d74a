use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    gifts::{repo::Gift, status::GiftStatus},
    public::{dto::PublicListView, repo::PublicList},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/public/lists/:slug", get(get_public_list))
        .route("/public/gifts/:id/purchase", patch(purchase_gift))
}

/// The slug is the sharing capability: whoever holds it may view the list.
/// No identity, no authorization.
#[instrument(skip(state))]
pub async fn get_public_list(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PublicListView>, ApiError> {
    let row = PublicList::find_by_slug(&state.db, &slug)
        .await?
        .ok_or(ApiError::NotFound("List not found."))?;

    let gifts = Gift::list_by_list(&state.db, row.list.id).await?;
    Ok(Json(PublicListView::new(row, gifts)))
}

/// Guest purchase: the only identity-free write in the system. The
/// conditional update in the repo decides the race; a miss is classified
/// afterwards as 404 or 400.
#[instrument(skip(state))]
pub async fn purchase_gift(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if Gift::purchase_if_available(&state.db, id).await? {
        info!(gift_id = %id, "gift purchased by guest");
        return Ok(Json(json!({ "message": "Gift marked as purchased." })));
    }

    let observed = Gift::find_by_id(&state.db, id).await?.map(|g| g.status);
    classify_lost_purchase(observed)?;

    // Observed AVAILABLE after all: the owner moved the status back
    // between our update and the re-fetch. One more attempt settles it.
    if Gift::purchase_if_available(&state.db, id).await? {
        info!(gift_id = %id, "gift purchased by guest");
        return Ok(Json(json!({ "message": "Gift marked as purchased." })));
    }
    Err(ApiError::InvalidTransition("Gift is not available."))
}

/// Verdict on a conditional update that matched no row, from the
/// re-fetched status: an absent gift is a 404, RESERVED/PURCHASED is the
/// state machine's refusal, and AVAILABLE returns Ok to request a retry.
fn classify_lost_purchase(observed: Option<GiftStatus>) -> Result<(), ApiError> {
    match observed {
        None => Err(ApiError::NotFound("Gift not found.")),
        Some(status) => status.guest_purchase().map(|_| ()),
    }
}
