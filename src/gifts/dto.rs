use serde::Deserialize;

use crate::gifts::status::GiftStatus;

/// Catch-all category applied when the client sends none.
pub const DEFAULT_CATEGORY: &str = "OTHER";

/// Body for creating a gift. Status is not accepted here: every gift
/// starts AVAILABLE no matter what the client sends.
#[derive(Debug, Deserialize)]
pub struct GiftBody {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Body for the owner status endpoint.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: GiftStatus,
}
