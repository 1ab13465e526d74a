use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Purchase status of a gift.
///
/// `AVAILABLE -> RESERVED -> PURCHASED`, with `PURCHASED` also reachable
/// directly from `AVAILABLE`. Owners set the status freely through the
/// authenticated endpoint (including resetting a purchased gift); guests
/// only ever move `AVAILABLE -> PURCHASED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "gift_status", rename_all = "UPPERCASE")]
pub enum GiftStatus {
    Available,
    Reserved,
    Purchased,
}

impl GiftStatus {
    /// The one transition a guest may trigger. Not idempotent: a second
    /// attempt on the same gift fails.
    pub fn guest_purchase(self) -> Result<GiftStatus, ApiError> {
        match self {
            GiftStatus::Available => Ok(GiftStatus::Purchased),
            GiftStatus::Reserved | GiftStatus::Purchased => {
                Err(ApiError::InvalidTransition("Gift is not available."))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn guest_purchase_succeeds_only_from_available() {
        assert_eq!(
            GiftStatus::Available.guest_purchase().unwrap(),
            GiftStatus::Purchased
        );
        assert!(GiftStatus::Reserved.guest_purchase().is_err());
        assert!(GiftStatus::Purchased.guest_purchase().is_err());
    }

    #[test]
    fn guest_purchase_is_not_idempotent() {
        let after = GiftStatus::Available.guest_purchase().unwrap();
        let err = after.guest_purchase().unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Gift is not available.");
    }

    #[test]
    fn serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&GiftStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
        assert_eq!(
            serde_json::from_str::<GiftStatus>("\"PURCHASED\"").unwrap(),
            GiftStatus::Purchased
        );
        assert!(serde_json::from_str::<GiftStatus>("\"purchased\"").is_err());
    }
}
