use serde::{Deserialize, Serialize};
use time::Date;

use crate::gifts::repo::Gift;
use crate::lists::repo::GiftList;

/// Request body for creating a list.
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub event_date: Option<Date>,
    pub event_type: Option<String>,
}

/// Patch body for updating a list; every field optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
    pub event_date: Option<Date>,
    pub event_type: Option<String>,
}

/// One list with all its gifts, for the owner's detail view.
#[derive(Debug, Serialize)]
pub struct ListDetails {
    #[serde(flatten)]
    pub list: GiftList,
    pub gifts: Vec<Gift>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_fields_are_all_optional() {
        let patch: UpdateListRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none());
        assert!(patch.is_private.is_none());
        assert!(patch.event_date.is_none());
    }

    #[test]
    fn create_body_requires_title_and_slug() {
        let err = serde_json::from_str::<CreateListRequest>(r#"{"title":"Wedding"}"#);
        assert!(err.is_err());
        let ok: CreateListRequest =
            serde_json::from_str(r#"{"title":"Wedding","slug":"wedding-2025"}"#).unwrap();
        assert_eq!(ok.slug, "wedding-2025");
        assert!(ok.event_date.is_none());
    }
}
