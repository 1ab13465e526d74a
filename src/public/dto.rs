use serde::Serialize;
use time::Date;

use crate::gifts::repo::Gift;
use crate::public::repo::PublicList;

/// The identity-free view of a shared list. Picks fields explicitly so the
/// owner's id and email can never leak through serialization; the owner
/// appears as a display name only. Gifts are returned in full, including
/// already-purchased ones.
#[derive(Debug, Serialize)]
pub struct PublicListView {
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub event_date: Option<Date>,
    pub event_type: Option<String>,
    pub owner_name: String,
    pub gifts: Vec<Gift>,
}

impl PublicListView {
    pub fn new(row: PublicList, gifts: Vec<Gift>) -> Self {
        Self {
            title: row.list.title,
            description: row.list.description,
            slug: row.list.slug,
            event_date: row.list.event_date,
            event_type: row.list.event_type,
            owner_name: row.owner_name,
            gifts,
        }
    }
}
