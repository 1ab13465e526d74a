use sqlx::{FromRow, PgPool};

use crate::lists::repo::GiftList;

/// List joined with the owner's display name. Nothing else about the
/// owner crosses the public boundary.
#[derive(Debug, Clone, FromRow)]
pub struct PublicList {
    #[sqlx(flatten)]
    pub list: GiftList,
    pub owner_name: String,
}

impl PublicList {
    pub async fn find_by_slug(db: &PgPool, slug: &str) -> anyhow::Result<Option<PublicList>> {
        let row = sqlx::query_as::<_, PublicList>(
            r#"
            SELECT l.id, l.user_id, l.title, l.description, l.slug,
                   l.event_date, l.event_type, l.is_private, l.created_at,
                   u.name AS owner_name
            FROM gift_lists l
            JOIN users u ON u.id = l.user_id
            WHERE l.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
