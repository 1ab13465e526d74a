use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::authz::Owned;

/// Gift list record. `user_id` is the owner and never changes after
/// creation; every gift in the list derives its ownership from it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GiftList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub event_date: Option<Date>,
    pub event_type: Option<String>,
    pub is_private: bool,
    pub created_at: OffsetDateTime,
}

impl Owned for GiftList {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// List row joined with its gift count, for the overview endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GiftListSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub list: GiftList,
    pub gift_count: i64,
}

impl GiftList {
    /// All lists of one owner, newest first, each with its gift count.
    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<GiftListSummary>> {
        let rows = sqlx::query_as::<_, GiftListSummary>(
            r#"
            SELECT l.id, l.user_id, l.title, l.description, l.slug,
                   l.event_date, l.event_type, l.is_private, l.created_at,
                   COUNT(g.id) AS gift_count
            FROM gift_lists l
            LEFT JOIN gifts g ON g.list_id = l.id
            WHERE l.user_id = $1
            GROUP BY l.id
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<GiftList>> {
        let list = sqlx::query_as::<_, GiftList>(
            r#"
            SELECT id, user_id, title, description, slug, event_date, event_type,
                   is_private, created_at
            FROM gift_lists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(list)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        slug: &str,
        event_date: Option<Date>,
        event_type: Option<&str>,
    ) -> Result<GiftList, sqlx::Error> {
        sqlx::query_as::<_, GiftList>(
            r#"
            INSERT INTO gift_lists (user_id, title, description, slug, event_date, event_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, description, slug, event_date, event_type,
                      is_private, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(slug)
        .bind(event_date)
        .bind(event_type)
        .fetch_one(db)
        .await
    }

    /// Patch update; absent fields keep their current value. The owner and
    /// the slug are deliberately not updatable.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        is_private: Option<bool>,
        event_date: Option<Date>,
        event_type: Option<&str>,
    ) -> anyhow::Result<GiftList> {
        let list = sqlx::query_as::<_, GiftList>(
            r#"
            UPDATE gift_lists
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                is_private = COALESCE($4, is_private),
                event_date = COALESCE($5, event_date),
                event_type = COALESCE($6, event_type)
            WHERE id = $1
            RETURNING id, user_id, title, description, slug, event_date, event_type,
                      is_private, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(is_private)
        .bind(event_date)
        .bind(event_type)
        .fetch_one(db)
        .await?;
        Ok(list)
    }

    /// Deletes the list; gifts go with it via the FK cascade.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM gift_lists WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
