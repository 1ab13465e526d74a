use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::authz::Owned;
use crate::gifts::status::GiftStatus;

/// Gift record. Carries no owner field; ownership always goes through the
/// list it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Gift {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: String,
    pub status: GiftStatus,
    pub created_at: OffsetDateTime,
}

/// Gift joined with the owning list's owner, so an ownership check never
/// needs a second query.
#[derive(Debug, Clone, FromRow)]
pub struct GiftWithOwner {
    #[sqlx(flatten)]
    pub gift: Gift,
    pub list_owner_id: Uuid,
}

impl Owned for GiftWithOwner {
    fn owner_id(&self) -> Uuid {
        self.list_owner_id
    }
}

impl Gift {
    pub async fn list_by_list(db: &PgPool, list_id: Uuid) -> anyhow::Result<Vec<Gift>> {
        let rows = sqlx::query_as::<_, Gift>(
            r#"
            SELECT id, list_id, name, description, price, image_url, category, status, created_at
            FROM gifts
            WHERE list_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Gift>> {
        let gift = sqlx::query_as::<_, Gift>(
            r#"
            SELECT id, list_id, name, description, price, image_url, category, status, created_at
            FROM gifts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(gift)
    }

    /// Fetch a gift together with its list's owner.
    pub async fn find_with_owner(db: &PgPool, id: Uuid) -> anyhow::Result<Option<GiftWithOwner>> {
        let row = sqlx::query_as::<_, GiftWithOwner>(
            r#"
            SELECT g.id, g.list_id, g.name, g.description, g.price, g.image_url,
                   g.category, g.status, g.created_at,
                   l.user_id AS list_owner_id
            FROM gifts g
            JOIN gift_lists l ON l.id = g.list_id
            WHERE g.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// New gifts always start AVAILABLE; the column default is the only
    /// place the initial status comes from.
    pub async fn create(
        db: &PgPool,
        list_id: Uuid,
        name: &str,
        description: Option<&str>,
        price: f64,
        image_url: Option<&str>,
        category: &str,
    ) -> anyhow::Result<Gift> {
        let gift = sqlx::query_as::<_, Gift>(
            r#"
            INSERT INTO gifts (list_id, name, description, price, image_url, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, list_id, name, description, price, image_url, category, status, created_at
            "#,
        )
        .bind(list_id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category)
        .fetch_one(db)
        .await?;
        Ok(gift)
    }

    /// Full replace of the editable fields (PUT semantics); status is not
    /// touched here.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        price: f64,
        image_url: Option<&str>,
        category: &str,
    ) -> anyhow::Result<Gift> {
        let gift = sqlx::query_as::<_, Gift>(
            r#"
            UPDATE gifts
            SET name = $2, description = $3, price = $4, image_url = $5, category = $6
            WHERE id = $1
            RETURNING id, list_id, name, description, price, image_url, category, status, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category)
        .fetch_one(db)
        .await?;
        Ok(gift)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM gifts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Owner-side status write; the ownership check has already gated who
    /// gets here, and the owner may move between any two states.
    pub async fn set_status(db: &PgPool, id: Uuid, status: GiftStatus) -> anyhow::Result<Gift> {
        let gift = sqlx::query_as::<_, Gift>(
            r#"
            UPDATE gifts
            SET status = $2
            WHERE id = $1
            RETURNING id, list_id, name, description, price, image_url, category, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(db)
        .await?;
        Ok(gift)
    }

    /// Guest-purchase compare-and-swap. The WHERE clause carries the whole
    /// concurrency contract: of two concurrent guests, only one update can
    /// observe AVAILABLE, so at most one returns affected rows.
    pub async fn purchase_if_available(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE gifts
            SET status = 'PURCHASED'
            WHERE id = $1 AND status = 'AVAILABLE'
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ownership of a gift is a property of the joined list owner, never of
    // anything stored on the gift row itself.
    #[test]
    fn gift_ownership_comes_from_the_list_owner() {
        let list_owner = Uuid::new_v4();
        let row = GiftWithOwner {
            gift: Gift {
                id: Uuid::new_v4(),
                list_id: Uuid::new_v4(),
                name: "Blender".into(),
                description: None,
                price: 50.0,
                image_url: None,
                category: "OTHER".into(),
                status: GiftStatus::Available,
                created_at: OffsetDateTime::now_utc(),
            },
            list_owner_id: list_owner,
        };
        assert_eq!(row.owner_id(), list_owner);
    }
}
