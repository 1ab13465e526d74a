use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::auth::repo::User;

/// Patch body for the profile; email and password are not editable here.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub birth_date: Option<Date>,
}

/// Profile as returned to its own user.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub national_id: Option<String>,
    pub birth_date: Option<Date>,
    pub created_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            national_id: u.national_id,
            birth_date: u.birth_date,
            created_at: u.created_at,
        }
    }
}
