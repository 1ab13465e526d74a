use uuid::Uuid;

use crate::auth::jwt::Identity;
use crate::error::ApiError;

/// A resource whose mutation rights trace back to a single user.
///
/// Lists carry their owner directly; gifts derive it from the list they
/// belong to and never carry an owner field of their own.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// ALLOW iff the requesting identity owns the resource.
///
/// Callers must resolve existence first (404 before 403): this function is
/// only reached with a resource in hand, and its DENY carries a generic
/// message that does not describe the resource.
pub fn require_owner<R: Owned>(identity: &Identity, resource: &R) -> Result<(), ApiError> {
    if resource.owner_id() == identity.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    struct Res {
        owner: Uuid,
    }

    impl Owned for Res {
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    fn identity(id: Uuid) -> Identity {
        Identity {
            id,
            name: "Alice".into(),
        }
    }

    #[test]
    fn owner_is_allowed() {
        let user = Uuid::new_v4();
        let res = Res { owner: user };
        assert!(require_owner(&identity(user), &res).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let res = Res { owner: Uuid::new_v4() };
        let err = require_owner(&identity(Uuid::new_v4()), &res).unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn deny_message_reveals_nothing() {
        let res = Res { owner: Uuid::new_v4() };
        let err = require_owner(&identity(Uuid::new_v4()), &res).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized.");
    }
}
