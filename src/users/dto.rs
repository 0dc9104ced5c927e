use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Request body for `POST /api/users`.
///
/// Required fields are `Option` at the serde layer so a missing field reaches
/// the validation pipeline and gets its literal error message instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
}

/// Public representation of a created user. The password hash never leaves
/// the repo layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub nickname: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            full_name: user.full_name,
            nickname: user.nickname.unwrap_or_default(),
            date_created: user.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_user(nickname: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            user_name: "test user_name".to_string(),
            full_name: "test full_name".to_string(),
            nickname: nickname.map(str::to_string),
            password: "$argon2id$v=19$m=19456,t=2,p=1$not-a-real-hash".to_string(),
            date_created: datetime!(2024-01-15 09:30 UTC),
        }
    }

    #[test]
    fn response_never_contains_the_password() {
        let json = serde_json::to_value(UserResponse::from(sample_user(Some("nick")))).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["user_name"], "test user_name");
        assert_eq!(json["full_name"], "test full_name");
        assert_eq!(json["nickname"], "nick");
    }

    #[test]
    fn absent_nickname_serializes_as_empty_string() {
        let json = serde_json::to_value(UserResponse::from(sample_user(None))).unwrap();
        assert_eq!(json["nickname"], "");
        assert_eq!(json["date_created"], "2024-01-15T09:30:00Z");
    }
}
