use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User row in `thingful_users`. `password` holds the argon2 PHC string.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub nickname: Option<String>,
    pub password: String,
    pub date_created: OffsetDateTime,
}

impl User {
    /// Find a user by username.
    pub async fn find_by_user_name(
        db: &PgPool,
        user_name: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, full_name, nickname, password, date_created
            FROM thingful_users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user and return the stored row.
    pub async fn create(
        db: &PgPool,
        user_name: &str,
        full_name: &str,
        nickname: Option<&str>,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO thingful_users (user_name, full_name, nickname, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_name, full_name, nickname, password, date_created
            "#,
        )
        .bind(user_name)
        .bind(full_name)
        .bind(nickname)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        // PostgreSQL error code 23505 = unique_violation
        return db_err.code().map(|c| c == "23505").unwrap_or(false);
    }
    false
}
