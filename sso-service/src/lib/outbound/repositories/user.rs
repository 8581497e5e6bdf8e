use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            email: row.email,
            password_hash: row.pass_hash,
        }
    }
}

#[async_trait]
impl UserSaver for SqliteUserRepository {
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES (?, ?)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StorageError::UserAlreadyExists;
                }
            }
            StorageError::Database(e.to_string())
        })?;

        Ok(UserId(result.last_insert_rowid()))
    }
}

#[async_trait]
impl UserProvider for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn is_admin(&self, user_id: UserId) -> Result<Option<bool>, StorageError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))
    }
}
