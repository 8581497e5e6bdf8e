use async_trait::async_trait;
use secrecy::SecretString;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::ports::ApplicationProvider;

pub struct SqliteApplicationRepository {
    pool: SqlitePool,
}

impl SqliteApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Identifiers of provisioned applications that have no signing secret.
    ///
    /// Tokens cannot be minted for these, so the service refuses to start while any exist.
    pub async fn find_without_secret(&self) -> Result<Vec<AppId>, StorageError> {
        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM apps
            WHERE length(secret) = 0
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(ids.into_iter().map(AppId).collect())
    }
}

#[derive(FromRow)]
struct ApplicationRow {
    id: i32,
    secret: String,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: AppId(row.id),
            secret: SecretString::new(row.secret),
        }
    }
}

#[async_trait]
impl ApplicationProvider for SqliteApplicationRepository {
    async fn find_by_id(&self, app_id: AppId) -> Result<Option<Application>, StorageError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, secret
            FROM apps
            WHERE id = ?
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(row.map(Application::from))
    }
}
