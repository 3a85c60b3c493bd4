//! User persistence: the `UserStore` contract and its SQLite implementation.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::migration::{apply_migrations, TABLES};
use crate::model::{NewUser, User, USERS};
use crate::sql;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// CRUD over the users table. Handlers only ever see this trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn get(&self, id: i64) -> Result<User, AppError>;
    /// Insert and return the stored row with its assigned id.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    /// Overwrite every field of an existing row. Never inserts.
    async fn replace(&self, id: i64, user: NewUser) -> Result<User, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteUserStore { pool }
    }

    /// Open the database file (created if missing) and ensure the schema exists.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opts)
            .await?;
        apply_migrations(&pool, TABLES).await?;
        tracing::info!(url = %config.database_url, "user store ready");
        Ok(Self::new(pool))
    }

    /// Private in-memory database. A single pinned connection keeps the data alive.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        apply_migrations(&pool, TABLES).await?;
        Ok(Self::new(pool))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&sql::select_all(&USERS))
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&sql::select_by_id(&USERS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(&sql::insert(&USERS))
            .bind(user.name)
            .bind(user.email)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = created.id, "created user");
        Ok(created)
    }

    async fn replace(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(&sql::update(&USERS))
            .bind(user.name)
            .bind(user.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;
        tracing::debug!(id, "replaced user");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(&sql::delete(&USERS))
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::user_not_found(id));
        }
        tracing::debug!(id, "deleted user");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> NewUser {
        NewUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        let first = store.create(ann()).await.unwrap();
        let second = store.create(ann()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        let first = store.create(ann()).await.unwrap();
        store.delete(first.id).await.unwrap();
        let next = store.create(ann()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn replace_missing_row_does_not_insert() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        let err = store.replace(9, ann()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        let user = store.create(ann()).await.unwrap();
        store.delete(user.id).await.unwrap();
        assert!(matches!(store.delete(user.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.get(user.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn closed_pool_surfaces_database_error() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        store.close().await;
        assert!(matches!(store.list().await, Err(AppError::Db(_))));
        assert!(store.ping().await.is_err());
    }
}
