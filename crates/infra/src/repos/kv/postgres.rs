use super::IKVRepo;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::time::Duration;
use tracing::error;

/// Stores entries in the `key_values` table. Several stores share the
/// table, each one scoped to its own namespace.
pub struct PostgresKVRepo {
    pool: PgPool,
    namespace: String,
}

impl PostgresKVRepo {
    pub fn new(pool: PgPool, namespace: &str) -> Self {
        Self {
            pool,
            namespace: namespace.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IKVRepo for PostgresKVRepo {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT value FROM key_values
            WHERE namespace = $1 AND key = $2
            AND (expires_at IS NULL OR expires_at > now())
            "#,
        )
        .bind(&self.namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find key: {} in namespace: {} failed. DB returned error: {:?}",
                key, self.namespace, e
            );
            e
        })?;

        match row {
            Some(row) => Ok(Some(row.try_get::<String, _>("value")?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> anyhow::Result<()> {
        let expires_at: Option<DateTime<Utc>> = match ttl {
            Some(ttl) => Some(Utc::now() + chrono::Duration::from_std(ttl)?),
            None => None,
        };
        sqlx::query(
            r#"
            INSERT INTO key_values(namespace, key, value, expires_at)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (namespace, key) DO UPDATE
            SET value = EXCLUDED.value,
            expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(&self.namespace)
        .bind(key)
        .bind(value)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save key: {} in namespace: {}. DB returned error: {:?}",
                key, self.namespace, e
            );
            e
        })?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM key_values
            WHERE namespace = $1 AND key = $2
            "#,
        )
        .bind(&self.namespace)
        .bind(key)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to delete key: {} in namespace: {}. DB returned error: {:?}",
                key, self.namespace, e
            );
            e
        })?;
        Ok(())
    }
}
