//! Request-scoped transactions
//!
//! `with_transaction` commits when the body returns `Ok` and rolls back
//! when it returns `Err`. If the body panics or the request future is
//! dropped, the `sqlx::Transaction` drop guard rolls back and returns the
//! connection to the pool.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use super::DbError;

/// Run `body` inside a transaction on a pooled connection.
///
/// # Example
///
/// ```ignore
/// let id = with_transaction(&pool, move |conn| {
///     Box::pin(async move {
///         let (id,): (i32,) = sqlx::query_as("INSERT INTO artist (...) RETURNING id")
///             .fetch_one(&mut *conn)
///             .await?;
///         Ok(id)
///     })
/// })
/// .await?;
/// ```
pub async fn with_transaction<T, F>(pool: &PgPool, body: F) -> Result<T, DbError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, DbError>> + Send,
{
    let mut tx = pool.begin().await?;

    match body(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url).await.expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn commits_on_ok() {
        let pool = pool().await;
        sqlx::query("CREATE TABLE IF NOT EXISTS tx_probe_commit (v INTEGER)")
            .execute(&pool)
            .await
            .unwrap();

        with_transaction(&pool, |conn| {
            Box::pin(async move {
                sqlx::query("INSERT INTO tx_probe_commit (v) VALUES (1)")
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .await
        .unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tx_probe_commit")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(count >= 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rolls_back_on_err() {
        let pool = pool().await;
        let marker = i32::MAX - 7;
        sqlx::query("CREATE TABLE IF NOT EXISTS tx_probe_rollback (v INTEGER)")
            .execute(&pool)
            .await
            .unwrap();

        let result: Result<(), DbError> = with_transaction(&pool, move |conn| {
            Box::pin(async move {
                sqlx::query("INSERT INTO tx_probe_rollback (v) VALUES ($1)")
                    .bind(marker)
                    .execute(&mut *conn)
                    .await?;
                Err(DbError::not_found("probe", marker))
            })
        })
        .await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM tx_probe_rollback WHERE v = $1")
                .bind(marker)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 0);
    }
}
