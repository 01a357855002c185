//! HTTP handlers for addresses and customers.

pub mod address;
pub mod customer;

use crate::error::AppError;
use sqlx::{Postgres, Transaction};

/// Commit when `result` is Ok; otherwise roll back before the connection returns to the pool.
pub(crate) async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(v) => {
            tx.commit().await?;
            Ok(v)
        }
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                tracing::warn!(error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}
