//! Extract a UUID id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// `:id` parsed as a UUID. Anything else is `AppError::BadRequest`, before any connection is taken.
#[derive(Clone, Copy, Debug)]
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let id = Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest(format!("invalid uuid: {}", raw)))?;
        Ok(IdPath(id))
    }
}
