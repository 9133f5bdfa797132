use crate::core::error::DirectoryError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON request body whose rejections render as `DirectoryError`
///
/// Keeps the status axum picks (400 syntax, 415 content type, 422 data).
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DirectoryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| DirectoryError::InvalidBody {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(JsonBody(data))
    }
}
