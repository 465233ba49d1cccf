//! Extractors that report every rejection as a JSON `400 Bad Request`.
//!
//! `axum::Json` answers 415 for a missing content type and 422 for
//! well-formed JSON of the wrong shape, and `axum::extract::Path` answers in
//! plain text; clients of these services only distinguish "bad request" from
//! success.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use echopay_types::AppError;

use super::handlers::ApiError;

/// Request body decoded as JSON, regardless of `Content-Type`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedRequest(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

        Ok(ApiJson(value))
    }
}

/// Path parameters, with undecodable segments reported as `InvalidPath`.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidPath(e.body_text()))?;

        Ok(ApiPath(value))
    }
}
