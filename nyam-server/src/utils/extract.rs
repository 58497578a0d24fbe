//! Request extractors
//!
//! [`AppJson`] wraps axum's `Json` so that a missing, malformed or
//! wrongly-typed body is reported as a 400 validation error in the
//! standard response envelope instead of axum's default rejection.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::utils::AppError;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            ))),
        }
    }
}
