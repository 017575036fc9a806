//! JSON body extraction with field validation
//!
//! Campaign request bodies (registration, post submissions, comments,
//! replies) carry `validator` rules on their DTOs. `ValidatedJson` runs
//! those rules right after deserialization so handlers only ever see
//! well-formed input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// A JSON body that has passed its `validator` rules
///
/// Deserialization failures answer with the API's standard 400 body; rule
/// violations surface as `VALIDATION_ERROR` with per-field details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection_message(&rejection)))?;

        body.validate()?;

        Ok(Self(body))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected Content-Type: application/json".to_string()
        }
        other => other.body_text(),
    }
}
