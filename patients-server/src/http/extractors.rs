//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::NewPatient;

/// Extract and validate a create-patient body
///
/// Parses the body as JSON first (malformed input is rejected before any
/// field is inspected), then builds a fully populated [`NewPatient`].
pub struct ValidPatient(pub NewPatient);

impl<S> FromRequest<S> for ValidPatient
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        let patient = NewPatient::from_json(&body)?;
        Ok(Self(patient))
    }
}
