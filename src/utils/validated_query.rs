use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::app_error::AppError;

/// Query string extractor that runs `validator` rules before the handler.
///
/// The first rule message found becomes the alert shown to the user.
pub struct ValidatedQuery<T>(pub T);

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Invalid query: {}", errors))
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request(req, state)
            .await
            .map_err(|e| match e.source() {
                Some(source) => AppError::new(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid query: {}", source).as_str(),
                ),
                None => AppError::new(StatusCode::BAD_REQUEST, e.body_text().as_str()),
            })?;

        data.validate()
            .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &first_message(&e)))?;

        Ok(ValidatedQuery(data))
    }
}
