use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, format_validation_errors};
use validator::Validate;

/// Deserializes the JSON body and runs its `Validate` impl before the
/// handler sees it; either failure maps to the 400 validation response.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppErrorHttp(ServiceError::Validation(vec![e.body_text()])))?;

        value.validate().map_err(|e| {
            AppErrorHttp(ServiceError::Validation(vec![format_validation_errors(&e)]))
        })?;

        Ok(Self(value))
    }
}
