use crate::errors::{
    errors::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Validation(errors) => {
                let error_msg = format!("Validation failed: {}", errors.join("; "));
                (StatusCode::BAD_REQUEST, error_msg)
            }

            err @ ServiceError::InvalidExpirationDate => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            err @ ServiceError::AlreadyRegistered(_) => (StatusCode::BAD_REQUEST, err.to_string()),

            err @ ServiceError::InsufficientBalance(_) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::AlreadyExists(msg) => (StatusCode::BAD_REQUEST, msg),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn status_of(err: ServiceError) -> StatusCode {
        AppErrorHttp(err).into_response().status()
    }

    #[test]
    fn domain_errors_map_to_client_status_codes() {
        assert_eq!(
            status_of(ServiceError::AlreadyRegistered("Tesouro".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::InvalidExpirationDate),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::InsufficientBalance(Decimal::from(100))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::NotFound(
                "Investment with id 1 not found.".into()
            )),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::Validation(vec!["name: invalid length".into()])),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn repository_errors_map_through() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Investment with name Tesouro already registered in the system.".into()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
