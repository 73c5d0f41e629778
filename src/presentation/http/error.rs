use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::use_cases::ActionError;

/// API-surface error. Everything a handler can fail with collapses into
/// one of these; the body is always `{"error": {"code", "message"}}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Internal => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": { "code": self.code(), "message": self.to_string() }
        }));
        (self.status(), body).into_response()
    }
}

/// Database-error translation. Constraint violations carry meaning the
/// client can act on; anything else is logged and hidden behind a 500.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // unique_violation
                Some("23505") => ApiError::Conflict("resource already exists".into()),
                // foreign_key_violation: the referenced row does not exist
                Some("23503") => ApiError::NotFound,
                _ => {
                    tracing::error!(error = ?err, "database_error");
                    ApiError::Internal
                }
            },
            _ => {
                tracing::error!(error = ?err, "database_error");
                ApiError::Internal
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<sqlx::Error>() {
            Ok(db) => ApiError::from(db),
            Err(other) => {
                tracing::error!(error = ?other, "unhandled_error");
                ApiError::Internal
            }
        }
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::NotFound => ApiError::NotFound,
            ActionError::Forbidden => ApiError::Forbidden,
            ActionError::Invalid(msg) => ApiError::BadRequest(msg),
            ActionError::Other(inner) => ApiError::from(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct PgStateError(&'static str);

    impl std::fmt::Display for PgStateError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "constraint violated (SQLSTATE {})", self.0)
        }
    }

    impl std::error::Error for PgStateError {}

    impl DatabaseError for PgStateError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn kind(&self) -> ErrorKind {
            match self.0 {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(state: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgStateError(state)))
    }

    #[test]
    fn unique_violation_becomes_conflict() {
        let api = ApiError::from(db_error("23505"));
        assert!(matches!(api, ApiError::Conflict(_)));
        assert_eq!(api.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn foreign_key_violation_becomes_not_found() {
        let api = ApiError::from(db_error("23503"));
        assert!(matches!(api, ApiError::NotFound));
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        assert!(matches!(
            ApiError::from(sqlx::Error::RowNotFound),
            ApiError::NotFound
        ));
    }

    #[test]
    fn other_database_errors_become_internal() {
        assert!(matches!(ApiError::from(db_error("40001")), ApiError::Internal));
    }

    #[test]
    fn sqlx_error_inside_anyhow_chain_is_translated() {
        let wrapped = anyhow::Error::from(db_error("23505")).context("create_user");
        assert!(matches!(ApiError::from(wrapped), ApiError::Conflict(_)));
    }

    #[test]
    fn action_errors_map_onto_statuses() {
        assert_eq!(
            ApiError::from(ActionError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActionError::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
        let invalid = ApiError::from(ActionError::invalid("title must not be empty"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "title must not be empty");
    }

    #[test]
    fn plain_anyhow_errors_stay_internal() {
        let err = anyhow::anyhow!("boom");
        assert!(matches!(ApiError::from(err), ApiError::Internal));
    }
}
