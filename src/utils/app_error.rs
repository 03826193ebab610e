use axum::response::{IntoResponse, Response};
use hyper::StatusCode;
use tracing::warn;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    /// A unique or primary key collision: duplicate email, duplicate follow edge.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Missing foreign key, restricted delete, value too long.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, AppError::ConstraintViolation(_))
    }

    /// Maps a failed query to an error kind. `RowNotFound` becomes
    /// `NotFound` for the given entity and id.
    pub fn from_query(e: sqlx::Error, entity: &'static str, id: i64) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found(entity, id),
            e => AppError::from(e),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_error) = &e else {
            warn!("Database error : {e}");
            return AppError::Database(e);
        };

        let constraint = db_error.constraint().unwrap_or("");
        let message = if constraint.is_empty() {
            db_error.message().to_string()
        } else {
            format!("{} ({constraint})", db_error.message())
        };

        let code = db_error.code().map(|code| code.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => {
                warn!("Unique constraint violated : {message}");
                AppError::Conflict(message)
            }
            Some(FOREIGN_KEY_VIOLATION)
            | Some(NOT_NULL_VIOLATION)
            | Some(CHECK_VIOLATION)
            | Some(STRING_DATA_RIGHT_TRUNCATION) => {
                warn!("Schema constraint violated : {message}");
                AppError::ConstraintViolation(message)
            }
            _ => {
                warn!("Database error : {e}");
                AppError::Database(e)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ConstraintViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Migration(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            return status_code.into_response();
        }

        (status_code, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = AppError::from_query(sqlx::Error::RowNotFound, "user", 7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "user 7 not found");
    }

    #[test]
    fn other_query_errors_stay_database_errors() {
        let err = AppError::from_query(sqlx::Error::PoolTimedOut, "post", 1);
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::not_found("media", 3).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("duplicate email".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ConstraintViolation("comment_text too long".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
