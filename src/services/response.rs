use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Field name to the messages describing why it was rejected.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const MESSAGE_NOT_FOUND: &str = "Message not found.";
pub const TITLE_NOT_UNIQUE: &str = "Title must be unique within the organization.";

/// Outcome of a mutating message operation.
///
/// Every expected failure is a value here; only infrastructure trouble is a
/// [`ServiceError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResponse<T> {
	Created(T),
	Updated,
	Deleted,
	NotFound(String),
	Conflict(String),
	ValidationError(FieldErrors),
}

impl<T> ServiceResponse<T> {
	pub fn not_found() -> Self {
		ServiceResponse::NotFound(MESSAGE_NOT_FOUND.to_string())
	}

	pub fn conflict() -> Self {
		ServiceResponse::Conflict(TITLE_NOT_UNIQUE.to_string())
	}

	/// Single-field validation failure.
	pub fn invalid(
		field: &str,
		message: &str,
	) -> Self {
		ServiceResponse::ValidationError(FieldErrors::from([(field.to_string(), vec![message.to_string()])]))
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("DatabaseError: {0}")]
	DatabaseError(#[from] sqlx::Error),

	#[error("MigrationError: {0}")]
	MigrationError(#[from] sqlx::migrate::MigrateError),

	#[error("ConfigError: {0}")]
	ConfigError(String),

	#[error("Conflict: {0}")]
	Conflict(String),

	#[error("IoError: {0}")]
	IoError(#[from] std::io::Error),
}

// Anything reaching the HTTP layer as an error is unexpected: log it and hide the details.
impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		tracing::error!("Request failed: {}", self);
		StatusCode::INTERNAL_SERVER_ERROR.into_response()
	}
}

#[cfg(test)]
mod test {
	use axum::{http::StatusCode, response::IntoResponse};

	use super::{ServiceError, ServiceResponse, MESSAGE_NOT_FOUND};

	#[test]
	fn test_invalid_builds_single_entry_map() {
		let response = ServiceResponse::<()>::invalid("IsActive", "Cannot update inactive messages.");
		let ServiceResponse::ValidationError(errors) = response else {
			panic!("expected validation error");
		};
		assert_eq!(errors.len(), 1);
		assert_eq!(errors["IsActive"], vec!["Cannot update inactive messages.".to_string()]);
	}

	#[test]
	fn test_not_found_message() {
		assert_eq!(ServiceResponse::<()>::not_found(), ServiceResponse::NotFound(MESSAGE_NOT_FOUND.into()));
	}

	#[test]
	fn test_io_error_converts_with_question_mark() {
		fn bind() -> Result<(), ServiceError> {
			Err::<(), _>(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"))?;
			Ok(())
		}

		let err = bind().unwrap_err();
		assert!(matches!(err, ServiceError::IoError(_)));
		assert_eq!(err.to_string(), "IoError: port taken");
	}

	#[test]
	fn test_service_error_is_internal_server_error() {
		let response = ServiceError::ConfigError("missing".into()).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
