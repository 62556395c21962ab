use std::sync::Arc;

use axum::{
	extract::{Path, State},
	http::{header, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use axum_macros::debug_handler;
use uuid::Uuid;

use crate::{
	domain::message::{
		commands::{CreateMessageRequest, UpdateMessageRequest},
		Message,
	},
	services::{
		handlers::MessageLogic,
		response::{ServiceError, ServiceResponse},
	},
};

fn message_location(
	organization_id: Uuid,
	id: Uuid,
) -> String {
	format!("/api/v1/organizations/{organization_id}/messages/{id}")
}

// Variants an operation never produces end up here.
fn unexpected(response: ServiceResponse<Message>) -> Response {
	tracing::error!("Unhandled service response: {:?}", response);
	StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

#[debug_handler]
pub async fn get_all(
	State(logic): State<Arc<MessageLogic>>,
	Path(organization_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ServiceError> {
	Ok(Json(logic.get_all_messages(organization_id).await?))
}

#[debug_handler]
pub async fn get_by_id(
	State(logic): State<Arc<MessageLogic>>,
	Path((organization_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ServiceError> {
	match logic.get_message(organization_id, id).await? {
		Some(message) => Ok(Json(message).into_response()),
		None => Ok(StatusCode::NOT_FOUND.into_response()),
	}
}

#[debug_handler]
pub async fn create(
	State(logic): State<Arc<MessageLogic>>,
	Path(organization_id): Path<Uuid>,
	Json(request): Json<CreateMessageRequest>,
) -> Result<Response, ServiceError> {
	let response = match logic.create_message(organization_id, request).await? {
		ServiceResponse::Created(message) => {
			let location = message_location(organization_id, message.id);
			(StatusCode::CREATED, [(header::LOCATION, location)], Json(message)).into_response()
		}
		ServiceResponse::ValidationError(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
		ServiceResponse::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
		other => unexpected(other),
	};
	Ok(response)
}

#[debug_handler]
pub async fn update(
	State(logic): State<Arc<MessageLogic>>,
	Path((organization_id, id)): Path<(Uuid, Uuid)>,
	Json(request): Json<UpdateMessageRequest>,
) -> Result<Response, ServiceError> {
	let response = match logic.update_message(organization_id, id, request).await? {
		ServiceResponse::Updated => StatusCode::NO_CONTENT.into_response(),
		ServiceResponse::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
		ServiceResponse::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
		ServiceResponse::ValidationError(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
		other => unexpected(other),
	};
	Ok(response)
}

#[debug_handler]
pub async fn delete(
	State(logic): State<Arc<MessageLogic>>,
	Path((organization_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ServiceError> {
	let response = match logic.delete_message(organization_id, id).await? {
		ServiceResponse::Deleted => StatusCode::NO_CONTENT.into_response(),
		ServiceResponse::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
		ServiceResponse::ValidationError(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
		other => unexpected(other),
	};
	Ok(response)
}

#[cfg(test)]
mod test {
	use uuid::Uuid;

	use super::{message_location, unexpected};
	use crate::services::response::ServiceResponse;

	#[test]
	fn test_location_points_at_get_by_id() {
		let org = Uuid::new_v4();
		let id = Uuid::new_v4();
		assert_eq!(message_location(org, id), format!("/api/v1/organizations/{org}/messages/{id}"));
	}

	#[test]
	fn test_unexpected_variant_is_internal_error() {
		let response = unexpected(ServiceResponse::Updated);
		assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
	}
}
