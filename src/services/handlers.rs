use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
	adapters::repositories::MessageRepository,
	domain::message::{
		commands::{CreateMessageRequest, UpdateMessageRequest},
		validate_message, Message, DELETE_INACTIVE_ERROR, UPDATE_INACTIVE_ERROR,
	},
};

use super::response::{ServiceError, ServiceResponse};

/// Business rules for organization-scoped messages.
///
/// Checks run against the repository before each write (check-then-act), so
/// uniqueness is only as strong as the repository guarantees. A repository
/// reporting a uniqueness conflict on write is folded into
/// [`ServiceResponse::Conflict`].
#[derive(Clone)]
pub struct MessageLogic {
	repository: Arc<dyn MessageRepository>,
}

impl MessageLogic {
	pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
		Self { repository }
	}

	#[instrument(skip(self, request), fields(title = %request.title))]
	pub async fn create_message(
		&self,
		organization_id: Uuid,
		request: CreateMessageRequest,
	) -> Result<ServiceResponse<Message>, ServiceError> {
		let errors = validate_message(&request.title, &request.content);
		if !errors.is_empty() {
			debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Create rejected by validation");
			return Ok(ServiceResponse::ValidationError(errors));
		}

		if self.repository.get_by_title(organization_id, &request.title).await?.is_some() {
			debug!("Create rejected: title already taken");
			return Ok(ServiceResponse::conflict());
		}

		let message = Message::new(organization_id, request.title, request.content);
		match self.repository.create(message).await {
			Ok(created) => {
				debug!(message_id = %created.id, "Message created");
				Ok(ServiceResponse::Created(created))
			}
			Err(ServiceError::Conflict(_)) => Ok(ServiceResponse::conflict()),
			Err(err) => Err(err),
		}
	}

	#[instrument(skip(self, request), fields(title = %request.title, is_active = request.is_active))]
	pub async fn update_message(
		&self,
		organization_id: Uuid,
		id: Uuid,
		request: UpdateMessageRequest,
	) -> Result<ServiceResponse<Message>, ServiceError> {
		let Some(mut existing) = self.repository.get_by_id(organization_id, id).await? else {
			return Ok(ServiceResponse::not_found());
		};

		// The lock wins over field errors.
		if !existing.is_active {
			debug!("Update rejected: message is inactive");
			return Ok(ServiceResponse::invalid("IsActive", UPDATE_INACTIVE_ERROR));
		}

		let errors = validate_message(&request.title, &request.content);
		if !errors.is_empty() {
			debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Update rejected by validation");
			return Ok(ServiceResponse::ValidationError(errors));
		}

		if let Some(owner) = self.repository.get_by_title(organization_id, &request.title).await? {
			if owner.id != id {
				debug!(owner_id = %owner.id, "Update rejected: title owned by another message");
				return Ok(ServiceResponse::conflict());
			}
		}

		existing.title = request.title;
		existing.content = request.content;
		existing.is_active = request.is_active;
		existing.updated_at = Some(Utc::now());

		match self.repository.update(existing).await {
			Ok(Some(_)) => Ok(ServiceResponse::Updated),
			// Removed between the fetch and the write.
			Ok(None) => Ok(ServiceResponse::not_found()),
			Err(ServiceError::Conflict(_)) => Ok(ServiceResponse::conflict()),
			Err(err) => Err(err),
		}
	}

	#[instrument(skip(self))]
	pub async fn delete_message(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<ServiceResponse<Message>, ServiceError> {
		let Some(existing) = self.repository.get_by_id(organization_id, id).await? else {
			return Ok(ServiceResponse::not_found());
		};

		if !existing.is_active {
			debug!("Delete rejected: message is inactive");
			return Ok(ServiceResponse::invalid("IsActive", DELETE_INACTIVE_ERROR));
		}

		if !self.repository.delete(organization_id, id).await? {
			return Ok(ServiceResponse::not_found());
		}
		Ok(ServiceResponse::Deleted)
	}

	pub async fn get_message(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<Option<Message>, ServiceError> {
		self.repository.get_by_id(organization_id, id).await
	}

	pub async fn get_all_messages(
		&self,
		organization_id: Uuid,
	) -> Result<Vec<Message>, ServiceError> {
		self.repository.get_all_by_organization(organization_id).await
	}
}
