use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{domain::message::Message, services::response::ServiceError};

use super::MessageRepository;

/// Process-local store used by tests and when no database is configured.
#[derive(Default)]
pub struct InMemoryMessageRepository {
	messages: RwLock<HashMap<Uuid, Message>>,
}

impl InMemoryMessageRepository {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
	async fn get_by_id(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<Option<Message>, ServiceError> {
		Ok(self
			.messages
			.read()
			.await
			.get(&id)
			.filter(|m| m.organization_id == organization_id)
			.cloned())
	}

	async fn get_by_title(
		&self,
		organization_id: Uuid,
		title: &str,
	) -> Result<Option<Message>, ServiceError> {
		Ok(self
			.messages
			.read()
			.await
			.values()
			.find(|m| m.organization_id == organization_id && m.title == title)
			.cloned())
	}

	async fn get_all_by_organization(
		&self,
		organization_id: Uuid,
	) -> Result<Vec<Message>, ServiceError> {
		let mut messages: Vec<Message> = self
			.messages
			.read()
			.await
			.values()
			.filter(|m| m.organization_id == organization_id)
			.cloned()
			.collect();
		messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
		Ok(messages)
	}

	async fn create(
		&self,
		message: Message,
	) -> Result<Message, ServiceError> {
		let mut messages = self.messages.write().await;
		if messages
			.values()
			.any(|m| m.organization_id == message.organization_id && m.title == message.title)
		{
			return Err(ServiceError::Conflict(message.title));
		}
		messages.insert(message.id, message.clone());
		Ok(message)
	}

	async fn update(
		&self,
		message: Message,
	) -> Result<Option<Message>, ServiceError> {
		let mut messages = self.messages.write().await;
		if messages
			.values()
			.any(|m| m.id != message.id && m.organization_id == message.organization_id && m.title == message.title)
		{
			return Err(ServiceError::Conflict(message.title));
		}
		match messages.get_mut(&message.id) {
			Some(stored) if stored.organization_id == message.organization_id => {
				*stored = message.clone();
				Ok(Some(message))
			}
			_ => Ok(None),
		}
	}

	async fn delete(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let mut messages = self.messages.write().await;
		match messages.get(&id) {
			Some(stored) if stored.organization_id == organization_id => {
				messages.remove(&id);
				Ok(true)
			}
			_ => Ok(false),
		}
	}
}
