pub mod in_memory;
pub mod message_repository;

pub use in_memory::InMemoryMessageRepository;
pub use message_repository::PgMessageRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{domain::message::Message, services::response::ServiceError};

/// Storage for messages, keyed by organization and id.
///
/// Implementations only persist; lifecycle and uniqueness rules live in
/// [`crate::services::handlers::MessageLogic`].
#[async_trait]
pub trait MessageRepository: Send + Sync {
	async fn get_by_id(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<Option<Message>, ServiceError>;

	async fn get_by_title(
		&self,
		organization_id: Uuid,
		title: &str,
	) -> Result<Option<Message>, ServiceError>;

	async fn get_all_by_organization(
		&self,
		organization_id: Uuid,
	) -> Result<Vec<Message>, ServiceError>;

	async fn create(
		&self,
		message: Message,
	) -> Result<Message, ServiceError>;

	/// Returns `None` when the target no longer exists.
	async fn update(
		&self,
		message: Message,
	) -> Result<Option<Message>, ServiceError>;

	/// Returns `false` when nothing was deleted.
	async fn delete(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<bool, ServiceError>;
}
