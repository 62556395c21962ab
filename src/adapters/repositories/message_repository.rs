use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{domain::message::Message, services::response::ServiceError};

use super::MessageRepository;

const MESSAGE_COLUMNS: &str = "id, organization_id, title, content, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PgMessageRepository {
	pool: PgPool,
}

impl PgMessageRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

// The (organization_id, title) unique index backs up the logic-level check
// when two writers race for the same title.
fn map_write_error(err: sqlx::Error) -> ServiceError {
	match err {
		sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ServiceError::Conflict(db_err.message().to_string()),
		err => err.into(),
	}
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
	#[instrument(skip(self))]
	async fn get_by_id(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<Option<Message>, ServiceError> {
		let message = sqlx::query_as::<_, Message>(&format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE organization_id = $1 AND id = $2"))
			.bind(organization_id)
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(message)
	}

	#[instrument(skip(self))]
	async fn get_by_title(
		&self,
		organization_id: Uuid,
		title: &str,
	) -> Result<Option<Message>, ServiceError> {
		let message = sqlx::query_as::<_, Message>(&format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE organization_id = $1 AND title = $2"))
			.bind(organization_id)
			.bind(title)
			.fetch_optional(&self.pool)
			.await?;
		Ok(message)
	}

	#[instrument(skip(self))]
	async fn get_all_by_organization(
		&self,
		organization_id: Uuid,
	) -> Result<Vec<Message>, ServiceError> {
		let messages = sqlx::query_as::<_, Message>(&format!(
			"SELECT {MESSAGE_COLUMNS} FROM messages WHERE organization_id = $1 ORDER BY created_at, id"
		))
		.bind(organization_id)
		.fetch_all(&self.pool)
		.await?;
		Ok(messages)
	}

	#[instrument(skip(self, message), fields(organization_id = %message.organization_id, message_id = %message.id))]
	async fn create(
		&self,
		message: Message,
	) -> Result<Message, ServiceError> {
		let created = sqlx::query_as::<_, Message>(&format!(
			"INSERT INTO messages ({MESSAGE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {MESSAGE_COLUMNS}"
		))
		.bind(message.id)
		.bind(message.organization_id)
		.bind(&message.title)
		.bind(&message.content)
		.bind(message.is_active)
		.bind(message.created_at)
		.bind(message.updated_at)
		.fetch_one(&self.pool)
		.await
		.map_err(map_write_error)?;

		debug!("Message inserted");
		Ok(created)
	}

	#[instrument(skip(self, message), fields(organization_id = %message.organization_id, message_id = %message.id))]
	async fn update(
		&self,
		message: Message,
	) -> Result<Option<Message>, ServiceError> {
		let updated = sqlx::query_as::<_, Message>(&format!(
			"UPDATE messages SET title = $3, content = $4, is_active = $5, updated_at = $6 \
			 WHERE organization_id = $1 AND id = $2 RETURNING {MESSAGE_COLUMNS}"
		))
		.bind(message.organization_id)
		.bind(message.id)
		.bind(&message.title)
		.bind(&message.content)
		.bind(message.is_active)
		.bind(message.updated_at)
		.fetch_optional(&self.pool)
		.await
		.map_err(map_write_error)?;

		debug!(found = updated.is_some(), "Message update executed");
		Ok(updated)
	}

	#[instrument(skip(self))]
	async fn delete(
		&self,
		organization_id: Uuid,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let result = sqlx::query("DELETE FROM messages WHERE organization_id = $1 AND id = $2")
			.bind(organization_id)
			.bind(id)
			.execute(&self.pool)
			.await?;

		debug!(rows_affected = result.rows_affected(), "Message delete executed");
		Ok(result.rows_affected() > 0)
	}
}

#[cfg(all(test, feature = "integration"))]
mod test {
	use uuid::Uuid;

	use crate::{
		adapters::repositories::{MessageRepository, PgMessageRepository},
		database::connection_pool,
		dependencies::config,
		domain::message::Message,
		services::response::ServiceError,
	};

	async fn repository() -> PgMessageRepository {
		let config = config().expect("configuration must load");
		let url = config.database_url.as_deref().expect("DATABASE_URL must be set for integration tests");
		PgMessageRepository::new(connection_pool(url, config.database_max_connections).await.unwrap())
	}

	#[tokio::test]
	async fn test_create_and_fetch() {
		'_given: {
			let repo = repository().await;
			let org_id = Uuid::new_v4();
			let message = Message::new(org_id, "Welcome".into(), "Hello there!".into());

			'_when: {
				let created = repo.create(message.clone()).await.unwrap();

				'_then: {
					assert_eq!(created.id, message.id);
					assert_eq!(repo.get_by_id(org_id, message.id).await.unwrap().unwrap().title, "Welcome");
					assert_eq!(repo.get_by_title(org_id, "Welcome").await.unwrap().unwrap().id, message.id);
					assert!(repo.get_by_id(Uuid::new_v4(), message.id).await.unwrap().is_none());
				}
			}
		}
	}

	#[tokio::test]
	async fn test_duplicate_title_is_conflict() {
		let repo = repository().await;
		let org_id = Uuid::new_v4();
		repo.create(Message::new(org_id, "Welcome".into(), "Hello there!".into())).await.unwrap();

		let err = repo.create(Message::new(org_id, "Welcome".into(), "Hello again!".into())).await.unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));
	}

	#[tokio::test]
	async fn test_update_and_delete_report_missing_rows() {
		let repo = repository().await;
		let ghost = Message::new(Uuid::new_v4(), "Ghost".into(), "Nobody stored me".into());

		assert!(repo.update(ghost.clone()).await.unwrap().is_none());
		assert!(!repo.delete(ghost.organization_id, ghost.id).await.unwrap());

		let stored = repo.create(ghost.clone()).await.unwrap();
		assert!(repo.delete(stored.organization_id, stored.id).await.unwrap());
		assert!(repo.get_all_by_organization(stored.organization_id).await.unwrap().is_empty());
	}
}
