use std::sync::Arc;

use crate::{
	adapters::repositories::InMemoryMessageRepository, config::Config, dependencies::message_repository, routes::create_routes,
	services::{handlers::MessageLogic, response::ServiceError},
};

pub struct Bootstrap;
impl Bootstrap {
	/// Wires the logic layer onto the repository chosen by `config`.
	pub async fn message_logic(config: &Config) -> Result<Arc<MessageLogic>, ServiceError> {
		let repository = message_repository(config).await?;
		Ok(Arc::new(MessageLogic::new(repository)))
	}

	/// The full router backed by a fresh in-memory store.
	pub fn in_memory_app() -> axum::Router {
		let logic = MessageLogic::new(Arc::new(InMemoryMessageRepository::new()));
		create_routes(Arc::new(logic))
	}
}
