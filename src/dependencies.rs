use std::sync::{Arc, OnceLock};

use crate::{
	adapters::repositories::{InMemoryMessageRepository, MessageRepository, PgMessageRepository},
	config::Config,
	database::connection_pool,
	services::response::ServiceError,
};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Postgres when a database is configured, otherwise a process-local store.
pub async fn message_repository(config: &Config) -> Result<Arc<dyn MessageRepository>, ServiceError> {
	match config.database_url.as_deref() {
		Some(url) => {
			let pool = connection_pool(url, config.database_max_connections).await?;
			Ok(Arc::new(PgMessageRepository::new(pool)))
		}
		None => {
			tracing::warn!("DATABASE_URL is not set, messages are kept in memory only");
			Ok(Arc::new(InMemoryMessageRepository::new()))
		}
	}
}
