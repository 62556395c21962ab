use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::services::response::ServiceError;

/// Connects to Postgres and brings the schema up to date.
pub async fn connection_pool(
	url: &str,
	max_connections: u32,
) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new().max_connections(max_connections).connect(url).await.map_err(|err| {
		tracing::error!("Database connection failed: {:?}", err);
		ServiceError::DatabaseError(err)
	})?;

	sqlx::migrate!("./migrations").run(&pool).await?;
	tracing::info!("Database migrations applied");

	Ok(pool)
}
