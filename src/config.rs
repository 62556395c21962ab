use axum::http::HeaderValue;

use crate::services::response::ServiceError;

pub struct Config {
	/// Default log filter when RUST_LOG is not set
	pub log_level: String,

	/// Address the server is listening on
	pub server_ip_port: String,

	/// Postgres connection string; the in-memory store is used when absent
	pub database_url: Option<String>,
	pub database_max_connections: u32,
	pub allow_origins: Vec<HeaderValue>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from any key lookup, so tests need not touch the process environment.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:8080".into());
		let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
		let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
			Some(raw) => raw
				.parse::<u32>()
				.map_err(|_| ServiceError::ConfigError(format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`")))?,
			None => 30,
		};
		let allow_origins = lookup("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000,http://localhost:3001".to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|_| ServiceError::ConfigError(format!("invalid origin in ALLOW_ORIGINS: `{origin}`")))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			database_max_connections,
			allow_origins,
		})
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::Config;
	use crate::services::response::ServiceError;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config = Config::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config.log_level, "info");
		assert_eq!(config.server_ip_port, "0.0.0.0:8080");
		assert!(config.database_url.is_none());
		assert_eq!(config.database_max_connections, 30);
		assert_eq!(config.allow_origins.len(), 2);
	}

	#[test]
	fn test_overrides() {
		let config = Config::from_lookup(lookup(&[
			("DATABASE_URL", "postgres://localhost/messages"),
			("DATABASE_MAX_CONNECTIONS", "5"),
			("ALLOW_ORIGINS", "https://example.com"),
		]))
		.unwrap();
		assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/messages"));
		assert_eq!(config.database_max_connections, 5);
		assert_eq!(config.allow_origins, vec!["https://example.com"]);
	}

	#[test]
	fn test_invalid_pool_size() {
		let result = Config::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "many")]));
		assert!(matches!(result, Err(ServiceError::ConfigError(_))));
	}
}
