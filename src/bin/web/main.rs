use axum::http::{header, Method};
use message_board::{bootstrap::Bootstrap, dependencies::config, routes::create_routes, services::response::ServiceError};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	dotenv::dotenv().ok();
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Repository is being prepared...");
	let logic = Bootstrap::message_logic(config).await?;

	let app = create_routes(logic)
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(config.allow_origins.clone()))
				.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
				.allow_headers([header::CONTENT_TYPE])
				.expose_headers([header::LOCATION]),
		)
		.layer(TraceLayer::new_for_http());

	let listener = tokio::net::TcpListener::bind(config.server_ip_port.as_str()).await?;
	tracing::info!(addr = %config.server_ip_port, "Start Web Server...");
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("Web server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
}
