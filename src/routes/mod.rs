mod messages;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::services::handlers::MessageLogic;

pub const MESSAGES_PATH: &str = "/api/v1/organizations/:organization_id/messages";
pub const MESSAGE_PATH: &str = "/api/v1/organizations/:organization_id/messages/:id";

async fn health() -> &'static str {
	"ok"
}

pub fn create_routes(logic: Arc<MessageLogic>) -> Router {
	Router::new()
		.route("/health", get(health))
		.route(MESSAGES_PATH, get(messages::get_all).post(messages::create))
		.route(MESSAGE_PATH, get(messages::get_by_id).put(messages::update).delete(messages::delete))
		.with_state(logic)
}
