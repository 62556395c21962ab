use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
	pub id: Uuid,
	pub organization_id: Uuid,
	pub title: String,
	pub content: String,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
	/// A fresh, active message owned by `organization_id`.
	pub fn new(
		organization_id: Uuid,
		title: String,
		content: String,
	) -> Self {
		Self {
			id: Uuid::new_v4(),
			organization_id,
			title,
			content,
			is_active: true,
			created_at: Utc::now(),
			updated_at: None,
		}
	}
}
