use serde::Deserialize;

// Missing text fields deserialize as empty strings so they are reported as
// field validation errors rather than body rejections.

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
	#[serde(default, alias = "Title")]
	pub title: String,
	#[serde(default, alias = "Content")]
	pub content: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
	#[serde(default, alias = "Title")]
	pub title: String,
	#[serde(default, alias = "Content")]
	pub content: String,
	#[serde(default, alias = "IsActive")]
	pub is_active: bool,
}

#[test]
fn test_request_accepts_both_casings() {
	let camel = serde_json::from_str::<UpdateMessageRequest>(r#"{"title":"Welcome","content":"Hello there!","isActive":true}"#).unwrap();
	let pascal = serde_json::from_str::<UpdateMessageRequest>(r#"{"Title":"Welcome","Content":"Hello there!","IsActive":true}"#).unwrap();

	assert_eq!(camel.title, pascal.title);
	assert_eq!(camel.content, pascal.content);
	assert!(camel.is_active && pascal.is_active);
}

#[test]
fn test_missing_fields_default() {
	let request = serde_json::from_str::<UpdateMessageRequest>("{}").unwrap();
	assert!(request.title.is_empty());
	assert!(request.content.is_empty());
	assert!(!request.is_active);
}
