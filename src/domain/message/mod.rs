pub mod commands;
pub mod entity;

pub use entity::Message;

use crate::services::response::FieldErrors;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 200;
pub const CONTENT_MIN_LEN: usize = 10;
pub const CONTENT_MAX_LEN: usize = 1000;

pub const TITLE_ERROR: &str = "Title is required and must be between 3 and 200 characters.";
pub const CONTENT_ERROR: &str = "Content must be between 10 and 1000 characters.";
pub const UPDATE_INACTIVE_ERROR: &str = "Cannot update inactive messages.";
pub const DELETE_INACTIVE_ERROR: &str = "Cannot delete inactive messages.";

/// Checks title and content lengths, collecting one entry per offending field.
/// An empty map means the pair is acceptable.
pub fn validate_message(
	title: &str,
	content: &str,
) -> FieldErrors {
	let mut errors = FieldErrors::new();

	if !within_bounds(title, TITLE_MIN_LEN, TITLE_MAX_LEN) {
		errors.insert("Title".to_string(), vec![TITLE_ERROR.to_string()]);
	}
	if !within_bounds(content, CONTENT_MIN_LEN, CONTENT_MAX_LEN) {
		errors.insert("Content".to_string(), vec![CONTENT_ERROR.to_string()]);
	}

	errors
}

// Blank text never passes, whatever its length.
fn within_bounds(
	value: &str,
	min: usize,
	max: usize,
) -> bool {
	if value.trim().is_empty() {
		return false;
	}
	let len = value.chars().count();
	(min..=max).contains(&len)
}
