//! Input validation helpers
//!
//! Path and query parsing plus text checks shared by the HTTP handlers.
//! SQLite TEXT has no length enforcement, so limits live here.

use shared::error::{AppError, ErrorCode};

/// Names: first/last name, position, activity name, task title
pub const MAX_NAME_LEN: usize = 200;

/// Free-text task status label
pub const MAX_STATUS_LEN: usize = 100;

/// Parse a numeric identifier taken from the path or query string
pub fn parse_id(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::validation(format!("{field} must be an integer, got '{raw}'"))
            .with_detail("field", field)
    })
}

/// Parse a list of ids given either as a JSON array (`[1,2]`) or as a comma
/// separated list (`1,2`). Blank input is an empty list.
pub fn parse_id_list(raw: &str, field: &str) -> Result<Vec<i64>, AppError> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        return serde_json::from_str::<Vec<i64>>(raw).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("{field}: {e}"))
                .with_detail("field", field)
        });
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s, field))
        .collect()
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "id").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "id").unwrap(), 7);

        let err = parse_id("abc", "id").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_parse_id_list_accepts_json_and_commas() {
        assert_eq!(parse_id_list("[1,2]", "activities").unwrap(), vec![1, 2]);
        assert_eq!(parse_id_list("[]", "activities").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_id_list("3, 4,5", "activities").unwrap(), vec![3, 4, 5]);
        assert_eq!(parse_id_list("", "activities").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_id_list_rejects_garbage() {
        let err = parse_id_list("[1,\"x\"]", "activities").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let err = parse_id_list("1,x", "activities").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Ivan", "firstName", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "firstName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "firstName", MAX_NAME_LEN).is_err());
    }
}
