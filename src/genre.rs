//! The genre model and the payload validation rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RegistryError;

/// Minimum accepted length for a genre name, in characters.
pub const MIN_NAME_LEN: usize = 3;

/// The sole entity type: an id/name pair.
///
/// `id` is assigned by the registry and never changes; `name` is the only
/// mutable attribute.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Validates a create/update payload and extracts the genre name.
///
/// Pure function, applied identically by create and update. The payload is
/// inspected as a JSON value rather than deserialized into a struct so each
/// constraint keeps its own message; only the first violated constraint is
/// reported.
pub(crate) fn validate_payload(payload: &Value) -> Result<&str, RegistryError> {
    let name = payload
        .get("name")
        .ok_or_else(|| RegistryError::invalid(r#""name" is required"#))?;
    let name = name
        .as_str()
        .ok_or_else(|| RegistryError::invalid(r#""name" must be a string"#))?;
    if name.chars().count() < MIN_NAME_LEN {
        return Err(RegistryError::invalid(
            r#""name" length must be at least 3 characters long"#,
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_name_of_three_characters() {
        assert_eq!(validate_payload(&json!({"name": "Pop"})), Ok("Pop"));
    }

    #[test]
    fn rejects_a_missing_name_first() {
        // An empty object violates "required" before anything else.
        assert_eq!(
            validate_payload(&json!({})),
            Err(RegistryError::invalid(r#""name" is required"#)),
        );
    }

    #[test]
    fn rejects_a_non_string_name() {
        assert_eq!(
            validate_payload(&json!({"name": 42})),
            Err(RegistryError::invalid(r#""name" must be a string"#)),
        );
    }

    #[test]
    fn rejects_a_short_name() {
        assert_eq!(
            validate_payload(&json!({"name": "ab"})),
            Err(RegistryError::invalid(
                r#""name" length must be at least 3 characters long"#,
            )),
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate_payload(&json!({"name": "日本語"})), Ok("日本語"));
    }
}
