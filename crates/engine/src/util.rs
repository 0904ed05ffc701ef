//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! parsing and patch logic so every entity follows the same conventions.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::InvalidId(format!("invalid {label} id")))
}

/// Trim optional user text; blank input becomes `None`.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Apply a text patch: `None` keeps the current value, blank clears it.
pub(crate) fn apply_optional_text_patch(
    existing: Option<String>,
    patch: Option<&str>,
) -> Option<String> {
    match patch {
        None => existing,
        Some(value) => normalize_optional_text(Some(value)),
    }
}

/// Trim a required name and reject blank input.
pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_patch_keeps_replaces_or_clears() {
        let existing = Some("lunch".to_string());
        assert_eq!(apply_optional_text_patch(existing.clone(), None), existing);
        assert_eq!(
            apply_optional_text_patch(existing.clone(), Some(" dinner ")),
            Some("dinner".to_string())
        );
        assert_eq!(apply_optional_text_patch(existing, Some("")), None);
    }

    #[test]
    fn required_name_rejects_blank() {
        assert_eq!(
            normalize_required_name("  ", "category title"),
            Err(EngineError::InvalidName(
                "category title must not be empty".to_string()
            ))
        );
        assert_eq!(
            normalize_required_name(" Rent ", "category title").unwrap(),
            "Rent"
        );
    }
}
