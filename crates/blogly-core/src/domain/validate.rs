//! Field normalisation and checks shared by the input types.

use crate::error::DomainError;

/// Trim a required field and check it is non-empty and within `max_len` characters.
pub(crate) fn required(field: &str, value: &str, max_len: Option<usize>) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    check_len(field, value, max_len)?;
    Ok(value.to_string())
}

/// Trim an optional field. Blank values become `None`.
pub(crate) fn optional(
    field: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) -> Result<Option<String>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            check_len(field, value, max_len)?;
            Ok(Some(value.to_string()))
        }
    }
}

fn check_len(field: &str, value: &str, max_len: Option<usize>) -> Result<(), DomainError> {
    match max_len {
        Some(max) if value.chars().count() > max => Err(DomainError::validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  jdoe ", None).unwrap(), "jdoe");
        assert!(required("name", "   ", None).unwrap_err().is_validation());
    }

    #[test]
    fn length_counts_characters() {
        assert!(required("name", "ééé", Some(3)).is_ok());
        assert!(required("name", "éééé", Some(3)).is_err());
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("image_url", Some("  "), Some(10)).unwrap(), None);
        assert_eq!(optional("image_url", None, Some(10)).unwrap(), None);
        assert_eq!(
            optional("image_url", Some(" a.png "), Some(10)).unwrap(),
            Some("a.png".to_string())
        );
    }
}
