//! Client-side parameter checks, run before any request is built

use crate::error::{Error, Result};
use crate::models::WireEnum;

/// Reject a missing (empty) or blank (whitespace only) required parameter
pub fn required(operation: &'static str, parameter: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingParameter {
            operation,
            parameter,
        });
    }
    if value.trim().is_empty() {
        return Err(Error::BlankParameter {
            operation,
            parameter,
        });
    }
    Ok(())
}

/// Reject an enum option holding a value outside the allowed set
pub fn allowed<E: WireEnum>(parameter: &'static str, value: Option<&E>) -> Result<()> {
    match value {
        Some(v) if !v.is_known() => Err(Error::InvalidEnumValue {
            parameter,
            value: v.as_str().to_string(),
            allowed: E::ALLOWED,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;

    #[test]
    fn test_required_distinguishes_missing_and_blank() {
        assert!(required("get_job", "job_id", "ocid1.job").is_ok());
        assert!(matches!(
            required("get_job", "job_id", ""),
            Err(Error::MissingParameter { parameter: "job_id", .. })
        ));
        assert!(matches!(
            required("get_job", "job_id", "  \t"),
            Err(Error::BlankParameter { operation: "get_job", .. })
        ));
    }

    #[test]
    fn test_allowed_rejects_unknown_values() {
        assert!(allowed::<SortOrder>("sort_order", None).is_ok());
        assert!(allowed("sort_order", Some(&SortOrder::Asc)).is_ok());
        let err = allowed(
            "sort_order",
            Some(&SortOrder::UnknownValue("UP".to_string())),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEnumValue { value, allowed: &["ASC", "DESC"], .. } if value == "UP"
        ));
    }
}
