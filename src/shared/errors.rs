use thiserror::Error;

use crate::domain::models::FormField;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Reasons the conversational form refuses to move forward.
/// The UI disables the submit control for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    EmptyField(FormField),

    #[error("A submission is already in flight")]
    Submitting,

    #[error("The form is already complete")]
    AlreadyComplete,
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            FormError::EmptyField(FormField::Email).to_string(),
            "Email address is required"
        );
        assert_eq!(
            FormError::Submitting.to_string(),
            "A submission is already in flight"
        );
    }

    #[test]
    fn test_serialization_error_converts() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let site: SiteError = err.into();
        assert!(site.to_string().starts_with("Serialization error"));
    }
}
