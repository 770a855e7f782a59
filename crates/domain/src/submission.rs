use serde::Deserialize;

use crate::errors::{Field, ValidationError};

/// Raw form fields as posted to `/new`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// All three fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl SubmissionForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            comment: Some(comment.into()),
        }
    }

    /// Absent and empty values both count as missing. Whitespace is content.
    pub fn validate(self) -> Result<ValidSubmission, ValidationError> {
        let mut missing = Vec::new();
        let name = take(self.name, Field::Name, &mut missing);
        let email = take(self.email, Field::Email, &mut missing);
        let comment = take(self.comment, Field::Comment, &mut missing);

        match (name, email, comment) {
            (Some(name), Some(email), Some(comment)) => Ok(ValidSubmission {
                name,
                email,
                comment,
            }),
            _ => Err(ValidationError { missing }),
        }
    }
}

fn take(value: Option<String>, field: Field, missing: &mut Vec<Field>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
