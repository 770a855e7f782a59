use std::fmt;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter all the fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Comment,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Comment => "comment",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission with at least one required field absent or empty.
///
/// Displays as the message shown to the visitor; `missing` is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", MISSING_FIELDS_MESSAGE)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}
