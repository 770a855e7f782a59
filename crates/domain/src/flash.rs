pub const SUBMITTED_MESSAGE: &str = "Comment was successfully submitted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn submitted() -> Self {
        Self {
            level: FlashLevel::Success,
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Stable code carried between requests. Only the success flash crosses
    /// a redirect; errors are rendered in place.
    pub fn code(&self) -> Option<&'static str> {
        match self.level {
            FlashLevel::Success if self.message == SUBMITTED_MESSAGE => Some("submitted"),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "submitted" => Some(Self::submitted()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_flash_survives_code_lookup() {
        let flash = Flash::submitted();
        let code = flash.code().expect("has code");
        assert_eq!(Flash::from_code(code), Some(flash));
    }

    #[test]
    fn error_flash_has_no_code() {
        assert_eq!(Flash::error("Please enter all the fields").code(), None);
        assert_eq!(Flash::from_code("bogus"), None);
    }
}
