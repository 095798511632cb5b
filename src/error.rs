//! Copy behavior error types
//!
//! Every variant except [`CopyError::Listener`] is absorbed by the click
//! handler and only shows up in logs and [`crate::CopyOutcome`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// `data-content` is absent or empty
    MissingContent,
    /// No window or no clipboard (e.g. insecure context)
    ClipboardUnavailable,
    /// The clipboard write promise rejected
    ClipboardWrite(String),
    /// The click listener could not be registered
    Listener(String),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent => write!(f, "Nothing to copy: data-content is missing or empty"),
            Self::ClipboardUnavailable => write!(f, "Clipboard API is not available"),
            Self::ClipboardWrite(msg) => write!(f, "Clipboard write failed: {}", msg),
            Self::Listener(msg) => write!(f, "Failed to attach click listener: {}", msg),
        }
    }
}

impl std::error::Error for CopyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_platform_message() {
        let err = CopyError::ClipboardWrite("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "Clipboard write failed: NotAllowedError");
    }
}
