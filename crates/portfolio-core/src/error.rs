//! Error types for content loading and section lookup

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading page content or resolving section ids.
///
/// Navigation itself never fails: a missing scroll target is a no-op.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse portfolio content: {0}")]
    ContentParse(#[from] toml::de::Error),

    #[error("Invalid portfolio content: {message}")]
    ContentInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown section: {id}")]
    UnknownSection { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn content_invalid(message: impl Into<String>) -> Self {
        Self::ContentInvalid {
            message: message.into(),
        }
    }

    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection { id: id.into() }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with context before propagating it
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_section("blog");
        assert_eq!(err.to_string(), "Unknown section: blog");

        let err = Error::content_invalid("profile name is empty");
        assert_eq!(
            err.to_string(),
            "Invalid portfolio content: profile name is empty"
        );
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("not valid toml {{{{").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ContentParse(_)));
        assert!(err.to_string().starts_with("Failed to parse portfolio content"));
    }

    #[test]
    fn test_result_ext_context_preserves_error() {
        let res: std::result::Result<(), Error> = Err(Error::unknown_section("nav"));
        let err = res.context("resolving nav target").unwrap_err();
        assert!(matches!(err, Error::UnknownSection { ref id } if id == "nav"));
    }
}
