use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for the lexbrief library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Document content is empty, either as supplied or after sanitization.
    #[error("{message}")]
    EmptyInput {
        /// Which emptiness condition was hit
        message: String,
    },

    /// The LLM backend call failed.
    #[error("backend error: {message}")]
    Backend {
        /// Message preserved from the backend
        message: String,
    },

    /// The LLM backend returned a reply with no text.
    #[error("backend returned an empty reply")]
    EmptyReply,

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// Template rendering error.
    #[error("Failed to render template '{template}': {message}")]
    Template {
        /// Template name
        template: String,
        /// Error message
        message: String,
    },

    /// Normalized top-level failure returned by [`crate::Pipeline::analyze`].
    ///
    /// Callers never see the stage-specific variants above from a pipeline
    /// run; they all surface as this single kind with the cause preserved.
    #[error("analysis failed: {cause}")]
    Analysis {
        /// Human-readable cause chain
        cause: String,
    },
}

impl Error {
    /// Creates an empty-input error.
    #[must_use]
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Creates a backend error, preserving the backend's message.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a template error.
    #[must_use]
    pub fn template(template: impl Into<String>, source: tera::Error) -> Self {
        Self::Template {
            template: template.into(),
            message: source.to_string(),
        }
    }

    /// Wraps any pipeline-stage error into the normalized analysis failure.
    #[must_use]
    pub fn analysis(cause: &Self) -> Self {
        Self::Analysis {
            cause: cause.to_string(),
        }
    }

    /// Returns true if this is an empty-input error.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Returns true if this is a backend error.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is the normalized analysis failure.
    #[must_use]
    pub const fn is_analysis(&self) -> bool {
        matches!(self, Self::Analysis { .. })
    }
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        Self::Template {
            template: "unknown".to_string(),
            message: e.to_string(),
        }
    }
}

impl From<crate::backend::BackendError> for Error {
    fn from(e: crate::backend::BackendError) -> Self {
        match e {
            crate::backend::BackendError::NoText => Self::EmptyReply,
            other => Self::backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test message");
        assert!(err.is_config());
        assert!(err.to_string().contains("test message"));
    }

    #[test]
    fn test_empty_input_message() {
        let err = Error::empty_input("document content is empty");
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "document content is empty");
    }

    #[test]
    fn test_backend_preserves_message() {
        let err = Error::backend("status 503: overloaded");
        assert!(err.is_backend());
        assert!(err.to_string().contains("status 503: overloaded"));
    }

    #[test]
    fn test_analysis_wraps_cause() {
        let inner = Error::empty_input("document content is empty after cleaning");
        let wrapped = Error::analysis(&inner);
        assert!(wrapped.is_analysis());
        assert_eq!(
            wrapped.to_string(),
            "analysis failed: document content is empty after cleaning"
        );
    }

    #[test]
    fn test_empty_reply_conversion() {
        let err: Error = crate::backend::BackendError::NoText.into();
        assert!(matches!(err, Error::EmptyReply));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::config("test");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
