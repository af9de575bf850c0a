use crate::error::{Error, Result};

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_MAX_CONTENT_LENGTH: usize = 15_000;
const DEFAULT_PREVIEW_LENGTH: usize = 500;

/// Configuration for the lexbrief pipeline.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Opaque credential for the LLM backend
    pub api_key: String,

    /// Backend model identifier
    pub model: String,

    /// Maximum document characters sent to the backend before truncation
    pub max_content_length: usize,

    /// Characters of sanitized content included in diagnostic events
    pub preview_length: usize,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexbrief::Config;
    ///
    /// let config = Config::builder()
    ///     .api_key("secret")
    ///     .max_content_length(10_000)
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing
    /// - The model identifier is empty
    /// - The content length bound is zero
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config(
                "API key is not configured. Supply it via Config::builder().api_key(...)",
            ));
        }

        if self.model.is_empty() {
            return Err(Error::config("model identifier must not be empty"));
        }

        if self.max_content_length == 0 {
            return Err(Error::config("max_content_length must be greater than 0"));
        }

        Ok(())
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    max_content_length: Option<usize>,
    preview_length: Option<usize>,
}

impl ConfigBuilder {
    /// Sets the backend credential.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the backend model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the maximum document characters sent to the backend.
    #[must_use]
    pub fn max_content_length(mut self, length: usize) -> Self {
        self.max_content_length = Some(length);
        self
    }

    /// Sets the diagnostic content preview length.
    #[must_use]
    pub fn preview_length(mut self, length: usize) -> Self {
        self.preview_length = Some(length);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            api_key: self.api_key.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_content_length: self
                .max_content_length
                .unwrap_or(DEFAULT_MAX_CONTENT_LENGTH),
            preview_length: self.preview_length.unwrap_or(DEFAULT_PREVIEW_LENGTH),
        };

        config.validate()?;
        Ok(config)
    }
}
