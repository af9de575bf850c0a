use crate::{
    backend::{GeminiBackend, TextGenerator},
    bounder,
    config::Config,
    error::{Error, Result},
    formatter, prompt, sanitizer,
    template::TemplateEngine,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Main pipeline orchestrator for turning raw document text into a
/// formatted analysis.
///
/// Each invocation is independent and stateless; a `Pipeline` can be shared
/// freely across concurrent callers. The only suspension point is the
/// backend call.
pub struct Pipeline {
    config: Config,
    engine: TemplateEngine,
    generator: Arc<dyn TextGenerator>,
}

impl Pipeline {
    /// Creates a pipeline backed by the Gemini API configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation or template
    /// registration fails.
    pub fn new(config: Config) -> Result<Self> {
        let generator = Arc::new(GeminiBackend::new(
            config.api_key.clone(),
            config.model.clone(),
        ));
        Self::with_generator(config, generator)
    }

    /// Creates a pipeline with an injected text-generation capability.
    ///
    /// This is the seam for testing the deterministic stages against stub
    /// backends with fixed replies.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation or template
    /// registration fails.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        config.validate()?;
        let engine = TemplateEngine::new()?;

        Ok(Self {
            config,
            engine,
            generator,
        })
    }

    /// Analyzes a document and returns the formatted presentation text.
    ///
    /// Drives sanitization, length bounding, prompt construction, the
    /// backend call and response formatting. Either a complete analysis is
    /// returned or the call fails; no partial result is ever produced.
    ///
    /// # Errors
    ///
    /// Every internal failure surfaces as [`Error::Analysis`] with the
    /// cause preserved in the message.
    #[instrument(skip(self, content))]
    pub async fn analyze(&self, content: &str, file_name: &str) -> Result<String> {
        match self.run(content, file_name).await {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                error!(file_name, cause = %e, "document analysis failed");
                Err(Error::analysis(&e))
            }
        }
    }

    async fn run(&self, content: &str, file_name: &str) -> Result<String> {
        let start = Instant::now();
        info!(
            file_name,
            raw_chars = content.chars().count(),
            "starting document analysis"
        );

        let sanitized = sanitizer::sanitize(content, self.config.preview_length)?;
        let bounded = bounder::bound(&sanitized, self.config.max_content_length);
        let truncated = bounded.len() != sanitized.len();
        let prompt = prompt::build_prompt(&self.engine, &bounded)?;

        info!(
            model = %self.config.model,
            bounded_chars = bounded.chars().count(),
            truncated,
            "sending analysis request to backend"
        );
        let call_start = Instant::now();
        let reply = self.generator.generate(&prompt.segments()).await?;

        info!(
            reply_chars = reply.chars().count(),
            backend_secs = call_start.elapsed().as_secs_f64(),
            "received backend reply"
        );

        let formatted = formatter::format_reply(&self.engine, &reply, file_name)?;

        info!(
            total_secs = start.elapsed().as_secs_f64(),
            "document analysis completed"
        );
        Ok(formatted)
    }
}
