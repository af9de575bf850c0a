//! # lexbrief
//!
//! A library for turning raw legal document text into structured,
//! presentation-ready analyses with an LLM backend.
//!
//! ## Features
//!
//! - Printable-ASCII sanitization of extracted document text
//! - Deterministic length bounding with an explicit truncation marker
//! - Prompt construction from fixed instruction templates
//! - Mechanical re-flow of the model reply into a stable presentation layout
//! - Pluggable backend (ships with Google Gemini `generateContent`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexbrief::{Config, Pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .api_key(std::env::var("GEMINI_API_KEY")?)
//!     .build()?;
//!
//! let analysis = Pipeline::new(config)?
//!     .analyze("Raw contract text...", "contract.pdf")
//!     .await?;
//! println!("{analysis}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library follows a linear pipeline architecture:
//! 1. **Sanitizer**: Normalizes raw text to printable, collapsed form
//! 2. **Bounder**: Caps content length with a disclosure marker
//! 3. **Prompt Builder**: Combines fixed instructions with the content
//! 4. **Backend**: The single asynchronous, fallible boundary
//! 5. **Formatter**: Cleans the reply and wraps the presentation envelope

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;

mod bounder;
mod config;
mod error;
mod formatter;
mod pipeline;
mod prompt;
mod sanitizer;
mod template;

pub use backend::{BackendError, GeminiBackend, TextGenerator};
pub use bounder::TRUNCATION_MARKER;
pub use config::{Config, ConfigBuilder, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use prompt::{PromptPair, Section, SYSTEM_INSTRUCTION};

/// Analyzes a document with the given configuration.
///
/// This is the main entry point for the library; it builds a Gemini-backed
/// [`Pipeline`] and runs a single analysis.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - Document content is empty (raw or after sanitization)
/// - The backend call fails or returns no text
///
/// # Examples
///
/// ```no_run
/// use lexbrief::{analyze, Config};
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let config = Config::builder().api_key("secret").build()?;
/// let analysis = analyze(config, "Raw contract text...", "contract.pdf").await?;
/// # Ok(())
/// # }
/// ```
pub async fn analyze(config: Config, content: &str, file_name: &str) -> Result<String> {
    Pipeline::new(config)?.analyze(content, file_name).await
}
