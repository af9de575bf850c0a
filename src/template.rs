use crate::error::{Error, Result};
use tera::{Context, Tera};

/// Template engine for the two variable text artifacts the pipeline renders:
/// the user instruction sent to the backend and the presentation envelope
/// wrapped around the cleaned reply.
///
/// Both layouts are configuration data shipped under `templates/`, not
/// strings scattered through control flow.
pub(crate) struct TemplateEngine {
    tera: Tera,
}

const USER_INSTRUCTION_TEMPLATE: &str = "user_instruction";
const ENVELOPE_TEMPLATE: &str = "envelope";

impl TemplateEngine {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub(crate) fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template(
            USER_INSTRUCTION_TEMPLATE,
            include_str!("../templates/user_instruction.tera"),
        )
        .map_err(|e| Error::template(USER_INSTRUCTION_TEMPLATE, e))?;

        tera.add_raw_template(
            ENVELOPE_TEMPLATE,
            include_str!("../templates/envelope.tera"),
        )
        .map_err(|e| Error::template(ENVELOPE_TEMPLATE, e))?;

        Ok(Self { tera })
    }

    /// Renders the user instruction: the bounded document content embedded
    /// verbatim, followed by the restated numbering reminder with its worked
    /// example.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub(crate) fn render_user_instruction(&self, content: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("content", content);

        self.tera
            .render(USER_INSTRUCTION_TEMPLATE, &context)
            .map_err(|e| Error::template(USER_INSTRUCTION_TEMPLATE, e))
    }

    /// Renders the presentation envelope around a cleaned reply body:
    /// title banner, uppercased file name, the body, then the footer with
    /// the analysis date and the original file name as a reference.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub(crate) fn render_envelope(&self, file_name: &str, body: &str) -> Result<String> {
        let analysis_date = chrono::Local::now().format("%d/%m/%Y").to_string();

        let mut context = Context::new();
        context.insert("file_name", file_name);
        context.insert("body", body);
        context.insert("analysis_date", &analysis_date);

        self.tera
            .render(ENVELOPE_TEMPLATE, &context)
            .map_err(|e| Error::template(ENVELOPE_TEMPLATE, e))
    }
}
