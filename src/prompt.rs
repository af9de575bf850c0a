//! Prompt construction for the analysis request.
//!
//! The instruction is split into two segments: a fixed system instruction
//! describing what to produce (section ordering, formatting rules) and a
//! per-document user instruction carrying the bounded content. The split is
//! the only abstraction boundary between "what to produce" and "on what",
//! and lets the system half be reused verbatim across documents.

use crate::error::Result;
use crate::template::TemplateEngine;

/// Fixed system instruction sent with every analysis request.
///
/// Specifies the required section ordering, ALL-CAPS headers, the
/// numbered-items-on-new-lines rule, bullet style, date format and
/// paragraph length cap. The layout it requests is re-enforced
/// mechanically by the formatter; the instruction only biases the model
/// toward it.
pub const SYSTEM_INSTRUCTION: &str = include_str!("../templates/system_instruction.txt");

/// The sections every analysis must contain, in required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Concise overview of the document and key findings
    ExecutiveSummary,
    /// Type, jurisdiction, and parties involved
    DocumentClassification,
    /// Main legal provisions, dates, obligations, and requirements
    KeyPoints,
    /// Brief overview of objectives and implications
    Summary,
    /// Plain language explanations of complex terms
    LegalTerminology,
    /// Suggested next steps and resources
    Recommendations,
    /// Statement that the analysis is not legal advice
    Disclaimer,
}

impl Section {
    /// Returns the ALL-CAPS header for this section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "EXECUTIVE SUMMARY",
            Self::DocumentClassification => "DOCUMENT CLASSIFICATION",
            Self::KeyPoints => "KEY POINTS",
            Self::Summary => "SUMMARY",
            Self::LegalTerminology => "LEGAL TERMINOLOGY",
            Self::Recommendations => "RECOMMENDATIONS",
            Self::Disclaimer => "DISCLAIMER",
        }
    }

    /// Returns all sections in required order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ExecutiveSummary,
            Self::DocumentClassification,
            Self::KeyPoints,
            Self::Summary,
            Self::LegalTerminology,
            Self::Recommendations,
            Self::Disclaimer,
        ]
    }
}

/// The two instruction segments sent together to the LLM backend.
///
/// Immutable per call; the pipeline passes them to the backend in order
/// (system first, then user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// Fixed instruction describing required structure and formatting
    pub system_instruction: String,
    /// Per-document instruction embedding the bounded content
    pub user_instruction: String,
}

impl PromptPair {
    /// Returns the segments in the order the backend expects them.
    #[must_use]
    pub fn segments(&self) -> [String; 2] {
        [
            self.system_instruction.clone(),
            self.user_instruction.clone(),
        ]
    }
}

/// Builds the prompt pair for a bounded document.
///
/// # Errors
///
/// Returns an error if the user instruction template fails to render.
pub(crate) fn build_prompt(engine: &TemplateEngine, content: &str) -> Result<PromptPair> {
    Ok(PromptPair {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_instruction: engine.render_user_instruction(content)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_names_every_section_in_order() {
        let mut last = 0;
        for section in Section::all() {
            let pos = SYSTEM_INSTRUCTION[last..]
                .find(section.title())
                .unwrap_or_else(|| panic!("section {} missing or out of order", section.title()));
            last += pos + section.title().len();
        }
    }

    #[test]
    fn test_system_instruction_formatting_rules() {
        assert!(SYSTEM_INSTRUCTION.contains("ALL CAPS"));
        assert!(SYSTEM_INSTRUCTION.contains("DD/MM/YYYY"));
        assert!(SYSTEM_INSTRUCTION.contains("TERM: Definition"));
        assert!(SYSTEM_INSTRUCTION.contains("2-4 sentences"));
        assert!(SYSTEM_INSTRUCTION.contains("ALWAYS START A NEW LINE FOR EACH NUMBERED ITEM"));
    }

    #[test]
    fn test_build_prompt_embeds_content_verbatim() {
        let engine = TemplateEngine::new().unwrap();
        let pair = build_prompt(&engine, "This is a contract.").unwrap();

        assert_eq!(pair.system_instruction, SYSTEM_INSTRUCTION);
        assert!(pair.user_instruction.contains("This is a contract."));
        assert!(
            pair.user_instruction
                .contains("EVERY numbered item must start on a new line")
        );
    }

    #[test]
    fn test_segments_order() {
        let engine = TemplateEngine::new().unwrap();
        let pair = build_prompt(&engine, "text").unwrap();
        let [system, user] = pair.segments();

        assert_eq!(system, pair.system_instruction);
        assert_eq!(user, pair.user_instruction);
    }

    #[test]
    fn test_section_titles_are_upper_case() {
        for section in Section::all() {
            let title = section.title();
            assert_eq!(title, title.to_uppercase());
        }
    }
}
