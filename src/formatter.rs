//! Deterministic post-processing of the model's raw reply.
//!
//! LLM output formatting is not contractually guaranteed, so the layout the
//! prompt requests is enforced here mechanically: artifact markers are
//! stripped and every numbered item is forced onto its own line before the
//! reply is wrapped in the presentation envelope.

use crate::error::{Error, Result};
use crate::template::TemplateEngine;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static EMPHASIS_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*").expect("valid emphasis pattern"));

static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").expect("valid dash pattern"));

static NUMBERED_ITEMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.\s+)").expect("valid numbering pattern"));

static EXCESS_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n\n+").expect("valid blank-line pattern"));

static BOLD_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<b>(.*?)</b>").expect("valid bold-tag pattern"));

/// Strips formatting artifacts from a raw reply and re-flows numbering.
///
/// The rules run in a fixed order, each on the output of the previous:
/// markdown emphasis markers, dash runs, a newline before every numbered
/// item, blank-line collapse, then inline bold tags.
pub(crate) fn clean_reply(reply: &str) -> String {
    let cleaned = EMPHASIS_MARKERS.replace_all(reply, "");
    let cleaned = DASH_RUNS.replace_all(&cleaned, "");
    let cleaned = NUMBERED_ITEMS.replace_all(&cleaned, "\n$1");
    let cleaned = EXCESS_BLANK_LINES.replace_all(&cleaned, "\n\n");
    let cleaned = BOLD_TAGS.replace_all(&cleaned, "$1");
    cleaned.into_owned()
}

/// Formats a model reply into the final presentation document.
///
/// Cleans the reply and wraps it in the presentation envelope carrying the
/// uppercased file name, the analysis date and a reference line with the
/// original file name.
///
/// # Errors
///
/// Returns [`Error::EmptyReply`] if the reply contains no text, or a
/// template error if envelope rendering fails.
pub(crate) fn format_reply(
    engine: &TemplateEngine,
    reply: &str,
    file_name: &str,
) -> Result<String> {
    if reply.trim().is_empty() {
        return Err(Error::EmptyReply);
    }

    let body = clean_reply(reply);
    debug!(
        reply_chars = reply.chars().count(),
        body_chars = body.chars().count(),
        "cleaned model reply"
    );

    engine.render_envelope(file_name, &body)
}
