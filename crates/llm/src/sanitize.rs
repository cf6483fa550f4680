//! Removes reasoning markup from model output.
//!
//! Reasoning models wrap their intermediate thinking in
//! `<think>...</think>` spans that are not meant to be user-facing.
//! The spans can cross line breaks and appear more than once.

use regex::Regex;

/// Pattern matching one reasoning span, non-greedy, newline-spanning.
const THINK_SPAN: &str = r"(?s)<think>.*?</think>";

/// Strip every reasoning span from `text` and trim the residue.
///
/// Idempotent: running it on already-clean text changes nothing.
/// Should the pattern itself ever fail to compile, the text passes
/// through with only the trim applied.
pub fn strip_reasoning(text: &str) -> String {
    match Regex::new(THINK_SPAN) {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}

/// Whether a cleaned answer carries no usable text.
///
/// The literal token `null` counts as empty: it is what a JSON null
/// renders to when flattened to text.
pub fn is_empty_answer(text: &str) -> bool {
    text.is_empty() || text == "null"
}
