//! Normalizes raw model output into a summary string or a tag list.
//!
//! Models are asked for a bare JSON array of tags but routinely wrap it in
//! prose or code fences, drop quotes, or answer with a comma list. Tag
//! parsing therefore runs the candidate text through an ordered chain of
//! strategies, from strict JSON down to heuristic splitting.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MemoError, Result};
use crate::llm::prompts::MAX_TAGS;

/// First `[ ... ]` span, non-greedy, across newlines.
const BRACKETED_ARRAY: &str = r"(?s)\[.*?\]";

fn bracketed_array() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BRACKETED_ARRAY).expect("bracketed array pattern is valid"))
}

/// Trim a generated summary. Fails when nothing but whitespace came back.
pub fn parse_summary(raw: &str) -> Result<String> {
    let summary = raw.trim();
    if summary.is_empty() {
        return Err(MemoError::EmptyResult(
            "Summary generation returned no text".to_string(),
        ));
    }
    Ok(summary.to_string())
}

/// Extract at most [`MAX_TAGS`] distinct, non-blank tags from model output.
pub fn parse_tags(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    let candidate = bracketed_array()
        .find(raw)
        .map(|m| m.as_str())
        .unwrap_or(raw);

    let mut parsed = None;
    for strategy in TagStrategy::CHAIN {
        if let Some(tags) = strategy.parse(candidate)? {
            parsed = Some((strategy, tags));
            break;
        }
    }
    let (strategy, tags) = parsed.unwrap_or((TagStrategy::LenientSplit, Vec::new()));

    tracing::debug!(strategy = strategy.name(), count = tags.len(), "Parsed tag candidates");

    if tags.is_empty() {
        return Err(MemoError::EmptyResult(
            "Tag generation returned no usable tags".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let tags: Vec<String> = tags
        .into_iter()
        .take(MAX_TAGS)
        .filter(|tag| !tag.trim().is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

    if tags.is_empty() {
        return Err(MemoError::EmptyResult(
            "Tag generation returned only blank tags".to_string(),
        ));
    }

    Ok(tags)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagStrategy {
    /// The candidate is a JSON array of strings.
    StrictJson,
    /// Strip brackets and quotes, then split on commas and newlines.
    LenientSplit,
}

impl TagStrategy {
    const CHAIN: [TagStrategy; 2] = [TagStrategy::StrictJson, TagStrategy::LenientSplit];

    fn name(self) -> &'static str {
        match self {
            Self::StrictJson => "strict_json",
            Self::LenientSplit => "lenient_split",
        }
    }

    /// `Ok(None)` passes the candidate on to the next strategy.
    fn parse(self, candidate: &str) -> Result<Option<Vec<String>>> {
        match self {
            Self::StrictJson => strict_json(candidate),
            Self::LenientSplit => Ok(Some(lenient_split(candidate))),
        }
    }
}

/// Only a syntax error falls through. Well-formed JSON that is not an array
/// of strings is a failed generation.
fn strict_json(candidate: &str) -> Result<Option<Vec<String>>> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(candidate) else {
        return Ok(None);
    };

    serde_json::from_value::<Vec<String>>(value)
        .map(Some)
        .map_err(|e| {
            MemoError::EmptyResult(format!(
                "Tag generation returned JSON that is not a list of strings: {e}"
            ))
        })
}

fn lenient_split(candidate: &str) -> Vec<String> {
    let candidate = candidate.trim();
    let inner = candidate.strip_prefix('[').unwrap_or(candidate);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    let cleaned = inner.replace('"', "");

    cleaned
        .trim()
        .split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
