// SPDX-License-Identifier: MIT

//! Extraction of structured pieces from raw model output.
//!
//! The generator model wraps its answer in a tag micro-format:
//! `<code-file>` for the page source, `<metadata>` for a JSON block, plus
//! `<explanation>` and `<dependencies>` sections that get stripped. The
//! checker model answers `NEW` or `FOUND:<id>`.

use crate::error::AppError;
use crate::models::AlgorithmMetadata;
use regex::Regex;
use std::sync::OnceLock;

fn metadata_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<metadata>\s*(\{.*?\})\s*</metadata>").unwrap())
}

fn explanation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<explanation>.*?</explanation>").unwrap())
}

fn dependencies_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<dependencies(-file)?>.*?</dependencies(-file)?>").unwrap())
}

fn code_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<code-file[^>]*>(.*?)</code-file>").unwrap())
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

fn found_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)FOUND\s*:\s*([A-Za-z0-9_-]+)").unwrap())
}

/// Why metadata extraction failed. Callers must handle both branches
/// explicitly instead of receiving a null.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No <metadata> block in model output")]
    MissingMetadata,

    #[error("Metadata block is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Metadata is missing required fields: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::MalformedOutput(err.to_string())
    }
}

/// Extract the raw JSON value from the `<metadata>` block.
pub fn extract_metadata_json(raw: &str) -> Result<serde_json::Value, ExtractError> {
    let captures = metadata_re()
        .captures(raw)
        .ok_or(ExtractError::MissingMetadata)?;

    serde_json::from_str(&captures[1]).map_err(ExtractError::InvalidJson)
}

/// Extract and schema-validate the metadata block from raw model output.
pub fn extract_metadata(raw: &str) -> Result<AlgorithmMetadata, ExtractError> {
    let value = extract_metadata_json(raw)?;
    serde_json::from_value(value).map_err(ExtractError::SchemaMismatch)
}

/// Clean raw model output down to page source.
///
/// Strips `<explanation>` and `<dependencies>` regions, extracts the first
/// `<code-file>` block's inner text, and collapses runs of 3+ newlines to
/// exactly 2. When no `<code-file>` block is present the remainder is
/// returned with the `<metadata>` block stripped as well, so a tag-less
/// completion never persists its JSON as page source and the transform
/// stays idempotent.
pub fn clean_output(raw: &str) -> String {
    let content = raw.trim();
    let content = explanation_re().replace_all(content, "");
    let content = dependencies_re().replace_all(&content, "");

    let extracted = match code_file_re().captures(&content) {
        Some(captures) => captures[1].trim().to_string(),
        None => metadata_re().replace_all(&content, "").trim().to_string(),
    };

    blank_lines_re().replace_all(&extracted, "\n\n").to_string()
}

/// The checker model's verdict on a requested algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerDecision {
    /// Not in the catalog; generate a new page.
    New,
    /// Already stored under this document ID.
    Found(String),
}

/// Parse the checker completion. Anything that is neither the literal `NEW`
/// nor a recognizable `FOUND:<id>` falls back to `New`, so an off-script
/// checker can only cost an extra generation, never block one.
pub fn parse_checker_decision(raw: &str) -> CheckerDecision {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("NEW") {
        return CheckerDecision::New;
    }

    if let Some(captures) = found_re().captures(trimmed) {
        return CheckerDecision::Found(captures[1].to_string());
    }

    tracing::warn!(response = trimmed, "Unrecognized checker output, treating as NEW");
    CheckerDecision::New
}
