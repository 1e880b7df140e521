//! Identifier sanitization for generated artifacts
//!
//! Design files carry free-text names for relations, fields, and the site
//! itself; everything emitted into the generated project must be a valid
//! Python identifier. The rules here are lossy but deterministic.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Reserved words that may not be used verbatim as field identifiers
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

static RE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]+$").unwrap());

/// Split a raw name into lowercase alphanumeric words
fn words(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sanitized snake-case identifier for a field name
pub fn field_ident(raw: &str) -> String {
    let mut ident = words(raw).join("_");

    if ident.is_empty() {
        ident = "field".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("f_{ident}");
    }
    if PYTHON_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(&ident)) {
        ident.push_str("_field");
    }

    ident
}

/// Sanitized CamelCase class identifier for a relation name
pub fn relation_ident(raw: &str) -> String {
    let mut ident: String = words(raw)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if ident.is_empty() {
        ident = "Relation".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("R{ident}");
    }

    ident
}

/// Human-facing label for a relation, derived from the same word split
pub fn display_name(raw: &str) -> String {
    let label: Vec<String> = words(raw)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if label.is_empty() {
        raw.trim().to_string()
    } else {
        label.join(" ")
    }
}

/// Lowercase route token used for API endpoint registration
pub fn route_ident(raw: &str) -> String {
    field_ident(raw)
}

/// A sanitized site/package identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteName {
    /// The identifier actually usable as a package name
    pub name: String,
    /// Whether sanitization changed the raw input
    pub altered: bool,
}

/// Sanitize a raw site name into a package identifier.
///
/// Fails when nothing identifier-like survives sanitization; the caller is
/// expected to warn when `altered` is set.
pub fn site_ident(raw: &str) -> Result<SiteName> {
    let stripped = raw.trim();
    let name = words(stripped).join("_");

    if !RE_PACKAGE_NAME.is_match(&name) {
        return Err(Error::InvalidSiteName {
            name: stripped.to_string(),
        });
    }

    Ok(SiteName {
        altered: name != stripped,
        name,
    })
}
