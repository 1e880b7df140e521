//! Non-fatal compilation diagnostics
//!
//! Advisories never stop a compile; they are collected in order and handed
//! back to the caller alongside the schema, which decides how to surface
//! them (the CLI logs each one as a warning).

use std::fmt;

/// A single non-fatal finding tied to a field or the overall invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// More positional parameters were supplied than the type recognizes
    ExtraParameters {
        /// Name of the field
        field: String,
        /// Names of the parameters the type does recognize
        recognized: Vec<&'static str>,
    },

    /// A `DD-MM-YYYY`-shaped date default was accepted with assumed ordering
    AmbiguousDateOrder {
        /// Name of the field
        field: String,
        /// The raw default text
        value: String,
    },

    /// A date default matched no supported shape and was dropped
    UnparseableDate {
        /// Name of the field
        field: String,
        /// The raw default text
        value: String,
    },

    /// A time default matched no supported shape and was dropped
    UnparseableTime {
        /// Name of the field
        field: String,
        /// The raw default text
        value: String,
    },

    /// A field used the `unknown` type fallback
    UnknownTypeFallback {
        /// Name of the field
        field: String,
    },

    /// The requested site name was altered to become a valid identifier
    SiteNameSanitized {
        /// The site name as supplied
        raw: String,
        /// The identifier actually used
        sanitized: String,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ExtraParameters { field, recognized } => {
                if recognized.is_empty() {
                    write!(
                        f,
                        "more additional settings specified for field '{field}' than can \
                         be used; the type takes none"
                    )
                } else {
                    write!(
                        f,
                        "more additional settings specified for field '{field}' than can \
                         be used; available settings: '{}'",
                        recognized.join("', '")
                    )
                }
            }
            Advisory::AmbiguousDateOrder { field, value } => write!(
                f,
                "assuming day-month-year ordering for ambiguously-formatted date \
                 default '{value}' of field '{field}'"
            ),
            Advisory::UnparseableDate { field, value } => write!(
                f,
                "default value '{value}' for date-typed field '{field}' does not match \
                 any supported format; ignoring it"
            ),
            Advisory::UnparseableTime { field, value } => write!(
                f,
                "default value '{value}' for time-typed field '{field}' does not match \
                 any supported format; ignoring it"
            ),
            Advisory::UnknownTypeFallback { field } => write!(
                f,
                "field '{field}' uses the 'unknown' data type; treating it as text"
            ),
            Advisory::SiteNameSanitized { raw, sanitized } => write!(
                f,
                "site name '{raw}' is not a valid package identifier; using \
                 '{sanitized}' instead"
            ),
        }
    }
}

/// Ordered collection of advisories from one compilation
#[derive(Debug, Default)]
pub struct Advisories {
    items: Vec<Advisory>,
}

impl Advisories {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory
    pub fn push(&mut self, advisory: Advisory) {
        tracing::debug!(advisory = %advisory, "recorded advisory");
        self.items.push(advisory);
    }

    /// Number of advisories recorded
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no advisories were recorded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the advisories in recording order
    pub fn iter(&self) -> std::slice::Iter<'_, Advisory> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Advisories {
    type Item = &'a Advisory;
    type IntoIter = std::slice::Iter<'a, Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
