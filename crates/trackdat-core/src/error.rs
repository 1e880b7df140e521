//! Error types for trackdat-core

use thiserror::Error;

/// Result type alias for trackdat-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a design file
///
/// Every variant is fatal: the compilation aborts the moment one is raised
/// and no artifacts are produced. Non-fatal findings are reported through
/// [`crate::advisory::Advisories`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Design file could not be found
    #[error("design file not found: {path}")]
    DesignNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to read a CSV record from the design file
    #[error("failed to read design file: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field declared a data type outside the canonical vocabulary
    #[error("unknown data type specified for field '{field}': '{token}'")]
    UnknownDataType {
        /// Name of the offending field
        field: String,
        /// The normalized type token that failed validation
        token: String,
    },

    /// A relation declared more than one auto/manual key field
    #[error(
        "more than one primary key (auto/manual key) was specified for relation \
         '{relation}'; please only specify one primary key"
    )]
    MultiplePrimaryKeys {
        /// Name of the offending relation
        relation: String,
    },

    /// Two relation blocks resolved to the same relation name
    #[error("duplicate relation name '{relation}' in design file")]
    DuplicateRelation {
        /// The colliding relation name
        relation: String,
    },

    /// Two rows of one relation block resolved to the same field name
    #[error("duplicate field name '{field}' in relation '{relation}'")]
    DuplicateField {
        /// Relation containing the collision
        relation: String,
        /// The colliding field name
        field: String,
    },

    /// A choice-bearing text field declared a default outside its choices
    #[error(
        "default value for field '{field}' in relation '{relation}' does not match \
         any available choices for the field; available choices: {choices}"
    )]
    DefaultNotInChoices {
        /// Relation containing the field
        relation: String,
        /// Name of the offending field
        field: String,
        /// Comma-separated list of the declared choices
        choices: String,
    },

    /// An integer-typed field carried a default that is not an integer literal
    #[error("invalid integer default '{value}' for field '{field}'")]
    InvalidIntegerDefault {
        /// Name of the offending field
        field: String,
        /// The raw default text
        value: String,
    },

    /// A type-specific parameter was missing or malformed
    #[error("invalid parameter for field '{field}': {message}")]
    InvalidTypeParameter {
        /// Name of the offending field
        field: String,
        /// Description of what's invalid
        message: String,
    },

    /// The requested site name cannot become a package identifier
    #[error(
        "site name '{name}' cannot be turned into a valid package identifier; \
         please choose a different name"
    )]
    InvalidSiteName {
        /// The raw site name
        name: String,
    },
}
