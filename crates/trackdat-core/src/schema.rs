//! Validated schema model produced by the design-file parser
//!
//! Built once during parsing and immutable afterwards; each emitter walks
//! the same relation list independently.

use serde::Serialize;

use crate::coerce::DefaultValue;
use crate::datatype::DataType;

/// Which primary-key variant a relation carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// No primary-key field was declared
    #[default]
    None,
    /// An `auto key` field (system-generated integer key)
    Integer,
    /// A `manual key` field (caller-supplied text key)
    Text,
}

impl IdType {
    /// Token emitted into generated artifacts
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::None => "",
            IdType::Integer => "integer",
            IdType::Text => "text",
        }
    }
}

/// Structured, per-type parameters extracted from a field's positional
/// additional-parameter list during parsing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParams {
    /// The type takes no parameters
    None,
    /// Foreign keys name their target relation
    ForeignKey {
        /// Sanitized name of the referenced relation
        target: String,
    },
    /// Decimals carry numeric precision and scale
    Decimal {
        /// Total number of digits
        max_digits: u32,
        /// Digits after the decimal point
        decimal_places: u32,
    },
    /// Text fields may bound their length and enumerate their values
    Text {
        /// Maximum length; unbounded text when absent
        max_length: Option<u32>,
        /// Distinct choice labels, present only when two or more remain
        choices: Option<Vec<String>>,
    },
}

/// One typed column description within a relation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Original source column header, passed through untouched
    pub csv_name: String,
    /// Sanitized identifier, unique within the relation
    pub name: String,
    /// Canonical data type
    pub data_type: DataType,
    /// Whether the field admits null values
    pub nullable: bool,
    /// Sentinel strings meaning "no value" in source data
    pub null_values: Vec<String>,
    /// Typed default, absent when none was declared or none survived coercion
    pub default: Option<DefaultValue>,
    /// Free-text help string, escaped at emission time
    pub description: String,
    /// Raw positional additional parameters, trailing blanks dropped
    pub additional: Vec<String>,
    /// Structured view of the parameters for this field's type
    pub params: TypeParams,
}

impl Field {
    /// Whether this field is the relation's primary key
    pub fn is_primary_key(&self) -> bool {
        self.data_type.is_primary_key()
    }

    /// The field's enumerated choice labels, if it carries any
    pub fn choices(&self) -> Option<&[String]> {
        match &self.params {
            TypeParams::Text {
                choices: Some(choices),
                ..
            } => Some(choices),
            _ => None,
        }
    }
}

/// One named relation (table) from the design file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    /// Sanitized class identifier, unique across the design file
    pub name: String,
    /// Human-facing label
    pub display_name: String,
    /// Lowercase token used for API endpoint registration
    pub route: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Which primary-key variant (if any) was declared
    pub id_type: IdType,
}

impl Relation {
    /// The declared primary-key field, if any
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_primary_key())
    }
}

/// A fully validated design: the relation list in encounter order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Design {
    /// Relations in design-file order
    pub relations: Vec<Relation>,
}
