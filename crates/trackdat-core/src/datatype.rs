//! Canonical data-type vocabulary
//!
//! Raw type tokens from the design file are normalized (trimmed, lowercased,
//! underscore and whitespace runs collapsed to single spaces) and checked
//! against a closed vocabulary. The six spatial types are only admitted when
//! GIS mode is enabled.

use serde::{Serialize, Serializer};

/// A canonical field data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// System-generated integer primary key
    AutoKey,
    /// Caller-supplied text primary key
    ManualKey,
    /// Reference to another relation
    ForeignKey,
    /// Integer
    Integer,
    /// Fixed-precision decimal
    Decimal,
    /// Floating point number
    Float,
    /// Boolean
    Boolean,
    /// Free or bounded text, optionally with an enumerated choice set
    Text,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Unrecognized source type; rendered through the text path
    Unknown,
    /// Spatial point (GIS mode only)
    Point,
    /// Spatial line string (GIS mode only)
    LineString,
    /// Spatial polygon (GIS mode only)
    Polygon,
    /// Spatial multi-point (GIS mode only)
    MultiPoint,
    /// Spatial multi-line-string (GIS mode only)
    MultiLineString,
    /// Spatial multi-polygon (GIS mode only)
    MultiPolygon,
}

impl DataType {
    /// Normalize a raw type token and look it up in the vocabulary.
    ///
    /// Returns `None` when the normalized token is not a canonical type, or
    /// when it names a spatial type while GIS mode is disabled.
    pub fn parse(token: &str, gis_mode: bool) -> Option<DataType> {
        let canonical = canonicalize(token);
        let data_type = match canonical.as_str() {
            "auto key" => DataType::AutoKey,
            "manual key" => DataType::ManualKey,
            "foreign key" => DataType::ForeignKey,
            "integer" => DataType::Integer,
            "decimal" => DataType::Decimal,
            "float" => DataType::Float,
            "boolean" => DataType::Boolean,
            "text" => DataType::Text,
            "date" => DataType::Date,
            "time" => DataType::Time,
            "unknown" => DataType::Unknown,
            "point" => DataType::Point,
            "line string" => DataType::LineString,
            "polygon" => DataType::Polygon,
            "multi point" => DataType::MultiPoint,
            "multi line string" => DataType::MultiLineString,
            "multi polygon" => DataType::MultiPolygon,
            _ => return None,
        };

        if data_type.is_spatial() && !gis_mode {
            return None;
        }

        Some(data_type)
    }

    /// The canonical token for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::AutoKey => "auto key",
            DataType::ManualKey => "manual key",
            DataType::ForeignKey => "foreign key",
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::Text => "text",
            DataType::Date => "date",
            DataType::Time => "time",
            DataType::Unknown => "unknown",
            DataType::Point => "point",
            DataType::LineString => "line string",
            DataType::Polygon => "polygon",
            DataType::MultiPoint => "multi point",
            DataType::MultiLineString => "multi line string",
            DataType::MultiPolygon => "multi polygon",
        }
    }

    /// Whether this is one of the two primary-key variants
    pub fn is_primary_key(&self) -> bool {
        matches!(self, DataType::AutoKey | DataType::ManualKey)
    }

    /// Whether this is a GIS-mode spatial type
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            DataType::Point
                | DataType::LineString
                | DataType::Polygon
                | DataType::MultiPoint
                | DataType::MultiLineString
                | DataType::MultiPolygon
        )
    }

    /// Names of the additional design-file parameters this type recognizes,
    /// in positional order. Supplying more is an advisory, not an error.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            DataType::ForeignKey => &["target relation"],
            DataType::Decimal => &["max digits", "decimal places"],
            DataType::Text | DataType::Unknown => &["max length", "options"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalize a raw type token: trim, lowercase, and collapse underscore and
/// whitespace runs to single spaces.
pub fn canonicalize(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
