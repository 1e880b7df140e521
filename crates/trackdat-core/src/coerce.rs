//! Type-directed coercion of raw default text
//!
//! Each field's raw default cell is converted into a typed value (or absence)
//! according to the field's canonical data type. Apart from malformed integer
//! literals, default problems never abort the compile; they are recorded as
//! advisories and the field proceeds without a default.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;

use crate::advisory::{Advisories, Advisory};
use crate::datatype::DataType;
use crate::error::{Error, Result};

static RE_DATE_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap());
static RE_DATE_DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").unwrap());

/// A typed default value carried by a field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Integer literal
    Int(i64),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Boolean
    Bool(bool),
    /// Verbatim trimmed text
    Text(String),
}

/// Coerce a raw default cell into a typed value for the given data type.
///
/// The boolean null-sentinel rule is the only path by which a boolean field
/// ends up without a default; every other type maps blank input to `None`.
pub fn coerce_default(
    field: &str,
    raw: &str,
    data_type: DataType,
    nullable: bool,
    null_values: &[String],
    advisories: &mut Advisories,
) -> Result<Option<DefaultValue>> {
    let trimmed = raw.trim();

    if trimmed.is_empty() && data_type != DataType::Boolean {
        return Ok(None);
    }

    match data_type {
        DataType::Integer => trimmed
            .parse::<i64>()
            .map(|n| Some(DefaultValue::Int(n)))
            .map_err(|_| Error::InvalidIntegerDefault {
                field: field.to_string(),
                value: trimmed.to_string(),
            }),

        DataType::Date => Ok(coerce_date(field, trimmed, advisories)),

        DataType::Time => Ok(coerce_time(field, trimmed, advisories)),

        DataType::Boolean => {
            if nullable
                && (trimmed.is_empty() || null_values.iter().any(|nv| nv == trimmed))
            {
                return Ok(None);
            }
            let truthy = matches!(trimmed.to_lowercase().as_str(), "y" | "yes" | "t" | "true");
            Ok(Some(DefaultValue::Bool(truthy)))
        }

        _ => Ok(Some(DefaultValue::Text(trimmed.to_string()))),
    }
}

/// Dates accept ISO `YYYY-MM-DD` first; a `DD-MM-YYYY` shape is accepted with
/// an advisory because day-first vs month-first cannot be distinguished.
fn coerce_date(field: &str, value: &str, advisories: &mut Advisories) -> Option<DefaultValue> {
    if RE_DATE_YMD.is_match(value) {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(DefaultValue::Date(date));
        }
    } else if RE_DATE_DMY.is_match(value) {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%d-%m-%Y") {
            advisories.push(Advisory::AmbiguousDateOrder {
                field: field.to_string(),
                value: value.to_string(),
            });
            return Some(DefaultValue::Date(date));
        }
    }

    advisories.push(Advisory::UnparseableDate {
        field: field.to_string(),
        value: value.to_string(),
    });
    None
}

fn coerce_time(field: &str, value: &str, advisories: &mut Advisories) -> Option<DefaultValue> {
    let format = if value.split(':').count() == 2 {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };

    match NaiveTime::parse_from_str(value, format) {
        Ok(time) => Some(DefaultValue::Time(time)),
        Err(_) => {
            advisories.push(Advisory::UnparseableTime {
                field: field.to_string(),
                value: value.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coerce(
        raw: &str,
        data_type: DataType,
        nullable: bool,
        null_values: &[&str],
    ) -> (Result<Option<DefaultValue>>, Advisories) {
        let mut advisories = Advisories::new();
        let null_values: Vec<String> = null_values.iter().map(|s| s.to_string()).collect();
        let result = coerce_default("f", raw, data_type, nullable, &null_values, &mut advisories);
        (result, advisories)
    }

    #[test]
    fn blank_is_none_for_non_boolean_types() {
        for data_type in [
            DataType::Integer,
            DataType::Text,
            DataType::Date,
            DataType::Time,
            DataType::Decimal,
            DataType::Float,
        ] {
            let (result, advisories) = coerce("   ", data_type, false, &[]);
            assert_eq!(result.unwrap(), None);
            assert!(advisories.is_empty());
        }
    }

    #[test]
    fn integer_defaults_parse() {
        let (result, _) = coerce("42", DataType::Integer, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Int(42)));
    }

    #[test]
    fn malformed_integer_default_is_fatal() {
        let (result, _) = coerce("4x", DataType::Integer, false, &[]);
        assert!(matches!(
            result,
            Err(Error::InvalidIntegerDefault { .. })
        ));
    }

    #[rstest]
    #[case("y")]
    #[case("YES")]
    #[case("t")]
    #[case("True")]
    #[case("TRUE")]
    fn boolean_truthy_tokens(#[case] raw: &str) {
        let (result, _) = coerce(raw, DataType::Boolean, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Bool(true)));
    }

    #[rstest]
    #[case("n")]
    #[case("no")]
    #[case("false")]
    #[case("maybe")]
    #[case("0")]
    fn boolean_other_tokens_are_false(#[case] raw: &str) {
        let (result, _) = coerce(raw, DataType::Boolean, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Bool(false)));
    }

    #[test]
    fn boolean_blank_is_false_when_not_nullable() {
        let (result, _) = coerce("", DataType::Boolean, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Bool(false)));
    }

    #[test]
    fn nullable_boolean_blank_or_sentinel_is_none() {
        let (result, _) = coerce("  ", DataType::Boolean, true, &[]);
        assert_eq!(result.unwrap(), None);

        let (result, _) = coerce("NA", DataType::Boolean, true, &["NA"]);
        assert_eq!(result.unwrap(), None);

        // A sentinel only suppresses the default when the field is nullable
        let (result, _) = coerce("NA", DataType::Boolean, false, &["NA"]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Bool(false)));
    }

    #[test]
    fn iso_date_parses_without_advisory() {
        let (result, advisories) = coerce("2020-01-15", DataType::Date, false, &[]);
        assert_eq!(
            result.unwrap(),
            Some(DefaultValue::Date(
                NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
            ))
        );
        assert!(advisories.is_empty());
    }

    #[test]
    fn day_first_date_parses_with_advisory() {
        let (result, advisories) = coerce("15-01-2020", DataType::Date, false, &[]);
        assert_eq!(
            result.unwrap(),
            Some(DefaultValue::Date(
                NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
            ))
        );
        assert_eq!(advisories.len(), 1);
        assert!(matches!(
            advisories.iter().next(),
            Some(Advisory::AmbiguousDateOrder { .. })
        ));
    }

    #[test]
    fn unparseable_date_is_none_with_advisory() {
        let (result, advisories) = coerce("Jan 15 2020", DataType::Date, false, &[]);
        assert_eq!(result.unwrap(), None);
        assert!(matches!(
            advisories.iter().next(),
            Some(Advisory::UnparseableDate { .. })
        ));
    }

    #[test]
    fn shape_matching_but_invalid_date_is_none_with_advisory() {
        let (result, advisories) = coerce("2020-13-40", DataType::Date, false, &[]);
        assert_eq!(result.unwrap(), None);
        assert_eq!(advisories.len(), 1);
    }

    #[test]
    fn times_accept_both_forms() {
        let (result, _) = coerce("09:30", DataType::Time, false, &[]);
        assert_eq!(
            result.unwrap(),
            Some(DefaultValue::Time(
                NaiveTime::from_hms_opt(9, 30, 0).unwrap()
            ))
        );

        let (result, _) = coerce("23:59:59", DataType::Time, false, &[]);
        assert_eq!(
            result.unwrap(),
            Some(DefaultValue::Time(
                NaiveTime::from_hms_opt(23, 59, 59).unwrap()
            ))
        );
    }

    #[test]
    fn unparseable_time_is_none_with_advisory() {
        let (result, advisories) = coerce("25:99", DataType::Time, false, &[]);
        assert_eq!(result.unwrap(), None);
        assert!(matches!(
            advisories.iter().next(),
            Some(Advisory::UnparseableTime { .. })
        ));
    }

    #[test]
    fn text_like_types_pass_through_trimmed() {
        let (result, _) = coerce("  hello  ", DataType::Text, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Text("hello".to_string())));

        // Floats keep their source text; rendering emits it verbatim
        let (result, _) = coerce("1.5", DataType::Float, false, &[]);
        assert_eq!(result.unwrap(), Some(DefaultValue::Text("1.5".to_string())));
    }
}
