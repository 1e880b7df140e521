//! Django field declaration rendering
//!
//! One closed dispatch over the canonical type vocabulary; every variant has
//! a renderer, so a new type is a compile error until it can be emitted.
//! Help text is always embedded, escaped for a single-quoted literal.
//! Spatial fields never render nullability or a default: they are always
//! required.

use trackdat_core::{DataType, DefaultValue, Field, TypeParams};

use crate::pylit::{escape, py_bool, py_str};

/// Render one field into its model declaration snippet
pub fn render_field(field: &Field) -> String {
    let help = escape(&field.description);

    match field.data_type {
        DataType::AutoKey => {
            format!("models.AutoField(primary_key=True, help_text='{help}')")
        }

        DataType::ManualKey => {
            format!("models.CharField(primary_key=True, max_length=127, help_text='{help}')")
        }

        DataType::ForeignKey => {
            let TypeParams::ForeignKey { target } = &field.params else {
                unreachable!("parser attaches a target relation to foreign keys")
            };
            format!("models.ForeignKey('{target}', help_text='{help}', on_delete=models.CASCADE)")
        }

        DataType::Integer | DataType::Float => {
            let model = if field.data_type == DataType::Integer {
                "IntegerField"
            } else {
                "FloatField"
            };
            format!(
                "models.{model}(help_text='{help}', null={}{})",
                py_bool(field.nullable),
                bare_default_suffix(field.default.as_ref()),
            )
        }

        DataType::Decimal => {
            let TypeParams::Decimal {
                max_digits,
                decimal_places,
            } = &field.params
            else {
                unreachable!("parser attaches precision and scale to decimals")
            };
            let default = match &field.default {
                Some(DefaultValue::Text(raw)) => format!(", default=Decimal({raw})"),
                _ => String::new(),
            };
            format!(
                "models.DecimalField(help_text='{help}', max_digits={max_digits}, \
                 decimal_places={decimal_places}, null={}{default})",
                py_bool(field.nullable),
            )
        }

        DataType::Boolean => {
            let default = match &field.default {
                Some(DefaultValue::Bool(b)) => format!(", default={}", py_bool(*b)),
                _ => String::new(),
            };
            format!(
                "models.BooleanField(help_text='{help}', null={}{default})",
                py_bool(field.nullable),
            )
        }

        DataType::Text | DataType::Unknown => render_text(field, &help),

        DataType::Date => {
            let default = match &field.default {
                Some(default @ DefaultValue::Date(_)) => {
                    format!(", default={}", crate::pylit::py_default(default))
                }
                _ => String::new(),
            };
            format!(
                "models.DateField(help_text='{help}', null={}{default})",
                py_bool(field.nullable),
            )
        }

        DataType::Time => {
            let default = match &field.default {
                Some(default @ DefaultValue::Time(_)) => {
                    format!(", default={}", crate::pylit::py_default(default))
                }
                _ => String::new(),
            };
            format!(
                "models.TimeField(help_text='{help}', null={}{default})",
                py_bool(field.nullable),
            )
        }

        DataType::Point => format!("models.PointField(help_text='{help}')"),
        DataType::LineString => format!("models.LineStringField(help_text='{help}')"),
        DataType::Polygon => format!("models.PolygonField(help_text='{help}')"),
        DataType::MultiPoint => format!("models.MultiPointField(help_text='{help}')"),
        DataType::MultiLineString => {
            format!("models.MultiLineStringField(help_text='{help}')")
        }
        DataType::MultiPolygon => format!("models.MultiPolygonField(help_text='{help}')"),
    }
}

/// Text fields: bounded CharField when a max length parsed, otherwise
/// TextField; choice sets render each label paired with itself.
fn render_text(field: &Field, help: &str) -> String {
    let TypeParams::Text {
        max_length,
        choices,
    } = &field.params
    else {
        unreachable!("parser attaches text parameters to text-like fields")
    };

    let model = if max_length.is_some() {
        "CharField"
    } else {
        "TextField"
    };

    let default = match &field.default {
        Some(DefaultValue::Text(raw)) => format!(", default={}", py_str(raw)),
        _ => String::new(),
    };

    let choices = choices.as_ref().map_or_else(String::new, |labels| {
        let pairs: Vec<String> = labels
            .iter()
            .map(|label| format!("({0}, {0})", py_str(label)))
            .collect();
        format!(", choices=({})", pairs.join(", "))
    });

    let length = max_length.map_or_else(String::new, |n| format!(", max_length={n}"));

    format!("models.{model}(help_text='{help}'{default}{choices}{length})")
}

/// Integers and floats print their default without quoting
fn bare_default_suffix(default: Option<&DefaultValue>) -> String {
    match default {
        Some(DefaultValue::Int(n)) => format!(", default={n}"),
        Some(DefaultValue::Text(raw)) => format!(", default={raw}"),
        _ => String::new(),
    }
}
