//! Python literal rendering
//!
//! The generated artifacts embed schema data as Python literals (the
//! `ptd_info` classmethod and the meta endpoint's relation dump). This
//! module is the one place that knows how to spell a schema value in
//! Python source.

use trackdat_core::{DefaultValue, Design, Field, Relation};

/// Escape text for embedding in a single-quoted Python string literal:
/// backslash first, then single quote.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// A single-quoted Python string literal
pub fn py_str(text: &str) -> String {
    format!("'{}'", escape(text))
}

/// A Python boolean literal
pub fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// A Python tuple of string literals, with the single-element trailing comma
pub fn py_str_tuple(items: &[String]) -> String {
    match items {
        [only] => format!("({},)", py_str(only)),
        _ => format!(
            "({})",
            items.iter().map(|i| py_str(i)).collect::<Vec<_>>().join(", ")
        ),
    }
}

/// A Python list of string literals
pub fn py_str_list(items: &[String]) -> String {
    format!(
        "[{}]",
        items.iter().map(|i| py_str(i)).collect::<Vec<_>>().join(", ")
    )
}

/// A typed default as a Python literal
pub fn py_default(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Int(n) => n.to_string(),
        DefaultValue::Bool(b) => py_bool(*b).to_string(),
        DefaultValue::Text(s) => py_str(s),
        DefaultValue::Date(d) => {
            use chrono::Datelike;
            format!("datetime.date({}, {}, {})", d.year(), d.month(), d.day())
        }
        DefaultValue::Time(t) => {
            use chrono::Timelike;
            format!("datetime.time({}, {}, {})", t.hour(), t.minute(), t.second())
        }
    }
}

/// One field record as a Python dict literal
pub fn field_literal(field: &Field) -> String {
    let mut entries = vec![
        format!("'name': {}", py_str(&field.name)),
        format!("'csv_name': {}", py_str(&field.csv_name)),
        format!("'data_type': {}", py_str(field.data_type.as_str())),
        format!("'nullable': {}", py_bool(field.nullable)),
        format!("'null_values': {}", py_str_tuple(&field.null_values)),
        format!(
            "'default': {}",
            field
                .default
                .as_ref()
                .map_or_else(|| "None".to_string(), py_default)
        ),
        format!("'description': {}", py_str(&field.description)),
        format!("'additional_fields': {}", py_str_list(&field.additional)),
    ];

    if let Some(choices) = field.choices() {
        entries.push(format!("'choices': {}", py_str_tuple(choices)));
    }

    format!("{{{}}}", entries.join(", "))
}

/// A relation's field records as a Python list literal, one dict per line
pub fn fields_literal(fields: &[Field], indent: usize) -> String {
    if fields.is_empty() {
        return "[]".to_string();
    }

    let pad = " ".repeat(indent);
    let entries: Vec<String> = fields
        .iter()
        .map(|f| format!("{pad}    {}", field_literal(f)))
        .collect();
    format!("[\n{},\n{pad}]", entries.join(",\n"))
}

/// One relation as a Python dict literal
fn relation_literal(relation: &Relation, indent: usize) -> String {
    let pad = " ".repeat(indent);
    format!(
        "{pad}{{'name': {}, 'name_lower': {}, 'id_type': {}, 'fields': {}}}",
        py_str(&relation.name),
        py_str(&relation.route),
        py_str(relation.id_type.as_str()),
        fields_literal(&relation.fields, indent),
    )
}

/// The whole relation list as a Python list literal
pub fn relations_literal(design: &Design, indent: usize) -> String {
    if design.relations.is_empty() {
        return "[]".to_string();
    }

    let pad = " ".repeat(indent);
    let entries: Vec<String> = design
        .relations
        .iter()
        .map(|r| relation_literal(r, indent + 4))
        .collect();
    format!("[\n{},\n{pad}]", entries.join(",\n"))
}
