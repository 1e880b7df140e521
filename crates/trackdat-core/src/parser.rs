//! Design-file parser: CSV rows → validated relations
//!
//! The design file is a sequence of blocks separated by blank rows. Each
//! block opens with a row whose first cell names the relation; every
//! following row describes one field until a blank row or end of input ends
//! the block. A header with no field rows is discarded rather than reported.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use csv::StringRecord;

use crate::advisory::{Advisories, Advisory};
use crate::coerce::coerce_default;
use crate::datatype::{self, DataType};
use crate::error::{Error, Result};
use crate::ident;
use crate::schema::{Design, Field, IdType, Relation, TypeParams};

/// Tokens accepted as "true" in the nullable column (case-insensitive)
const TRUTHY_TOKENS: &[&str] = &["true", "t", "yes", "y"];

/// Fixed columns preceding the type-specific additional parameters
const ADDITIONAL_OFFSET: usize = 7;

/// A successfully compiled design plus its non-fatal findings
#[derive(Debug)]
pub struct Parsed {
    /// The validated relation list
    pub design: Design,
    /// Advisories recorded while parsing, in encounter order
    pub advisories: Advisories,
}

/// Parser for CSV design files
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    gis_mode: bool,
}

impl Parser {
    /// Create a parser; GIS mode extends the type vocabulary with the
    /// spatial types.
    pub fn new(gis_mode: bool) -> Self {
        Self { gis_mode }
    }

    /// Parse a design file from disk
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Parsed> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::DesignNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        self.parse_reader(file)
    }

    /// Parse a design file from any reader
    pub fn parse_reader<R: io::Read>(&self, reader: R) -> Result<Parsed> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut advisories = Advisories::new();
        let mut relations: Vec<Relation> = Vec::new();
        let mut seen_relations: HashSet<String> = HashSet::new();
        let mut current: Option<RelationBuilder> = None;

        let mut record = csv::StringRecord::new();
        let mut next_line = csv_reader.position().line();

        while csv_reader.read_record(&mut record)? {
            // The reader elides bare empty lines, so a jump past the line
            // where the next record was due means blank rows were skipped;
            // those end the block just like all-blank-cell rows do.
            let line = record.position().map_or(next_line, |p| p.line());
            if line > next_line {
                if let Some(relation) = current.take().and_then(RelationBuilder::finish) {
                    Self::register(relation, &mut relations, &mut seen_relations)?;
                }
            }
            next_line = csv_reader.position().line();

            let blank = record.iter().all(|cell| cell.trim().is_empty());

            if current.is_none() {
                // Seeking a relation header
                if !blank {
                    current = Some(RelationBuilder::new(record.get(0).unwrap_or("")));
                }
            } else if blank {
                // A blank row ends the block
                if let Some(relation) = current.take().and_then(RelationBuilder::finish) {
                    Self::register(relation, &mut relations, &mut seen_relations)?;
                }
            } else if let Some(builder) = current.as_mut() {
                builder.push_field(&record, self.gis_mode, &mut advisories)?;
            }
        }

        // End of input ends any open block
        if let Some(relation) = current.take().and_then(RelationBuilder::finish) {
            Self::register(relation, &mut relations, &mut seen_relations)?;
        }

        tracing::debug!(
            relations = relations.len(),
            advisories = advisories.len(),
            "parsed design file"
        );

        Ok(Parsed {
            design: Design { relations },
            advisories,
        })
    }

    fn register(
        relation: Relation,
        relations: &mut Vec<Relation>,
        seen: &mut HashSet<String>,
    ) -> Result<()> {
        if !seen.insert(relation.name.clone()) {
            return Err(Error::DuplicateRelation {
                relation: relation.name,
            });
        }
        relations.push(relation);
        Ok(())
    }
}

/// Accumulates one relation block's rows
struct RelationBuilder {
    name: String,
    display_name: String,
    route: String,
    fields: Vec<Field>,
    id_type: IdType,
    seen_fields: HashSet<String>,
}

impl RelationBuilder {
    fn new(header_cell: &str) -> Self {
        Self {
            name: ident::relation_ident(header_cell),
            display_name: ident::display_name(header_cell),
            route: ident::route_ident(header_cell),
            fields: Vec::new(),
            id_type: IdType::None,
            seen_fields: HashSet::new(),
        }
    }

    /// A header with zero field rows is discarded, not reported
    fn finish(self) -> Option<Relation> {
        if self.fields.is_empty() {
            return None;
        }
        Some(Relation {
            name: self.name,
            display_name: self.display_name,
            route: self.route,
            fields: self.fields,
            id_type: self.id_type,
        })
    }

    fn push_field(
        &mut self,
        record: &StringRecord,
        gis_mode: bool,
        advisories: &mut Advisories,
    ) -> Result<()> {
        // Short rows are padded with blanks; cell 0 passes through untrimmed
        let cell = |i: usize| record.get(i).unwrap_or("").trim();
        let csv_name = record.get(0).unwrap_or("").to_string();

        let name = ident::field_ident(cell(1));
        if !self.seen_fields.insert(name.clone()) {
            return Err(Error::DuplicateField {
                relation: self.name.clone(),
                field: name,
            });
        }

        let data_type =
            DataType::parse(cell(2), gis_mode).ok_or_else(|| Error::UnknownDataType {
                field: name.clone(),
                token: datatype::canonicalize(cell(2)),
            })?;
        if data_type == DataType::Unknown {
            advisories.push(Advisory::UnknownTypeFallback {
                field: name.clone(),
            });
        }

        if data_type.is_primary_key() {
            if self.id_type != IdType::None {
                return Err(Error::MultiplePrimaryKeys {
                    relation: self.name.clone(),
                });
            }
            self.id_type = match data_type {
                DataType::AutoKey => IdType::Integer,
                _ => IdType::Text,
            };
        }

        let nullable = TRUTHY_TOKENS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(cell(3)));
        let null_values: Vec<String> = cell(4)
            .split(';')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        let mut additional: Vec<String> = (ADDITIONAL_OFFSET..record.len())
            .map(|i| cell(i).to_string())
            .collect();
        while additional.last().is_some_and(|p| p.is_empty()) {
            additional.pop();
        }

        if additional.len() > data_type.param_names().len() {
            advisories.push(Advisory::ExtraParameters {
                field: name.clone(),
                recognized: data_type.param_names().to_vec(),
            });
        }

        let params = build_params(&self.name, &name, data_type, &additional)?;

        let raw_default = cell(5);
        let default = coerce_default(
            &name,
            raw_default,
            data_type,
            nullable,
            &null_values,
            advisories,
        )?;

        // A default on a choice-bearing text field must be one of the choices;
        // anything else describes an unsatisfiable schema.
        if let TypeParams::Text {
            choices: Some(choices),
            ..
        } = &params
        {
            if !raw_default.is_empty() && !choices.iter().any(|c| c == raw_default) {
                return Err(Error::DefaultNotInChoices {
                    relation: self.name.clone(),
                    field: cell(1).to_string(),
                    choices: choices.join(", "),
                });
            }
        }

        self.fields.push(Field {
            csv_name,
            name,
            data_type,
            nullable,
            null_values,
            default,
            description: cell(6).to_string(),
            additional,
            params,
        });

        Ok(())
    }
}

/// Build the structured parameter record for a field's type from its raw
/// positional parameters. Only the parameters the type recognizes are read.
fn build_params(
    relation: &str,
    field: &str,
    data_type: DataType,
    additional: &[String],
) -> Result<TypeParams> {
    match data_type {
        DataType::ForeignKey => {
            let target = additional
                .first()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| Error::InvalidTypeParameter {
                    field: field.to_string(),
                    message: format!(
                        "foreign key in relation '{relation}' requires a target relation name"
                    ),
                })?;
            Ok(TypeParams::ForeignKey {
                target: ident::relation_ident(target),
            })
        }

        DataType::Decimal => {
            let parse = |index: usize, what: &str| -> Result<u32> {
                additional
                    .get(index)
                    .and_then(|p| p.parse::<u32>().ok())
                    .ok_or_else(|| Error::InvalidTypeParameter {
                        field: field.to_string(),
                        message: format!("decimal requires an integer {what} parameter"),
                    })
            };
            Ok(TypeParams::Decimal {
                max_digits: parse(0, "max digits")?,
                decimal_places: parse(1, "decimal places")?,
            })
        }

        DataType::Text | DataType::Unknown => {
            let max_length = additional.first().and_then(|p| p.parse::<u32>().ok());

            let labels: Vec<String> = additional
                .get(1)
                .map(|raw| {
                    raw.split(';')
                        .map(str::trim)
                        .filter(|label| !label.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            // Distinct labels, order preserved; a single label is not a
            // choice set
            let mut distinct: Vec<String> = Vec::new();
            for label in labels {
                if !distinct.contains(&label) {
                    distinct.push(label);
                }
            }
            let choices = (distinct.len() > 1).then_some(distinct);

            Ok(TypeParams::Text {
                max_length,
                choices,
            })
        }

        _ => Ok(TypeParams::None),
    }
}
