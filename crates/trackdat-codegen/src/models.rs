//! Persistence-model descriptor emitter
//!
//! One model class per relation, each carrying the two implicit audit
//! timestamps, its schema metadata classmethods, and one rendered
//! declaration per declared field.

use std::fmt::Write;

use trackdat_core::Design;

use crate::pylit::{escape, fields_literal};
use crate::render::render_field;
use crate::VERSION;

/// Create the contents of the persistence-model descriptor
pub fn create_models(design: &Design, gis_mode: bool) -> String {
    let models_path = if gis_mode {
        "django.contrib.gis.db"
    } else {
        "django.db"
    };

    let mut out = format!(
        "# Generated by trackdat v{VERSION}
import datetime

from decimal import Decimal
from {models_path} import models

"
    );

    for relation in &design.relations {
        let _ = write!(
            out,
            "\n\nclass {name}(models.Model):
    @classmethod
    def ptd_info(cls):
        return {info}

    @classmethod
    def get_label_name(cls):
        return '{label}'

    @classmethod
    def get_id_type(cls):
        return '{id_type}'

    class Meta:
        verbose_name = '{verbose}'

    pdt_created_at = models.DateTimeField(auto_now_add=True, null=False)
    pdt_modified_at = models.DateTimeField(auto_now=True, null=False)
",
            name = relation.name,
            info = fields_literal(&relation.fields, 8),
            label = escape(&relation.name),
            id_type = relation.id_type.as_str(),
            verbose = escape(&relation.display_name),
        );

        for field in &relation.fields {
            let _ = writeln!(out, "    {} = {}", field.name, render_field(field));
        }
    }

    out
}
