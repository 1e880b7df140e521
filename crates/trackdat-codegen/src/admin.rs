//! Administrative-interface descriptor emitter
//!
//! One registered admin class per relation. The primary key leads the
//! display list; boolean and choice-bearing fields are filterable; every
//! field is eligible for advanced filtering.

use std::fmt::Write;

use trackdat_core::{DataType, Design, Relation};

use crate::VERSION;

/// Fields shown in the change list: the primary key first, then everything
/// that is not free text (choice-bearing text still qualifies).
pub fn display_fields(relation: &Relation) -> Vec<&str> {
    let mut fields: Vec<&str> = relation
        .fields
        .iter()
        .filter(|f| f.is_primary_key())
        .map(|f| f.name.as_str())
        .collect();

    fields.extend(
        relation
            .fields
            .iter()
            .filter(|f| {
                !matches!(
                    f.data_type,
                    DataType::Text | DataType::AutoKey | DataType::ManualKey
                ) || f.choices().is_some()
            })
            .map(|f| f.name.as_str()),
    );

    fields
}

/// Fields offered as change-list filters
pub fn filter_fields(relation: &Relation) -> Vec<&str> {
    relation
        .fields
        .iter()
        .filter(|f| f.data_type == DataType::Boolean || f.choices().is_some())
        .map(|f| f.name.as_str())
        .collect()
}

/// Every field is eligible for advanced filtering
pub fn advanced_filter_fields(relation: &Relation) -> Vec<&str> {
    relation.fields.iter().map(|f| f.name.as_str()).collect()
}

/// Create the contents of the administrative descriptor
pub fn create_admin(design: &Design, site_name: &str) -> String {
    let mut out = format!(
        "# Generated by trackdat v{VERSION}
from django.contrib import admin
from advanced_filters.admin import AdminAdvancedFiltersMixin

from core.models import *
from .export_csv import ExportCSVMixin
from .import_csv import ImportCSVMixin
from .export_labels import ExportLabelsMixin

admin.site.site_header = 'trackdat: {site_name}'

"
    );

    for relation in &design.relations {
        let _ = writeln!(out, "\n\n@admin.register({})", relation.name);
        let _ = writeln!(
            out,
            "class {}Admin(ExportCSVMixin, ImportCSVMixin, ExportLabelsMixin, \
             AdminAdvancedFiltersMixin, admin.ModelAdmin):",
            relation.name
        );
        out.push_str("    change_list_template = 'admin/core/change_list.html'\n");
        out.push_str("    actions = ['export_csv', 'export_labels']\n");

        let display = display_fields(relation);
        if display.len() > 1 {
            let _ = writeln!(out, "    list_display = {}", name_tuple(&display));
        }

        let filters = filter_fields(relation);
        if !filters.is_empty() {
            let _ = writeln!(out, "    list_filter = {}", name_tuple(&filters));
        }

        let advanced = advanced_filter_fields(relation);
        if !advanced.is_empty() {
            let _ = writeln!(out, "    advanced_filter_fields = {}", name_tuple(&advanced));
        }
    }

    out
}

/// The admin descriptor's tuple spelling: `('a', 'b',)`
fn name_tuple(names: &[&str]) -> String {
    format!("('{}',)", names.join("', '"))
}
