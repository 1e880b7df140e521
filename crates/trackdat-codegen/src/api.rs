//! API descriptor emitter
//!
//! A serializer and a resource endpoint per relation, plus a meta endpoint
//! reporting the site name, the GIS flag, and the full relation list. The
//! categorical-counts action aggregates over choice-bearing fields.

use std::fmt::Write;

use trackdat_core::{Design, Relation};

use crate::pylit::{py_bool, relations_literal};
use crate::VERSION;

/// Create the contents of the API descriptor
pub fn create_api(design: &Design, site_name: &str, gis_mode: bool) -> String {
    let mut out = format!(
        "# Generated by trackdat v{VERSION}

from rest_framework import serializers
from rest_framework import viewsets
from rest_framework.decorators import action
from rest_framework.response import Response
from rest_framework.routers import DefaultRouter

from core.models import *
from snapshot_manager.models import Snapshot

api_router = DefaultRouter()


class SnapshotSerializer(serializers.ModelSerializer):
    class Meta:
        model = Snapshot
        fields = ['pdt_created_at', 'pdt_modified_at', 'snapshot_type', 'name', 'reason', 'size']


class SnapshotViewSet(viewsets.ModelViewSet):
    queryset = Snapshot.objects.all()
    serializer_class = SnapshotSerializer


api_router.register(r'snapshots', SnapshotViewSet)


class MetaViewSet(viewsets.ViewSet):
    def list(self, _request):
        return Response({{
            \"site_name\": \"{site_name}\",
            \"gis_mode\": {gis},
            \"relations\": {relations}
        }})


api_router.register(r'meta', MetaViewSet, basename='meta')

",
        gis = py_bool(gis_mode),
        relations = relations_literal(design, 12),
    );

    for relation in &design.relations {
        write_relation(&mut out, relation);
    }

    out
}

fn write_relation(out: &mut String, relation: &Relation) {
    let field_names: Vec<String> = relation
        .fields
        .iter()
        .map(|f| f.name.clone())
        .collect();
    let categorical: Vec<String> = relation
        .fields
        .iter()
        .filter(|f| f.choices().is_some())
        .map(|f| f.name.clone())
        .collect();

    let _ = write!(
        out,
        "
class {name}Serializer(serializers.ModelSerializer):
    class Meta:
        model = {name}
        fields = ['{fields}']


class {name}ViewSet(viewsets.ModelViewSet):
    queryset = {name}.objects.all()
    serializer_class = {name}Serializer

    @action(detail=False)
    def categorical_counts(self, _request):
        counts = {{}}
        categorical_fields = [{categorical}]
        for row in {name}.objects.values():
            for f in categorical_fields:
                counts[f] = counts.get(f, {{}})
                counts[f][row[f]] = counts[f].get(row[f], 0) + 1
        return Response(counts)


api_router.register(r'data/{route}', {name}ViewSet)

",
        name = relation.name,
        route = relation.route,
        fields = field_names.join("', '"),
        categorical = if categorical.is_empty() {
            String::new()
        } else {
            format!("'{}'", categorical.join("', '"))
        },
    );
}
