//! Integration tests for the design-file compiler
//!
//! Exercises the full parse path over realistic multi-block design files,
//! including the file-based entry point.

use trackdat_core::{Advisory, DataType, Error, IdType, Parser};

/// Three relations, varied types, one cross-relation reference; blocks are
/// separated by a blank-cell row and by a bare empty line.
const FIELD_SITES: &str = "\
sites,,,,,,
Site ID,site_id,manual key,,,,Unique site identifier
Name,name,text,false,,,Site name,127
Latitude,latitude,decimal,true,NA,,Site latitude,10,7
Longitude,longitude,decimal,true,NA,,Site longitude,10,7
,,,,,,
visits,,,,,,
Visit ID,visit_id,auto key,,,,Visit key
Site,site,foreign key,,,,Visited site,sites
Date,date,date,true,NA;ND,,Visit date
Verified,verified,boolean,true,NA,,Whether the visit was verified

observations,,,,,,
Observation ID,observation_id,auto key,,,,Observation key
Visit,visit,foreign key,,,,Observing visit,visits
Condition,condition,text,,,good,Specimen condition,,good;fair;poor
Count,count,integer,false,,0,Number observed
";

const ROWS_PER_RELATION: [usize; 3] = [4, 4, 4];

#[test]
fn block_and_row_counts_survive_parsing() {
    let parsed = Parser::new(false)
        .parse_reader(FIELD_SITES.as_bytes())
        .unwrap();
    let relations = &parsed.design.relations;

    assert_eq!(relations.len(), ROWS_PER_RELATION.len());
    for (relation, expected) in relations.iter().zip(ROWS_PER_RELATION) {
        assert_eq!(relation.fields.len(), expected, "{}", relation.name);
    }

    let names: Vec<_> = relations.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Sites", "Visits", "Observations"]);
    assert!(parsed.advisories.is_empty());
}

#[test]
fn id_types_follow_the_key_variant() {
    let parsed = Parser::new(false)
        .parse_reader(FIELD_SITES.as_bytes())
        .unwrap();
    let relations = &parsed.design.relations;

    assert_eq!(relations[0].id_type, IdType::Text);
    assert_eq!(relations[1].id_type, IdType::Integer);
    assert_eq!(relations[0].primary_key().unwrap().name, "site_id");
}

#[test]
fn null_sentinels_and_defaults_are_parsed_per_field() {
    let parsed = Parser::new(false)
        .parse_reader(FIELD_SITES.as_bytes())
        .unwrap();
    let visits = &parsed.design.relations[1];

    let date = &visits.fields[2];
    assert_eq!(date.null_values, vec!["NA", "ND"]);
    assert!(date.default.is_none());

    let observations = &parsed.design.relations[2];
    let condition = &observations.fields[2];
    assert_eq!(
        condition.choices(),
        Some(
            &[
                "good".to_string(),
                "fair".to_string(),
                "poor".to_string()
            ][..]
        )
    );
}

#[test]
fn gis_design_admits_spatial_fields() {
    let csv = "\
parcels,,,,,,
Parcel ID,parcel_id,auto key,,,,Key
Boundary,boundary,polygon,,,,Parcel boundary
Centre,centre,point,,,,Parcel centre
";
    let parsed = Parser::new(true).parse_reader(csv.as_bytes()).unwrap();
    let fields = &parsed.design.relations[0].fields;
    assert_eq!(fields[1].data_type, DataType::Polygon);
    assert_eq!(fields[2].data_type, DataType::Point);
}

#[test]
fn ambiguous_date_defaults_warn_but_compile() {
    let csv = "\
visits,,,,,,
Visit ID,visit_id,auto key,,,,Key
Date,date,date,,,15-01-2020,Visit date
";
    let parsed = Parser::new(false).parse_reader(csv.as_bytes()).unwrap();
    assert_eq!(parsed.advisories.len(), 1);
    assert!(matches!(
        parsed.advisories.iter().next(),
        Some(Advisory::AmbiguousDateOrder { .. })
    ));
    assert!(parsed.design.relations[0].fields[1].default.is_some());
}

#[test]
fn parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.csv");
    std::fs::write(&path, FIELD_SITES).unwrap();

    let parsed = Parser::new(false).parse_file(&path).unwrap();
    assert_eq!(parsed.design.relations.len(), 3);
}

#[test]
fn missing_design_file_is_its_own_error() {
    let result = Parser::new(false).parse_file("/nonexistent/design.csv");
    assert!(matches!(result, Err(Error::DesignNotFound { .. })));
}
