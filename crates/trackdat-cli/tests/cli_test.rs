use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const DESIGN: &str = "\
specimens,,,,,,
Specimen ID,specimen_id,manual key,,,,Collection number
Species,species,text,false,,,Species name,127
Collected,collected,date,true,NA,,Collection date
Condition,condition,text,,,good,Specimen condition,,good;fair;poor
";

#[test]
fn test_generate_writes_site_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let design = dir.path().join("design.csv");
    std::fs::write(&design, DESIGN).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("trackdat")
        .args([
            "generate",
            design.to_str().unwrap(),
            "herbarium",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    // Verify generated files exist
    let site = out.join("herbarium");
    assert!(site.join("core/models.py").exists());
    assert!(site.join("core/admin.py").exists());
    assert!(site.join("core/api.py").exists());
    assert!(site.join("snapshot_manager/models.py").exists());
    assert!(site.join("snapshot_manager/admin.py").exists());

    // Verify model contents
    let models = std::fs::read_to_string(site.join("core/models.py")).unwrap();
    assert!(models.contains("class Specimens(models.Model):"));
    assert!(models.contains("specimen_id = models.CharField(primary_key=True"));
    assert!(models.contains("collected = models.DateField("));

    let admin = std::fs::read_to_string(site.join("core/admin.py")).unwrap();
    assert!(admin.contains("admin.site.site_header = 'trackdat: herbarium'"));
    assert!(admin.contains("@admin.register(Specimens)"));
}

#[test]
fn test_generate_sanitizes_site_name() {
    let dir = tempfile::tempdir().unwrap();
    let design = dir.path().join("design.csv");
    std::fs::write(&design, DESIGN).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("trackdat")
        .args([
            "generate",
            design.to_str().unwrap(),
            "My Herbarium!",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out.join("my_herbarium/core/models.py").exists());
}

#[test]
fn test_validate_reports_relations() {
    let dir = tempfile::tempdir().unwrap();
    let design = dir.path().join("design.csv");
    std::fs::write(&design, DESIGN).unwrap();

    cargo_bin_cmd!("trackdat")
        .args(["validate", design.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_validate_json_dumps_the_design() {
    let dir = tempfile::tempdir().unwrap();
    let design = dir.path().join("design.csv");
    std::fs::write(&design, DESIGN).unwrap();

    let output = cargo_bin_cmd!("trackdat")
        .args(["validate", design.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["relations"][0]["name"], "Specimens");
    assert_eq!(value["relations"][0]["id_type"], "text");
    assert_eq!(value["relations"][0]["fields"][1]["name"], "species");
}

#[test]
fn test_unknown_data_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let design = dir.path().join("design.csv");
    std::fs::write(
        &design,
        "specimens,,,,,,\nSpecimen ID,specimen_id,quaternion,,,,Key\n",
    )
    .unwrap();

    cargo_bin_cmd!("trackdat")
        .args(["validate", design.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quaternion"));
}

#[test]
fn test_missing_design_file_fails() {
    cargo_bin_cmd!("trackdat")
        .args(["validate", "/nonexistent/design.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("design file not found"));
}
