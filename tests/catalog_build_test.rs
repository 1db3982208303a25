use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vetrine::cli::commands::build::BuildCommand;
use vetrine::cli::commands::CommandResult;
use vetrine::io::write_catalog;
use vetrine::{CatalogBuilder, CatalogConfig, CatalogError};

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

/// img/ with two showcases of different case, a non-showcase folder and a
/// screenshot that must be ignored
fn sample_gallery() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let img = temp_dir.path().join("img");
    fs::create_dir_all(img.join("VETRINA 1")).unwrap();
    fs::create_dir_all(img.join("vetrina 2")).unwrap();
    fs::create_dir_all(img.join("OTHER")).unwrap();

    touch(&img.join("VETRINA 1").join("Merlo_1.jpg"));
    touch(&img.join("vetrina 2").join("Upupa (m e f).PNG"));
    touch(&img.join("vetrina 2").join("screenshot.png"));
    touch(&img.join("OTHER").join("Gufo.jpg"));

    temp_dir
}

fn config_for(temp_dir: &TempDir) -> CatalogConfig {
    CatalogConfig::for_root(temp_dir.path().join("img"))
        .with_output(temp_dir.path().join("data.json"))
}

#[test]
fn test_end_to_end_manifest() {
    let temp_dir = sample_gallery();
    let config = config_for(&temp_dir);

    let result = BuildCommand::new(config.clone(), false).run();
    assert!(result.is_success(), "{:?}", result);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&config.output).unwrap()).unwrap();

    assert_eq!(
        written,
        json!({
            "vetrine": ["VETRINA 1", "vetrina 2"],
            "birds": [
                { "name": "Merlo", "image_path": "img/VETRINA 1/Merlo_1.jpg", "vetrina": "VETRINA 1" },
                { "name": "Upupa", "image_path": "img/vetrina 2/Upupa (m e f).PNG", "vetrina": "vetrina 2" }
            ]
        })
    );
}

#[test]
fn test_showcase_without_images_still_listed() {
    let temp_dir = sample_gallery();
    let quiet = temp_dir.path().join("img").join("VETRINA 3");
    fs::create_dir_all(&quiet).unwrap();
    touch(&quiet.join(".hidden.jpg"));
    touch(&quiet.join("notes.txt"));
    touch(&quiet.join("Screenshot 2024.png"));

    let report = CatalogBuilder::new(config_for(&temp_dir))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        report.catalog.showcases,
        vec!["VETRINA 1", "VETRINA 3", "vetrina 2"]
    );
    assert!(report.catalog.items.iter().all(|i| i.showcase != "VETRINA 3"));
    let quiet_summary = report
        .showcases
        .iter()
        .find(|s| s.name == "VETRINA 3")
        .unwrap();
    assert_eq!(quiet_summary.images, 0);
    assert_eq!(quiet_summary.skipped, 3);
}

#[test]
fn test_rebuild_is_deterministic() {
    let temp_dir = sample_gallery();
    let img = temp_dir.path().join("img");
    touch(&img.join("VETRINA 1").join("Allodola_F.jpg"));
    touch(&img.join("VETRINA 1").join("Zigolo.jpeg"));

    let builder = CatalogBuilder::new(config_for(&temp_dir)).unwrap();
    let first = builder.build().unwrap().catalog;
    let second = builder.build().unwrap().catalog;
    assert_eq!(first, second);

    let labels: Vec<&str> = first.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Allodola", "Merlo", "Zigolo", "Upupa"]);
}

#[test]
fn test_missing_root_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    let result = BuildCommand::new(config.clone(), false).run();
    assert!(matches!(result, CommandResult::Error(_)));
    assert!(!config.output.exists());
}

#[test]
fn test_root_without_showcases_keeps_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("img").join("OTHER")).unwrap();
    touch(&temp_dir.path().join("img").join("OTHER").join("Merlo.jpg"));
    let config = config_for(&temp_dir);
    fs::write(&config.output, "{\"previous\": true}").unwrap();

    let builder = CatalogBuilder::new(config.clone()).unwrap();
    assert!(matches!(builder.build(), Err(CatalogError::EmptyCatalog { .. })));

    let result = BuildCommand::new(config.clone(), false).run();
    assert!(matches!(result, CommandResult::Warning(_)));
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "{\"previous\": true}"
    );
}

#[test]
fn test_write_failure_is_reported() {
    let temp_dir = sample_gallery();
    let config = config_for(&temp_dir).with_output(temp_dir.path().join("nope").join("data.json"));

    let report = CatalogBuilder::new(config.clone()).unwrap().build().unwrap();
    let err = write_catalog(&report.catalog, &config.output).unwrap_err();
    assert!(matches!(err, CatalogError::WriteFailure { .. }));
    assert!(err.to_string().contains("data.json"));

    let result = BuildCommand::new(config, false).run();
    assert!(matches!(result, CommandResult::Error(_)));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlinks_do_not_abort_build() {
    use std::os::unix::fs::symlink;

    let temp_dir = sample_gallery();
    let img = temp_dir.path().join("img");
    symlink(img.join("missing"), img.join("stale-link")).unwrap();
    symlink(img.join("gone.txt"), img.join("vetrina 2").join("old.txt")).unwrap();

    let report = CatalogBuilder::new(config_for(&temp_dir))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(report.catalog.showcases, vec!["VETRINA 1", "vetrina 2"]);
    assert_eq!(report.total_items(), 2);
    let second = report
        .showcases
        .iter()
        .find(|s| s.name == "vetrina 2")
        .unwrap();
    assert_eq!(second.images, 1);
    assert_eq!(second.skipped, 2);
}
