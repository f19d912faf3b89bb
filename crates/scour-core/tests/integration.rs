//! Integration tests for the public matching and association API.
//!
//! Catalog and schedule files are written to temporary files so the
//! loaders run against real paths.

use scour_core::catalog::{self, builtin::load_preset, Catalog};
use scour_core::error::ScourError;
use scour_core::matching::{find_best_chemical, rank_chemicals, NoMatchReason};
use scour_core::model::{Chemical, Frequency};
use scour_core::schedule;
use std::io::Write;

fn chem(id: &str, used_for: &str) -> Chemical {
    Chemical {
        id: id.into(),
        name: id.to_uppercase(),
        used_for: used_for.into(),
        ..Default::default()
    }
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Matcher properties
// ---------------------------------------------------------------------------

#[test]
fn oven_task_picks_oven_chemical() {
    let catalog = vec![chem("A", "oven,grill"), chem("B", "floor")];
    assert_eq!(
        find_best_chemical("Oven", "Deep clean interior with degreaser", &catalog).as_deref(),
        Some("A")
    );
}

#[test]
fn missing_task_is_no_match_for_any_catalog() {
    let catalogs = [
        vec![],
        vec![chem("A", "oven")],
        vec![chem("A", "n/a"), chem("B", "oven, grill, floor")],
    ];
    for catalog in &catalogs {
        for task in ["", "  ", "N/A", "n/a", "  N/a  "] {
            assert_eq!(find_best_chemical("Oven", task, catalog), None);
        }
    }
}

#[test]
fn empty_catalog_is_no_match() {
    assert_eq!(find_best_chemical("Oven", "Degrease oven racks", &[]), None);
}

#[test]
fn chemical_without_keywords_is_never_returned() {
    let catalog = vec![Chemical {
        name: "Oven Grill Floor Cleaner".into(),
        application: "oven grill floor".into(),
        ..chem("A", "")
    }];
    assert_eq!(find_best_chemical("Oven", "Oven grill floor", &catalog), None);
    let report = rank_chemicals("Oven", "Oven grill floor", &catalog);
    assert!(report.candidates[0].skipped);
    assert_eq!(report.no_match_reason, Some(NoMatchReason::NoPositiveScore));
}

#[test]
fn exact_keyword_outranks_substring_keyword() {
    // Same penalty (none); "tray" exact vs "traysrack" partial.
    let catalog = vec![chem("partial", "traysrack"), chem("exact", "tray")];
    assert_eq!(
        find_best_chemical("Tray", "Soak", &catalog).as_deref(),
        Some("exact")
    );
}

#[test]
fn item_name_match_outranks_task_match() {
    // "kettle" only in item name, "boiler" only in task, both exact.
    let catalog = vec![chem("task", "boiler"), chem("item", "kettle")];
    assert_eq!(
        find_best_chemical("Kettle", "Descale boiler", &catalog).as_deref(),
        Some("item")
    );
    // Swapped catalog order gives the same answer.
    let swapped = vec![chem("item", "kettle"), chem("task", "boiler")];
    assert_eq!(
        find_best_chemical("Kettle", "Descale boiler", &swapped).as_deref(),
        Some("item")
    );
}

#[test]
fn more_hazard_never_raises_the_score() {
    let levels = [
        None,
        Some("Irritant"),
        Some("Harmful irritant"),
        Some("Corrosive, harmful irritant"),
        Some("Fatal, corrosive, harmful irritant"),
    ];
    let mut last = u32::MAX;
    for tox in levels {
        let candidate = Chemical {
            toxicological_info: tox.map(str::to_string),
            ..chem("A", "oven, grill, griddle")
        };
        let report = rank_chemicals("Grill Oven", "Griddle", &[candidate]);
        let score = report.candidates[0].score;
        assert!(score <= last, "{tox:?} scored {score} > {last}");
        last = score;
    }
}

#[test]
fn repeated_calls_are_identical() {
    let catalog = load_preset("steward").unwrap();
    let first = rank_chemicals("Flat Top Grill", "Scrape carbon off griddle", &catalog.chemicals);
    let second = rank_chemicals("Flat Top Grill", "Scrape carbon off griddle", &catalog.chemicals);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Catalog and schedule files
// ---------------------------------------------------------------------------

#[test]
fn load_catalog_from_file() {
    let file = write_temp(
        r##"[
            { "id": "1", "name": "Oven Cleaner", "usedFor": "oven", "color": "#ff0000" },
            { "id": "2", "name": "Glass Cleaner", "usedFor": "glass" }
        ]"##,
    );
    let catalog = catalog::load_catalog(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.chemicals[0].color.as_deref(), Some("#ff0000"));
}

#[test]
fn load_catalog_reports_path_on_bad_json() {
    let file = write_temp("{ not json");
    match catalog::load_catalog(file.path()) {
        Err(ScourError::CatalogLoad { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected CatalogLoad, got {other:?}"),
    }
}

#[test]
fn save_then_load_catalog_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let original = Catalog::new(vec![chem("b", "glass"), chem("a", "oven")]);
    catalog::save_catalog(&original, &path).unwrap();
    let loaded = catalog::load_catalog(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn generated_schedule_is_associated_end_to_end() {
    let file = write_temp(
        r#"{
            "schedule": [
                {
                    "category": "Cooking Equipment",
                    "items": [
                        {
                            "itemName": "Flat Top Grill",
                            "daily": { "task": "Scrape carbon and degrease griddle", "notes": "Work while warm" },
                            "weekly": { "task": "Deep clean grill plates" },
                            "monthly": { "task": "N/A", "notes": "N/A" }
                        },
                        {
                            "itemName": "Coffee Machine",
                            "daily": { "task": "Flush group heads" },
                            "weekly": { "task": "Descale with descaling solution" },
                            "monthly": { "task": "Replace water filter" }
                        }
                    ]
                }
            ]
        }"#,
    );
    let plan = schedule::load_schedule(file.path()).unwrap();
    let catalog = load_preset("steward").unwrap();

    let (associated, summary) = scour_core::suggest_for_schedule(&plan, &catalog).unwrap();

    let grill = &associated.schedule[0].items[0];
    let coffee = &associated.schedule[0].items[1];
    assert_eq!(grill.daily.chemical_id.as_deref(), Some("steward-oven-grill"));
    assert!(grill.monthly.chemical_id.is_none());
    assert_eq!(coffee.weekly.chemical_id.as_deref(), Some("steward-descaler"));
    assert_eq!(summary.filled + summary.unmatched + summary.kept, 6);
    assert_eq!(summary.kept, 0);
}

#[test]
fn manual_choice_survives_association() {
    let mut plan = schedule::parse_schedule_str(
        r#"{"schedule":[{"category":"Prep","items":[{
            "itemName":"Oven",
            "daily":{"task":"Degrease oven"},
            "weekly":{"task":"Degrease oven"},
            "monthly":{"task":"Degrease oven"}
        }]}]}"#,
    )
    .unwrap();
    schedule::assign_chemical(&mut plan, 0, 0, Frequency::Weekly, Some("B".into())).unwrap();

    let catalog = vec![chem("A", "oven"), chem("B", "floor")];
    let (out, summary) = scour_core::auto_associate(&plan, &catalog);
    let item = &out.schedule[0].items[0];
    assert_eq!(item.daily.chemical_id.as_deref(), Some("A"));
    assert_eq!(item.weekly.chemical_id.as_deref(), Some("B"));
    assert_eq!(item.monthly.chemical_id.as_deref(), Some("A"));
    assert_eq!(summary.kept, 1);
}

#[test]
fn invalid_catalog_is_rejected_before_association() {
    let plan = schedule::parse_schedule_str(
        r#"{"schedule":[{"category":"Prep","items":[]}]}"#,
    )
    .unwrap();
    let catalog = Catalog::new(vec![chem("A", "oven"), chem("A", "grill")]);
    assert!(matches!(
        scour_core::suggest_for_schedule(&plan, &catalog),
        Err(ScourError::CatalogInvalid(_))
    ));
}
