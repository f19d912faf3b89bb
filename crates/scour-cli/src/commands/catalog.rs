use scour_core::catalog::import::{self, ImportOutcome};
use scour_core::catalog::{self, builtin, Catalog};
use scour_core::error::ScourError;
use std::path::Path;

use crate::output;

pub fn list() -> Result<(), ScourError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!("  {:<10} {} chemicals", name, catalog.len());
        if let Some(desc) = builtin::describe_preset(name) {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

/// Print a preset by name, or a catalog file by path.
pub fn show(source: &str) -> Result<(), ScourError> {
    let catalog = if builtin::PRESETS.contains(&source) {
        builtin::load_preset(source)?
    } else {
        catalog::load_catalog(Path::new(source))?
    };
    output::table::print_catalog(&catalog);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ScourError> {
    let catalog = catalog::load_catalog(file)?;
    println!("Valid catalog: {} chemicals", catalog.len());

    let unmatchable = catalog::unmatchable(&catalog);
    if !unmatchable.is_empty() {
        println!(
            "\n  Warning: {} chemical(s) have no usable keywords in usedFor and will never be matched:",
            unmatchable.len()
        );
        for chem in unmatchable {
            println!("    {} ({})", chem.name, chem.id);
        }
    }
    Ok(())
}

/// Read a bulk import file. `.xlsx` goes through the spreadsheet reader,
/// anything else is treated as `;`-delimited text.
pub fn read_import(input_file: &Path) -> Result<ImportOutcome, ScourError> {
    let is_xlsx = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if is_xlsx {
        let bytes = std::fs::read(input_file)?;
        import::parse_xlsx(&bytes)
    } else {
        let text = std::fs::read_to_string(input_file)?;
        import::parse_delimited(&text)
    }
}

pub fn import(input_file: &Path, into: Option<&Path>) -> Result<(), ScourError> {
    let outcome = read_import(input_file)?;

    for skipped in &outcome.skipped {
        tracing::warn!(
            line = skipped.line_number,
            reason = %skipped.reason,
            "skipped import line"
        );
    }

    let Some(target) = into else {
        let mut preview = Catalog::default();
        preview.bulk_add(outcome.chemicals);
        return output::json::print(&preview);
    };

    let mut catalog = if target.exists() {
        catalog::load_catalog(target)?
    } else {
        Catalog::default()
    };
    let added = catalog.bulk_add(outcome.chemicals);
    catalog::save_catalog(&catalog, target)?;

    println!(
        "Imported {} chemical(s) into {} ({} skipped)",
        added,
        target.display(),
        outcome.skipped.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_appends_to_existing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chemicals.txt");
        let target = dir.path().join("catalog.json");
        std::fs::write(
            &input,
            "Oven Cleaner;Sodium hydroxide;oven, grill;Spray;Corrosive;Gloves;#ff0000\n\
             too;few;fields\n\
             Glass Cleaner;Isopropanol;glass, mirror;Spray;;\n",
        )
        .unwrap();
        std::fs::write(
            &target,
            r#"[{ "id": "existing", "name": "Existing", "usedFor": "floor" }]"#,
        )
        .unwrap();

        import(&input, Some(&target)).unwrap();

        let catalog = catalog::load_catalog(&target).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.chemicals[0].id, "existing");
        assert_eq!(catalog.chemicals[1].name, "Oven Cleaner");
        assert!(catalog.chemicals[2].toxicological_info.is_none());
    }

    #[test]
    fn import_creates_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chemicals.csv");
        let target = dir.path().join("new.json");
        std::fs::write(&input, "Descaler;Citric acid;kettle;Soak;;\n").unwrap();

        import(&input, Some(&target)).unwrap();
        assert_eq!(catalog::load_catalog(&target).unwrap().len(), 1);
    }

    #[test]
    fn empty_import_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        std::fs::write(&input, "\n\n").unwrap();
        assert!(matches!(read_import(&input), Err(ScourError::Import(_))));
    }
}
