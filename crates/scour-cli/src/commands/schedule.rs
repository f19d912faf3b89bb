use scour_core::error::ScourError;
use scour_core::model::Frequency;
use scour_core::schedule;
use std::path::Path;

use crate::commands::{frequencies_or_all, resolve_catalog, to_index};
use crate::config::Config;
use crate::output;
use crate::CatalogArgs;

pub fn show(
    file: &Path,
    frequencies: &[Frequency],
    source: &CatalogArgs,
    config: &Config,
) -> Result<(), ScourError> {
    let plan = schedule::load_schedule(file)?;
    let catalog = resolve_catalog(source, config)?;
    output::table::print_schedule(&plan, &catalog, &frequencies_or_all(frequencies), None);
    Ok(())
}

/// Set or clear one slot's chemical. The id must exist in the catalog.
pub fn assign(
    file: &Path,
    category: usize,
    item: usize,
    frequency: Frequency,
    chemical: Option<String>,
    source: &CatalogArgs,
    config: &Config,
) -> Result<(), ScourError> {
    let mut plan = schedule::load_schedule(file)?;

    if let Some(ref id) = chemical {
        let catalog = resolve_catalog(source, config)?;
        if catalog.get(id).is_none() {
            return Err(ScourError::ChemicalNotFound(id.clone()));
        }
    }

    schedule::assign_chemical(
        &mut plan,
        to_index(category, "category")?,
        to_index(item, "item")?,
        frequency,
        chemical.clone(),
    )?;
    schedule::save_schedule(&plan, file)?;

    match chemical {
        Some(id) => println!("Assigned {id} to {frequency} task {category}.{item}"),
        None => println!("Cleared chemical of {frequency} task {category}.{item}"),
    }
    Ok(())
}

pub fn notes(
    file: &Path,
    category: usize,
    item: usize,
    frequency: Frequency,
    notes: String,
) -> Result<(), ScourError> {
    let mut plan = schedule::load_schedule(file)?;
    schedule::update_notes(
        &mut plan,
        to_index(category, "category")?,
        to_index(item, "item")?,
        frequency,
        notes,
    )?;
    schedule::save_schedule(&plan, file)?;
    println!("Updated notes of {frequency} task {category}.{item}");
    Ok(())
}
