use scour_core::checklist::{load_checklist, save_checklist};
use scour_core::error::ScourError;
use scour_core::model::Frequency;
use scour_core::schedule;
use std::path::Path;

use crate::commands::{frequencies_or_all, resolve_catalog, to_index};
use crate::config::Config;
use crate::output;
use crate::CatalogArgs;

pub fn show(
    state_file: &Path,
    schedule_file: &Path,
    frequencies: &[Frequency],
    source: &CatalogArgs,
    config: &Config,
) -> Result<(), ScourError> {
    let plan = schedule::load_schedule(schedule_file)?;
    let catalog = resolve_catalog(source, config)?;
    let state = load_checklist(state_file)?;
    let frequencies = frequencies_or_all(frequencies);
    output::table::print_checklist(&plan, &catalog, &state, &frequencies);
    Ok(())
}

pub fn toggle(
    state_file: &Path,
    schedule_file: &Path,
    category: usize,
    item: usize,
    frequency: Frequency,
) -> Result<(), ScourError> {
    let plan = schedule::load_schedule(schedule_file)?;
    let mut state = load_checklist(state_file)?;

    let done = state.toggle_in(
        &plan,
        to_index(category, "category")?,
        to_index(item, "item")?,
        frequency,
    )?;
    save_checklist(&state, state_file)?;

    let mark = if done { "done" } else { "not done" };
    println!("{frequency} task {category}.{item} marked {mark}");
    Ok(())
}

pub fn reset(state_file: &Path, frequency: Frequency) -> Result<(), ScourError> {
    let mut state = load_checklist(state_file)?;
    state.reset(frequency);
    save_checklist(&state, state_file)?;
    println!("Cleared all {frequency} marks");
    Ok(())
}
