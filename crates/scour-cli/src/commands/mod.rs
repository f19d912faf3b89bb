pub mod associate;
pub mod catalog;
pub mod checklist;
pub mod config;
pub mod matching;
pub mod schedule;

use scour_core::catalog::{builtin, load_catalog, validate_catalog, Catalog};
use scour_core::error::ScourError;
use scour_core::model::Frequency;

use crate::config::Config;
use crate::CatalogArgs;

/// The default preset when nothing else names a catalog.
pub const DEFAULT_PRESET: &str = "steward";

/// Build the catalog for a command.
///
/// Presets come first, then catalog files, in the order given. Without
/// either, the configured catalog (or `SCOUR_CATALOG`) is used, falling back
/// to the default preset.
pub fn resolve_catalog(source: &CatalogArgs, config: &Config) -> Result<Catalog, ScourError> {
    let mut chemicals = Vec::new();

    if source.preset.is_empty() && source.catalog.is_empty() {
        let catalog = match config.catalog_path() {
            Some(path) => load_catalog(&path)?,
            None => builtin::load_preset(DEFAULT_PRESET)?,
        };
        return Ok(catalog);
    }

    for preset in &source.preset {
        chemicals.extend(builtin::load_preset(preset)?.chemicals);
    }
    for path in &source.catalog {
        chemicals.extend(load_catalog(path)?.chemicals);
    }

    let catalog = Catalog::new(chemicals);
    validate_catalog(&catalog)?;
    tracing::info!(chemicals = catalog.len(), "using combined catalog");
    Ok(catalog)
}

/// Convert a 1-based position from the command line to an index.
pub fn to_index(position: usize, what: &str) -> Result<usize, ScourError> {
    position
        .checked_sub(1)
        .ok_or_else(|| ScourError::ScheduleInvalid(format!("{what} numbers start at 1")))
}

/// All frequencies when none were asked for.
pub fn frequencies_or_all(frequencies: &[Frequency]) -> Vec<Frequency> {
    if frequencies.is_empty() {
        Frequency::ALL.to_vec()
    } else {
        frequencies.to_vec()
    }
}
