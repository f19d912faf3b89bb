use crate::catalog::Catalog;
use crate::error::ScourError;

const STEWARD_BASICS_JSON: &str = include_str!("../../../../catalogs/steward-basics.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["steward"];

/// Load a predefined catalog by name.
pub fn load_preset(name: &str) -> Result<Catalog, ScourError> {
    match name {
        "steward" => {
            let catalog: Catalog = serde_json::from_str(STEWARD_BASICS_JSON)?;
            Ok(catalog)
        }
        _ => Err(ScourError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// One-line description of a preset, for listings.
pub fn describe_preset(name: &str) -> Option<&'static str> {
    match name {
        "steward" => Some("Hotel steward department basics (oven, degreaser, descaler, sanitizer, glass, floor, polish, warewash)"),
        _ => None,
    }
}
