pub mod builtin;
pub mod import;

use crate::error::ScourError;
use crate::model::{Chemical, NewChemical};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// An ordered chemical catalog. Order matters: the matcher breaks score ties
/// in favour of earlier entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub chemicals: Vec<Chemical>,
}

impl Catalog {
    pub fn new(chemicals: Vec<Chemical>) -> Self {
        Self { chemicals }
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Chemical> {
        self.chemicals.iter().find(|c| c.id == id)
    }

    /// Append a chemical, giving it an id derived from the current time.
    pub fn add(&mut self, chemical: NewChemical) -> &Chemical {
        let id = self.unique_id(now_millis().to_string());
        self.chemicals.push(chemical.with_id(id));
        &self.chemicals[self.chemicals.len() - 1]
    }

    /// Append several chemicals with ids `<millis>-<index>`.
    pub fn bulk_add(&mut self, chemicals: Vec<NewChemical>) -> usize {
        let stamp = now_millis();
        let count = chemicals.len();
        for (index, chemical) in chemicals.into_iter().enumerate() {
            let id = self.unique_id(format!("{stamp}-{index}"));
            self.chemicals.push(chemical.with_id(id));
        }
        count
    }

    /// Replace the chemical with the same id.
    pub fn update(&mut self, chemical: Chemical) -> Result<(), ScourError> {
        match self.chemicals.iter_mut().find(|c| c.id == chemical.id) {
            Some(slot) => {
                *slot = chemical;
                Ok(())
            }
            None => Err(ScourError::ChemicalNotFound(chemical.id)),
        }
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.chemicals.len();
        self.chemicals.retain(|c| c.id != id);
        self.chemicals.len() != before
    }

    /// Append `-2`, `-3`, ... until the id is free.
    fn unique_id(&self, base: String) -> String {
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Load a catalog from a JSON file (an array of chemicals).
pub fn load_catalog(path: &Path) -> Result<Catalog, ScourError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScourError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog: Catalog = serde_json::from_str(&content).map_err(|e| ScourError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    tracing::debug!(path = %path.display(), chemicals = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, ScourError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Write a catalog as pretty JSON.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), ScourError> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Check that ids are present and unique and every chemical has a name.
///
/// Empty `usedFor` is allowed; such chemicals are simply never matched.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), ScourError> {
    let mut seen = HashSet::new();
    for (idx, chem) in catalog.chemicals.iter().enumerate() {
        if chem.id.trim().is_empty() {
            return Err(ScourError::CatalogInvalid(format!(
                "chemical #{} ('{}') has an empty id",
                idx + 1,
                chem.name
            )));
        }
        if chem.name.trim().is_empty() {
            return Err(ScourError::CatalogInvalid(format!(
                "chemical '{}' has an empty name",
                chem.id
            )));
        }
        if !seen.insert(chem.id.as_str()) {
            return Err(ScourError::CatalogInvalid(format!(
                "duplicate chemical id '{}'",
                chem.id
            )));
        }
    }
    Ok(())
}

/// Chemicals that can never be matched because `usedFor` has no keywords.
pub fn unmatchable(catalog: &Catalog) -> Vec<&Chemical> {
    catalog
        .chemicals
        .iter()
        .filter(|c| c.keywords().is_empty())
        .collect()
}
