use std::path::PathBuf;

use crate::model::Frequency;

#[derive(Debug, thiserror::Error)]
pub enum ScourError {
    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("failed to load schedule from {path}: {reason}")]
    ScheduleLoad { path: PathBuf, reason: String },

    #[error("invalid schedule: {0}")]
    ScheduleInvalid(String),

    #[error("chemical '{0}' not found in catalog")]
    ChemicalNotFound(String),

    #[error("no {frequency} slot at category {category}, item {item}")]
    SlotNotFound {
        category: usize,
        item: usize,
        frequency: Frequency,
    },

    #[error("import failed: {0}")]
    Import(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
