pub mod catalog;
pub mod checklist;
pub mod error;
pub mod matching;
pub mod model;
pub mod schedule;

pub use catalog::Catalog;
pub use error::ScourError;
pub use matching::{find_best_chemical, rank_chemicals};
pub use model::{Chemical, CleaningSchedulePlan, Frequency, TaskDetail};
pub use schedule::{auto_associate, AssociationSummary};

/// Main API entry point: suggest a chemical for every empty slot of a
/// generated schedule.
///
/// Loads nothing and writes nothing; the caller supplies the catalog
/// snapshot. Slots that already reference a chemical keep it.
pub fn suggest_for_schedule(
    plan: &CleaningSchedulePlan,
    catalog: &Catalog,
) -> Result<(CleaningSchedulePlan, AssociationSummary), ScourError> {
    schedule::validate_schedule(plan)?;
    catalog::validate_catalog(catalog)?;
    Ok(auto_associate(plan, &catalog.chemicals))
}
