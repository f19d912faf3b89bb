use scour_core::error::ScourError;
use scour_core::schedule::{self, AssociationSummary};
use scour_core::CleaningSchedulePlan;
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::resolve_catalog;
use crate::config::Config;
use crate::output;
use crate::CatalogArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssociateOutput<'a> {
    summary: AssociationSummary,
    #[serde(flatten)]
    plan: &'a CleaningSchedulePlan,
}

pub fn run(
    schedule_file: PathBuf,
    source: &CatalogArgs,
    config: &Config,
    out: Option<PathBuf>,
    output_format: Option<String>,
) -> Result<(), ScourError> {
    let output_format = config.output_format(output_format)?;
    let plan = schedule::load_schedule(&schedule_file)?;
    let catalog = resolve_catalog(source, config)?;

    let (associated, summary) = scour_core::suggest_for_schedule(&plan, &catalog)?;

    if let Some(ref path) = out {
        schedule::save_schedule(&associated, path)?;
        tracing::info!(path = %path.display(), "wrote associated schedule");
    }

    match output_format.as_str() {
        "json" => output::json::print(&AssociateOutput {
            summary,
            plan: &associated,
        })?,
        _ => {
            let all = scour_core::model::Frequency::ALL;
            output::table::print_schedule(&associated, &catalog, &all, None);
            output::table::print_summary(&summary);
            for slot in schedule::dangling_references(&associated, &catalog.chemicals) {
                tracing::warn!(
                    item = slot.item_name,
                    frequency = %slot.frequency,
                    chemical = slot.detail.chemical_id.as_deref().unwrap_or_default(),
                    "slot references a chemical that is not in the catalog"
                );
            }
        }
    }

    Ok(())
}
