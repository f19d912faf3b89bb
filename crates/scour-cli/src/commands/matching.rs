use scour_core::error::ScourError;
use scour_core::matching::rank_chemicals;

use crate::commands::resolve_catalog;
use crate::config::Config;
use crate::output;
use crate::CatalogArgs;

pub fn run(
    item: &str,
    task: &str,
    source: &CatalogArgs,
    config: &Config,
    output_format: Option<String>,
    explain: bool,
) -> Result<(), ScourError> {
    let output_format = config.output_format(output_format)?;
    let catalog = resolve_catalog(source, config)?;

    let report = rank_chemicals(item, task, &catalog.chemicals);

    match output_format.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print_match(&report, &catalog, explain),
    }

    Ok(())
}
