use scour_core::error::ScourError;
use std::path::PathBuf;

use crate::config::{check_output_format, Config, CATALOG_ENV};

pub fn run(
    mut config: Config,
    set_catalog: Option<PathBuf>,
    set_output: Option<String>,
    show: bool,
) -> Result<(), ScourError> {
    let changed = set_catalog.is_some() || set_output.is_some();

    if let Some(path) = set_catalog {
        config.catalog = Some(path);
    }
    if let Some(format) = set_output {
        check_output_format(&format)?;
        config.output = Some(format);
    }
    if changed {
        config.save()?;
        println!("Saved {}", Config::config_path()?.display());
    }

    if show || !changed {
        println!("Config file: {}", Config::config_path()?.display());
        match config.catalog_path() {
            Some(path) if std::env::var_os(CATALOG_ENV).is_some() => {
                println!("  catalog: {} (from {CATALOG_ENV})", path.display())
            }
            Some(path) => println!("  catalog: {}", path.display()),
            None => println!("  catalog: preset '{}'", crate::commands::DEFAULT_PRESET),
        }
        println!(
            "  output:  {}",
            config.output.as_deref().unwrap_or("table")
        );
    }
    Ok(())
}
