mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use scour_core::model::Frequency;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scour",
    version,
    about = "Match cleaning chemicals to kitchen cleaning tasks"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the chemical catalog from.
#[derive(clap::Args, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file(s), concatenated in order
    #[arg(short, long = "catalog", value_name = "FILE")]
    pub catalog: Vec<PathBuf>,

    /// Predefined catalog(s): steward (default if no catalog is configured)
    #[arg(short, long = "preset", value_name = "NAME")]
    pub preset: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the best chemical for one cleaning task
    Match {
        /// Item or equipment name, e.g. "Combi Oven"
        item: String,

        /// Task description, e.g. "Degrease interior"
        task: String,

        #[command(flatten)]
        source: CatalogArgs,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,

        /// Show how every candidate was scored
        #[arg(long)]
        explain: bool,
    },
    /// Fill empty chemical slots in a generated schedule
    Associate {
        /// Schedule JSON file
        schedule_file: PathBuf,

        #[command(flatten)]
        source: CatalogArgs,

        /// Write the associated schedule to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Manage and inspect chemical catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect and edit schedules
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
    /// Track completed tasks
    Checklist {
        /// Checklist state JSON file (created if missing)
        state_file: PathBuf,

        #[command(subcommand)]
        action: ChecklistAction,
    },
    /// Show or change persistent settings
    Config {
        /// Default catalog file used when no --catalog/--preset is given
        #[arg(long, value_name = "FILE")]
        set_catalog: Option<PathBuf>,

        /// Default output format: table or json
        #[arg(long, value_name = "FORMAT")]
        set_output: Option<String>,

        /// Print the effective configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List predefined catalogs
    List,
    /// Print the chemicals in a preset or catalog file
    Show {
        /// Preset name or path to a catalog JSON file
        source: String,
    },
    /// Validate a catalog file
    Validate {
        /// Path to catalog JSON file
        file: PathBuf,
    },
    /// Bulk import chemicals from ';'-delimited text or an xlsx sheet
    Import {
        /// Input file (.txt/.csv with ';' fields, or .xlsx)
        input_file: PathBuf,

        /// Append to this catalog file (created if missing) instead of printing
        #[arg(long, value_name = "CATALOG")]
        into: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ScheduleAction {
    /// Print a schedule with chemical names
    Show {
        /// Schedule JSON file
        file: PathBuf,

        /// Only show these frequencies (daily, weekly, monthly)
        #[arg(short, long = "frequency", value_name = "FREQ", value_parser = parse_frequency)]
        frequency: Vec<Frequency>,

        #[command(flatten)]
        source: CatalogArgs,
    },
    /// Set or clear the chemical of one task slot
    Assign {
        /// Schedule JSON file (edited in place)
        file: PathBuf,
        /// Category number (1-based)
        category: usize,
        /// Item number within the category (1-based)
        item: usize,
        #[arg(value_parser = parse_frequency)]
        frequency: Frequency,
        /// Chemical id; omit to clear the slot
        chemical: Option<String>,

        #[command(flatten)]
        source: CatalogArgs,
    },
    /// Replace the notes of one task slot
    Notes {
        /// Schedule JSON file (edited in place)
        file: PathBuf,
        /// Category number (1-based)
        category: usize,
        /// Item number within the category (1-based)
        item: usize,
        #[arg(value_parser = parse_frequency)]
        frequency: Frequency,
        notes: String,
    },
}

#[derive(Subcommand)]
enum ChecklistAction {
    /// Print the checklist for a schedule
    Show {
        /// Schedule JSON file
        schedule: PathBuf,

        #[arg(short, long = "frequency", value_name = "FREQ", value_parser = parse_frequency)]
        frequency: Vec<Frequency>,

        #[command(flatten)]
        source: CatalogArgs,
    },
    /// Mark or unmark one task
    Toggle {
        /// Schedule JSON file
        schedule: PathBuf,
        /// Category number (1-based)
        category: usize,
        /// Item number within the category (1-based)
        item: usize,
        #[arg(value_parser = parse_frequency)]
        frequency: Frequency,
    },
    /// Clear all marks for one frequency
    Reset {
        #[arg(value_parser = parse_frequency)]
        frequency: Frequency,
    },
}

fn parse_frequency(s: &str) -> Result<Frequency, String> {
    Frequency::from_str_loose(s)
        .ok_or_else(|| format!("unknown frequency '{s}' (expected daily, weekly or monthly)"))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = config::Config::load().and_then(|config| match cli.command {
        Commands::Match {
            item,
            task,
            source,
            output,
            explain,
        } => commands::matching::run(&item, &task, &source, &config, output, explain),
        Commands::Associate {
            schedule_file,
            source,
            out,
            output,
        } => commands::associate::run(schedule_file, &source, &config, out, output),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Show { source } => commands::catalog::show(&source),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
            CatalogAction::Import { input_file, into } => {
                commands::catalog::import(&input_file, into.as_deref())
            }
        },
        Commands::Schedule { action } => match action {
            ScheduleAction::Show {
                file,
                frequency,
                source,
            } => commands::schedule::show(&file, &frequency, &source, &config),
            ScheduleAction::Assign {
                file,
                category,
                item,
                frequency,
                chemical,
                source,
            } => commands::schedule::assign(
                &file, category, item, frequency, chemical, &source, &config,
            ),
            ScheduleAction::Notes {
                file,
                category,
                item,
                frequency,
                notes,
            } => commands::schedule::notes(&file, category, item, frequency, notes),
        },
        Commands::Checklist { state_file, action } => match action {
            ChecklistAction::Show {
                schedule,
                frequency,
                source,
            } => commands::checklist::show(&state_file, &schedule, &frequency, &source, &config),
            ChecklistAction::Toggle {
                schedule,
                category,
                item,
                frequency,
            } => commands::checklist::toggle(&state_file, &schedule, category, item, frequency),
            ChecklistAction::Reset { frequency } => {
                commands::checklist::reset(&state_file, frequency)
            }
        },
        Commands::Config {
            set_catalog,
            set_output,
            show,
        } => commands::config::run(config, set_catalog, set_output, show),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
