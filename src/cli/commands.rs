//! CLI command implementations

use std::path::Path;

use crate::database::NeoDatabase;
use crate::extract::{load_approaches, load_neos};
use crate::filters::{limit, CompositeFilter, FilterCriteria};
use crate::model::CloseApproach;
use crate::write::{write_to_csv, write_to_json};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::shell;

/// CLI entry point: parses arguments, loads the database, dispatches.
pub fn run() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse_args();
    let db = load_database(&cli.neofile, &cli.cadfile)?;
    run_command(&db, cli.command)
}

/// Loads both data files and builds the database
pub fn load_database(neofile: &Path, cadfile: &Path) -> CliResult<NeoDatabase> {
    let neos = load_neos(neofile)?;
    let approaches = load_approaches(cadfile)?;
    Ok(NeoDatabase::new(neos, approaches)?)
}

/// Dispatches a parsed command against a loaded database
pub fn run_command(db: &NeoDatabase, command: Command) -> CliResult<()> {
    match command {
        Command::Inspect {
            pdes,
            name,
            verbose,
        } => inspect(db, pdes.as_deref(), name.as_deref(), verbose),
        Command::Query {
            criteria,
            limit,
            outfile,
        } => query(db, &criteria.to_criteria(), limit, outfile.as_deref()),
        Command::Stats => {
            println!("{}", db.statistics());
            Ok(())
        }
        Command::Interactive => shell::run(db),
    }
}

/// Prints a single NEO found by designation or name, optionally with its
/// close approaches.
pub fn inspect(
    db: &NeoDatabase,
    pdes: Option<&str>,
    name: Option<&str>,
    verbose: bool,
) -> CliResult<()> {
    let neo = match (pdes, name) {
        (Some(pdes), _) => db.get_by_designation(pdes),
        (None, Some(name)) => db.get_by_name(name),
        (None, None) => return Err(CliError::MissingInspectTarget),
    };

    match neo {
        Some(neo) => {
            println!("{}", neo);
            if verbose {
                for approach in db.approaches_of(neo) {
                    println!("- {}", db.describe(approach));
                }
            }
        }
        None => println!("No matching NEOs exist in the database."),
    }
    Ok(())
}

/// Runs a filtered query and prints or writes the capped results
pub fn query(
    db: &NeoDatabase,
    criteria: &FilterCriteria,
    cap: Option<i64>,
    outfile: Option<&Path>,
) -> CliResult<()> {
    let filter = CompositeFilter::from_criteria(criteria);
    let results: Vec<&CloseApproach> = limit(db.query(Some(&filter)), cap).collect();

    match outfile {
        Some(path) => {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("")
                .to_ascii_lowercase();
            match extension.as_str() {
                "csv" => write_to_csv(db, results, path)?,
                "json" => write_to_json(db, results, path)?,
                _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
            }
        }
        None => {
            for approach in &results {
                println!("{}", db.describe(approach));
            }
        }
    }
    Ok(())
}
