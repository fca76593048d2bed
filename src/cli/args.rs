//! CLI argument definitions using clap
//!
//! Commands:
//! - neo-explorer inspect --pdes <designation> | --name <name> [--verbose]
//! - neo-explorer query [criteria...] [--limit <n>] [--outfile <path>]
//! - neo-explorer stats
//! - neo-explorer interactive

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::filters::FilterCriteria;

/// Explore past and future close approaches of near-Earth objects
#[derive(Parser, Debug)]
#[command(name = "neo-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file of near-Earth objects
    #[arg(long, global = true, default_value = "data/neos.csv")]
    pub neofile: PathBuf,

    /// Path to the JSON file of close approach data
    #[arg(long, global = true, default_value = "data/cad.json")]
    pub cadfile: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a single NEO by designation or by name
    Inspect {
        /// Primary designation of the NEO
        #[arg(long)]
        pdes: Option<String>,

        /// IAU name of the NEO
        #[arg(long)]
        name: Option<String>,

        /// Also list the NEO's close approaches
        #[arg(long)]
        verbose: bool,
    },

    /// Query close approaches matching the given criteria
    Query {
        #[command(flatten)]
        criteria: QueryArgs,

        /// Maximum number of results (zero or less means unlimited)
        #[arg(long)]
        limit: Option<i64>,

        /// Write results to a .csv or .json file instead of stdout
        #[arg(long)]
        outfile: Option<PathBuf>,
    },

    /// Print database statistics
    Stats,

    /// Start an interactive session
    Interactive,
}

/// Query criteria flags, one per recognized filter criterion
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Exact approach date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Earliest approach date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest approach date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only approaches of potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only approaches of non-hazardous NEOs
    #[arg(long)]
    pub not_hazardous: bool,
}

impl QueryArgs {
    /// Maps the flags onto filter criteria. Unset flags stay unset and
    /// contribute no filter.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous: if self.hazardous {
                Some(true)
            } else if self.not_hazardous {
                Some(false)
            } else {
                None
            },
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
