use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "staff-atlas")]
#[command(about = "Staff Atlas CLI - personnel commute dataset tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a dataset CSV and print a summary
    Import {
        /// Dataset CSV file
        input: PathBuf,

        /// Also write the imported dataset as pretty JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Re-encode a dataset into the canonical layout, named with the current date
    Export {
        /// Dataset CSV file
        input: PathBuf,

        /// Output file path (defaults to 员工数据_<today>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search a dataset by department and free text
    Search {
        /// Dataset CSV file
        input: PathBuf,

        /// Keep only this exact department
        #[arg(short, long)]
        department: Option<String>,

        /// Case-insensitive term matched against name, department, and position
        #[arg(short, long)]
        term: Option<String>,
    },

    /// Resolve addresses to coordinates via OpenStreetMap Nominatim
    Geocode {
        /// Addresses to resolve
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Delay between network requests in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,

        /// Geocoding cache file carried across runs
        #[arg(long, default_value = staff_atlas_geocode::DEFAULT_CACHE_FILE)]
        cache_file: PathBuf,
    },

    /// Fill missing coordinates in a CSV by geocoding its address columns
    FillCoordinates {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Delay between network requests in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,

        /// Geocoding cache file carried across runs
        #[arg(long, default_value = staff_atlas_geocode::DEFAULT_CACHE_FILE)]
        cache_file: PathBuf,
    },

    /// Generate a deterministic sample dataset
    GenerateFixtures {
        /// Number of records to generate
        #[arg(short, long, default_value = "20")]
        count: u64,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file path
        #[arg(short, long, default_value = "fixtures.csv")]
        output: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { input, json } => commands::import::execute(input, json),

        Commands::Export { input, output } => commands::export::execute(input, output),

        Commands::Search {
            input,
            department,
            term,
        } => commands::search::execute(input, department, term),

        Commands::Geocode {
            addresses,
            delay_ms,
            cache_file,
        } => commands::geocode::execute(addresses, delay_ms, cache_file),

        Commands::FillCoordinates {
            input,
            output,
            delay_ms,
            cache_file,
        } => commands::fill_coordinates::execute(input, output, delay_ms, cache_file),

        Commands::GenerateFixtures {
            count,
            seed,
            output,
        } => commands::generate_fixtures::execute(count, seed, output),
    }
}
