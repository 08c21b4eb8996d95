#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for Gothenburg district statistics.
//!
//! Turns report text files into map-ready display records (or a `GeoJSON`
//! layer), dumps the static district table, and prints sidebar profiles.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gbg_map_district::{map_layer, profile, registry};
use gbg_map_extract::batch;

#[derive(Parser)]
#[command(name = "gbg_map", about = "Gothenburg district statistics tool")]
struct Cli {
    /// Path to a TOML config file (overrides `GBG_MAP_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract statistics from report text files, one file per district in
    /// declared order
    Extract {
        /// Text files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print a `GeoJSON` `FeatureCollection` instead of records
        #[arg(long, conflicts_with = "report")]
        geojson: bool,
        /// Include per-file extraction reports (matched/unmatched fields)
        #[arg(long)]
        report: bool,
    },
    /// Print display records for the static district table
    Districts {
        /// Print a `GeoJSON` `FeatureCollection` instead of records
        #[arg(long)]
        geojson: bool,
    },
    /// Show the sidebar profile for one district
    Profile {
        /// District key (e.g. "centrum", "mölndal")
        key: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            files,
            geojson,
            report,
        } => {
            let texts = files
                .iter()
                .map(std::fs::read_to_string)
                .collect::<Result<Vec<_>, _>>()?;
            log::info!("Read {} text files", texts.len());

            let rules = config.rules()?;
            let items = batch::process_texts_with(&texts, &rules, &config.scoring);

            if report {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                let records: Vec<_> = items.into_iter().map(|item| item.record).collect();
                print_records(&records, geojson)?;
            }
        }
        Commands::Districts { geojson } => {
            let records = registry::display_records(&config.scoring);
            print_records(&records, geojson)?;
        }
        Commands::Profile { key, json } => {
            let profile = profile::static_profile(&key, &config.scoring)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{profile}");
            }
        }
    }

    Ok(())
}

fn print_records(
    records: &[gbg_map_district_models::DisplayRecord],
    geojson: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = if geojson {
        map_layer::to_geojson_string(records)?
    } else {
        serde_json::to_string_pretty(records)?
    };
    println!("{output}");
    Ok(())
}
