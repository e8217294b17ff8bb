//! Bitcoin DDoS Dataset Pipeline - Main Entry Point

use anyhow::Result;
use attack_calendar::{date_range_timestamps, write_timestamp_table, AttackCalendar};
use clap::{Parser, Subcommand};
use dataset_builder::DatasetBuilder;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "ddos-dataset", version, about = "Bitcoin DDoS block-feature dataset tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the labeled feature dataset from a directory of block files
    Extract {
        /// Directory of block-collection JSON files
        #[arg(long, default_value = "data/raw/blockdata/normal")]
        dir: PathBuf,
        /// Destination CSV path
        #[arg(long, default_value = "data/extracted_data/ddos_data.csv")]
        output_path: PathBuf,
    },
    /// Convert an attack-day date table to millisecond timestamps
    Timestamps {
        /// Input CSV with 'dosday' dates and 'postlink' columns
        #[arg(long)]
        input: PathBuf,
        /// Output timestamp CSV
        #[arg(long)]
        output: PathBuf,
    },
    /// Partition a date range into attack and normal days
    Partition {
        /// Range start, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Range end, YYYY-MM-DD (inclusive)
        #[arg(long)]
        end: String,
        /// Attack-day timestamp table
        #[arg(long, default_value = "data/raw/metadata/timestamp.csv")]
        attack_file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    info!("=== ddos-dataset v{} ===", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Extract { dir, output_path } => {
            let summary = DatasetBuilder::new(&dir, &output_path).build()?;
            info!(
                "extracted {} rows from {} files (label {}) into {}",
                summary.rows,
                summary.files,
                summary.label,
                output_path.display()
            );
        }
        Command::Timestamps { input, output } => {
            write_timestamp_table(&input, &output)?;
            info!("wrote timestamp table to {}", output.display());
        }
        Command::Partition {
            start,
            end,
            attack_file,
        } => {
            let calendar = AttackCalendar::load(&attack_file)?;
            let days = date_range_timestamps(&start, &end)?;
            let (attack, normal) = calendar.partition(&days);
            info!(
                "{} days in range: {} attack, {} normal",
                days.len(),
                attack.len(),
                normal.len()
            );
            for day in attack {
                println!("attack {day}");
            }
            for day in normal {
                println!("normal {day}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_defaults_mirror_crawler_layout() {
        let cli = Cli::try_parse_from(["ddos-dataset", "extract"]).unwrap();
        match cli.command {
            Command::Extract { dir, output_path } => {
                assert_eq!(dir, PathBuf::from("data/raw/blockdata/normal"));
                assert_eq!(
                    output_path,
                    PathBuf::from("data/extracted_data/ddos_data.csv")
                );
            }
            _ => panic!("expected extract subcommand"),
        }
    }

    #[test]
    fn test_calendar_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "ddos-dataset",
            "timestamps",
            "--input",
            "servByDate.csv",
            "--output",
            "timestamp.csv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Timestamps { .. }));

        let cli = Cli::try_parse_from([
            "ddos-dataset",
            "partition",
            "--start",
            "2011-02-01",
            "--end",
            "2013-10-31",
        ])
        .unwrap();
        match cli.command {
            Command::Partition { start, end, attack_file } => {
                assert_eq!(start, "2011-02-01");
                assert_eq!(end, "2013-10-31");
                assert_eq!(attack_file, PathBuf::from("data/raw/metadata/timestamp.csv"));
            }
            _ => panic!("expected partition subcommand"),
        }
    }
}
