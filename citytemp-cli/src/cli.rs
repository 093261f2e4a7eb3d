use anyhow::Result;
use clap::{Parser, Subcommand};

use citytemp_core::{Config, Exporter, Pipeline, WttrProvider, summarize};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citytemp", version, about = "Temperature dashboard for Indian cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current readings for the configured cities and show a summary.
    Fetch {
        /// Also export the results to a timestamped CSV file.
        #[arg(long)]
        csv: bool,

        /// Also export the results to a timestamped JSON file.
        #[arg(long)]
        json: bool,
    },

    /// List the configured cities in fetch order.
    Cities,

    /// Write the configuration file to disk so the city list can be edited.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Fetch { csv, json } => fetch(csv, json).await,
            Command::Cities => cities(),
            Command::Configure => configure(),
        }
    }
}

async fn fetch(csv: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let provider = WttrProvider::new()?;
    let pipeline = Pipeline::new(Box::new(provider)).with_delay(config.request_delay());

    println!("Fetching temperature data for {} cities...", config.cities.len());

    let report = pipeline.run(&config.cities).await;

    for failure in &report.failures {
        println!("✗ {failure}");
    }

    let summary = match summarize(&report.records) {
        Ok(summary) => summary,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    print!("{}", render::table(&report.records));
    print!("{}", render::summary(&summary));

    if csv || json {
        let exporter = Exporter::new(&config.output_dir);
        if csv {
            let path = exporter.export_csv(&report.records)?;
            println!("Data saved to CSV: {}", path.display());
        }
        if json {
            let path = exporter.export_json(&report.records)?;
            println!("Data saved to JSON: {}", path.display());
        }
    }

    Ok(())
}

fn cities() -> Result<()> {
    let config = Config::load()?;

    for city in &config.cities {
        println!("{city}");
    }

    Ok(())
}

fn configure() -> Result<()> {
    let config = Config::load()?;
    config.save()?;

    println!("Configuration written to {}", Config::config_file_path()?.display());

    Ok(())
}
