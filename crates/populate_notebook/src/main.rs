// crates/populate_notebook/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use populate_notebook::{populate, Outcome, PopulateConfig, OPEN_MARKER};

fn main() -> Result<()> {
    let matches = Command::new("populate_notebook")
        .version("0.1.0")
        .about("Copies a source file into the marker-delimited cell of an Azure Synapse notebook")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .required(true)
                .help("Source file whose contents will be injected"),
        )
        .arg(
            Arg::new("destination")
                .value_name("DESTINATION")
                .help("Destination notebook (defaults to the source path with a .json extension)"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("Skip the interactive confirmation prompt"),
        )
        .get_matches();

    let source_path = PathBuf::from(matches.get_one::<String>("source").unwrap());
    let destination_path = match matches.get_one::<String>("destination") {
        Some(destination) => PathBuf::from(destination),
        None => source_path.with_extension("json"),
    };
    let force = *matches.get_one::<bool>("force").unwrap();

    let config = PopulateConfig {
        source_path,
        destination_path,
        require_confirmation: true,
        force,
    };

    match populate(&config).context("failed to populate the notebook")? {
        Outcome::Updated => {
            println!("--------------------------------------------------");
            println!("Notebook updated: {}", config.destination_path.display());
        }
        Outcome::NoMarkerFound => {
            eprintln!(
                "Warning: no cell contains the {} marker; nothing was injected.",
                OPEN_MARKER
            );
        }
        Outcome::Aborted => println!("Aborted"),
    }
    Ok(())
}
