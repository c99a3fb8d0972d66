mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use transitpack::{Descriptor, WindowsLocaleResolver, open_package};

use crate::view::{print_descriptor, print_model};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a translation package and print the reconstructed project model.
    Inspect {
        /// The package file to open
        #[arg(short, long)]
        package: PathBuf,

        /// Directory to extract the package contents into
        #[arg(short, long)]
        destination: PathBuf,

        /// Print the model as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Parse a project descriptor (.PRJ) and print its sections.
    Descriptor {
        /// The descriptor file to parse
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.commands {
        Commands::Inspect {
            package,
            destination,
            json,
        } => {
            let model = open_package(&package, &destination, &WindowsLocaleResolver)?;
            if json {
                serde_json::to_writer_pretty(std::io::stdout().lock(), &model)?;
                println!();
            } else {
                print_model(&model);
            }
        }
        Commands::Descriptor { input } => {
            let descriptor = Descriptor::read_from(&input)?;
            print_descriptor(&descriptor);
        }
    }

    Ok(())
}
