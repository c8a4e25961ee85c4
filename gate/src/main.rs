//! Flag-gated coding-challenge runner CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gate::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(name = "gate", version, about = "Flag-gated coding-challenge runner")]
struct Cli {
    /// Content root holding challenges.json, assets, and gate.toml.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List challenge ids.
    List,
    /// Print a challenge's description, tasks, and starter code.
    Show { id: String },
    /// Run a submission and print the verdict message.
    Run {
        id: String,
        /// Submission file; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    let code = match dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}

fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::List => cli::list_challenges(&cli.root).map(|()| exit_codes::OK),
        Command::Show { id } => cli::show_challenge(&cli.root, &id).map(|()| exit_codes::OK),
        Command::Run { id, file } => cli::run_challenge(&cli.root, &id, file.as_deref()),
    }
}
