use colored::Colorize;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marubatsu::QuestionBank;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "問題集 (Mondaishū)")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a question bank file and report whether it is usable.
    Check { json: PathBuf },
    /// Write the built-in question bank as JSON.
    Export { json: Option<PathBuf> },
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Bank(#[from] marubatsu::Error),
    #[error("cannot write bank file")]
    Write(#[from] io::Error),
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    match args.command {
        Commands::Check { json } => {
            info!("{}", format!("Checking bank at {:?}", json).cyan());
            let bank = match QuestionBank::from_json_file(&json) {
                Ok(bank) => bank,
                Err(err) => {
                    error!("{}", format!("Unusable bank: {}!", err).red());
                    return Err(err.into());
                }
            };

            for (idx, question) in bank.iter().enumerate() {
                info!(
                    "{} {}",
                    format!("├ {}.", idx + 1).blue(),
                    format!("{} ({})", question.text(), question.correct_answer()).green()
                );
            }
            println!(
                "{}",
                format!("{:?} holds {} questions.", json, bank.len()).bright_green()
            );
        }
        Commands::Export { json } => {
            let content = QuestionBank::builtin().to_json_string()?;
            match json {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    info!("{}", format!("Exported built-in bank to {:?}", path).blue());
                }
                None => println!("{}", content),
            }
        }
    }

    Ok(())
}
