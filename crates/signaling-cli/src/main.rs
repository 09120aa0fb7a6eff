//! `rvoip-signal`: the operator side of a copy-paste ICE-lite call.
//!
//! `rvoip-signal offer` turns the local engine's offer into the JSON payload to
//! hand to the remote side; `rvoip-signal answer` turns the payload pasted back
//! into the SDP answer for the local engine.

mod cli;
mod config;
mod logging;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use rvoip_signaling_core::{answer_from_payload, local_offer_payload};

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::logging::{LoggingConfig, parse_log_level, setup_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    setup_logging(logging_config(&cli, &config)?)?;

    match cli.command {
        Command::Offer { input, pretty } => {
            let raw_offer = read_input(input.as_deref())?;
            let payload = local_offer_payload(&raw_offer, pretty || config.output.pretty_json)?;
            info!("Offer payload ready, copy it to the remote side");
            println!("{}", payload);
        }
        Command::Answer { input, output } => {
            let payload = read_input(input.as_deref())?;
            let answer = answer_from_payload(payload.trim())?;
            match output {
                Some(path) => {
                    fs::write(&path, &answer)
                        .with_context(|| format!("Failed to write answer to {}", path.display()))?;
                    info!("Answer written to {}", path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(answer.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
    }

    Ok(())
}

/// Command-line flags take precedence over the configuration file
fn logging_config(cli: &Cli, config: &CliConfig) -> Result<LoggingConfig> {
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let mut logging = LoggingConfig::new(parse_log_level(level)?);
    if cli.json_logs || config.logging.json {
        logging = logging.with_json();
    }
    if config.logging.file_info {
        logging = logging.with_file_info();
    }
    Ok(logging)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
