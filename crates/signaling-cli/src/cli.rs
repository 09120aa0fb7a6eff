use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Copy-paste signaling for a receive-only ICE-lite audio call
#[derive(Debug, Parser)]
#[command(name = "rvoip-signal", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, env = "RVOIP_SIGNAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "RVOIP_SIGNAL_LOG", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read the local offer SDP and print the transport payload to copy
    Offer {
        /// Offer file; stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Indent the JSON payload
        #[arg(long)]
        pretty: bool,
    },

    /// Read the pasted remote payload and print the SDP answer
    Answer {
        /// Payload file; stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the answer to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
