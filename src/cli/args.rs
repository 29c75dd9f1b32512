//! CLI argument definitions using clap
//!
//! Commands:
//! - takip init --config <path>
//! - takip serve --config <path> [--port <port>]
//! - takip export --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// takip - flat-file inventory tracker for spindle assets and their spares
#[derive(Parser, Debug)]
#[command(name = "takip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and seed the backing files
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./takip.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./takip.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the combined export document to stdout and exit
    Export {
        /// Path to configuration file
        #[arg(long, default_value = "./takip.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["takip", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./takip.json"));
                assert!(port.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["takip", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, Some(8080)),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["takip", "frobnicate"]).is_err());
    }
}
