//! CLI module for takip
//!
//! Provides the command-line interface:
//! - init: create the data directory and seed the backing files
//! - serve: boot the stores and run the HTTP server
//! - export: one-shot combined export to stdout

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{export, init, run, serve, Config, CredentialConfig};
pub use errors::{CliError, CliResult};
