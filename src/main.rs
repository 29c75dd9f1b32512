//! takip CLI entry point
//!
//! Parses CLI arguments, dispatches to the CLI commands and exits non-zero
//! on failure. All logic is delegated to the CLI module.

use takip::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
