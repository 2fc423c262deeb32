//! Command-line interface.
//!
//! Flags are parsed before the terminal is touched, so `--version`,
//! `--help` and `--logout` print to a normal screen and exit.
//!
//! ```ignore
//! use stackit::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::RunTui(options) => { /* start the TUI */ }
//!     other => { /* print and exit */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_string, VERSION};

use crate::config::ClientConfig;

/// Layer parsed flags on top of `config`.
pub fn apply_options(config: ClientConfig, options: &RunOptions) -> ClientConfig {
    let mut config = config;
    if let Some(url) = &options.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(route) = options.route {
        config = config.with_initial_route(route);
    }
    config
}
