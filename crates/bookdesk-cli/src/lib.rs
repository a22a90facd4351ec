//! # bookdesk-cli
//!
//! Terminal front-end for BookDesk. Every screen of the web front-end maps
//! to a subcommand that drives the matching `bookdesk-service` controller
//! and renders its state as a table or as JSON.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::OutputFormat;
