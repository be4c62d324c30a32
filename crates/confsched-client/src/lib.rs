//! Command-line client for browsing a conference schedule.
//!
//! This crate provides the `confsched` binary: configuration loading,
//! argument parsing and the commands that load events through
//! `confsched-providers` and render them with `confsched-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
