//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use confsched_core::OutputFormat;

use crate::config::{ClientConfig, SourceKind};

/// confsched - Conference schedule browser
#[derive(Debug, Parser)]
#[command(name = "confsched")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CONFSCHED_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Timezone used to group events into days (IANA name)
    #[arg(long, short = 'z', global = true)]
    pub timezone: Option<String>,

    /// Read events from a saved Firestore response instead of the network
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    /// Maximum title length (truncated with ellipsis)
    #[arg(long, global = true)]
    pub max_title_length: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags and config.
    pub fn output_format(&self, config: &ClientConfig) -> OutputFormat {
        if self.json || config.display.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tty
        }
    }

    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut ClientConfig) {
        if self.debug {
            config.debug = true;
        }
        if self.json {
            config.display.json = true;
        }
        if let Some(ref timezone) = self.timezone {
            config.timezone = timezone.clone();
        }
        if let Some(ref file) = self.file {
            config.source.kind = SourceKind::File;
            config.source.path = Some(file.clone());
        }
        if let Some(max) = self.max_title_length {
            config.display.max_title_length = Some(max);
        }
    }
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the schedule grouped by day and start time (default)
    Schedule {
        /// Only show the Nth day (1-based)
        #[arg(long, short)]
        day: Option<usize>,
    },

    /// Search events by text and tags
    Search {
        /// Text matched against titles, tags, locations and speakers
        text: Option<String>,

        /// Only events carrying this tag id (can be repeated)
        #[arg(long = "tag", short, action = clap::ArgAction::Append)]
        tags: Vec<u32>,
    },

    /// Suggest tags whose label contains the text
    Suggest {
        /// Text to look for in tag labels
        text: Option<String>,

        /// Tag ids already selected, left out of the suggestions
        #[arg(long, short, action = clap::ArgAction::Append)]
        selected: Vec<u32>,
    },

    /// Show every detail of one event
    Show {
        /// Event id, as listed in JSON output
        id: String,
    },

    /// List every tag of the catalog
    Tags,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Schedule { day: None }
    }
}

/// Configuration actions.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
