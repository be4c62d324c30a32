//! confsched CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use confsched_core::{TracingConfig, init_tracing};

use confsched_client::cli::{Cli, Command, ConfigAction};
use confsched_client::commands::{self, Context};
use confsched_client::config::ClientConfig;
use confsched_client::error::{ClientError, ClientResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
    .map_err(ClientError::Config)?;
    cli.apply_to(&mut config);

    let tracing = if config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing) {
        eprintln!("warning: {}", e);
    }

    let output_format = cli.output_format(&config);
    match cli.command.unwrap_or_default() {
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, cli.config.as_deref()),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
        },
        Command::Schedule { day } => {
            let ctx = Context::new(config, output_format)?;
            commands::schedule::run(&ctx, day).await
        }
        Command::Search { text, tags } => {
            let ctx = Context::new(config, output_format)?;
            commands::search::run(&ctx, text, &tags).await
        }
        Command::Suggest { text, selected } => {
            let ctx = Context::new(config, output_format)?;
            commands::tags::suggest(&ctx, text, &selected)
        }
        Command::Show { id } => {
            let ctx = Context::new(config, output_format)?;
            commands::show::run(&ctx, &id).await
        }
        Command::Tags => {
            let ctx = Context::new(config, output_format)?;
            commands::tags::list(&ctx)
        }
    }
}
